pub mod application;
pub mod persistence;
pub mod scheduled_item;
pub mod settings;

pub use application::ApplicationData;
pub use persistence::Persistable;
pub use scheduled_item::{Category, Environment, ItemError, ScheduleData, ScheduledItem};
pub use settings::PlannerSettings;
