pub mod axis;
pub mod calendar;
pub mod lookup;
pub mod matcher;
pub mod resolver;
pub mod scope;

pub use axis::{AxisError, CalendarAxis};
pub use calendar::{DayClass, HolidayCalendar};
pub use lookup::lookup_details;
pub use matcher::ScheduleIndex;
pub use resolver::{resolve_cell, resolve_grid, CellDescriptor, GridRow};
pub use scope::{apply_scope, ProjectScope};
