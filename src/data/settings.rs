use crate::data::persistence::Persistable;
use crate::data::scheduled_item::Environment;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlannerSettings {
    pub default_environment: Environment,
    /// Column count for window-mode views.
    pub window_days: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        PlannerSettings {
            default_environment: Environment::Prod,
            window_days: 31,
        }
    }
}

impl Persistable for PlannerSettings {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn is_json() -> bool {
        false
    }
}
