use crate::data::persistence::Persistable;
use crate::data::scheduled_item::ScheduleData;
use serde::{Deserialize, Serialize};

/// Configured application rows. Kept separately from the item collection so
/// a row can exist (and render) before any change is scheduled against it.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct ApplicationData {
    pub applications: Vec<String>,
}

impl Persistable for ApplicationData {
    fn filename() -> &'static str {
        "applications.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl ApplicationData {
    /// Names are uppercased on entry; duplicates are ignored.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim().to_uppercase();
        if name.is_empty() || self.applications.contains(&name) {
            return false;
        }
        self.applications.push(name);
        true
    }

    /// Sorted view for display; the stored order is entry order.
    pub fn sorted(&self) -> Vec<String> {
        let mut apps = self.applications.clone();
        apps.sort();
        apps
    }

    /// Grid rows: configured applications plus any application that appears
    /// in the item collection, sorted and deduplicated. An item against an
    /// unconfigured application still gets a row rather than vanishing.
    pub fn rows_with(&self, schedule: &ScheduleData) -> Vec<String> {
        let mut apps = self.applications.clone();
        for app in schedule.applications() {
            if !apps.contains(&app) {
                apps.push(app);
            }
        }
        apps.sort();
        apps
    }
}
