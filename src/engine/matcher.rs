use crate::data::scheduled_item::{Environment, ScheduledItem};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Returns true if `date` is in [start_date, end_date] inclusive. An item
/// with a reversed interval covers no date, so the predicate stays total
/// even if one slips past boundary validation.
pub fn covers(item: &ScheduledItem, date: NaiveDate) -> bool {
    item.start_date <= date && date <= item.end_date
}

/// All items for one (application, environment) covering `date`, in the
/// collection's insertion order. Order is the determinism contract for the
/// grid and for multi-event detail display.
pub fn find_matches<'a>(
    items: &'a [ScheduledItem],
    application: &str,
    environment: Environment,
    date: NaiveDate,
) -> Vec<&'a ScheduledItem> {
    items
        .iter()
        .filter(|item| {
            item.application == application && item.environment == environment && covers(item, date)
        })
        .collect()
}

/// Pre-grouped view of a snapshot keyed by (application, environment), so a
/// grid render does one scan of the collection instead of one per cell.
/// Borrows the snapshot it was built from and holds no other state.
pub struct ScheduleIndex<'a> {
    by_key: HashMap<(&'a str, Environment), Vec<&'a ScheduledItem>>,
}

impl<'a> ScheduleIndex<'a> {
    pub fn build(items: &'a [ScheduledItem]) -> Self {
        let mut by_key: HashMap<(&'a str, Environment), Vec<&'a ScheduledItem>> = HashMap::new();
        for item in items {
            by_key
                .entry((item.application.as_str(), item.environment))
                .or_default()
                .push(item);
        }
        ScheduleIndex { by_key }
    }

    /// Same result as [`find_matches`] over the indexed snapshot.
    pub fn matches(
        &self,
        application: &str,
        environment: Environment,
        date: NaiveDate,
    ) -> Vec<&'a ScheduledItem> {
        match self.by_key.get(&(application, environment)) {
            Some(items) => items.iter().filter(|i| covers(i, date)).copied().collect(),
            None => Vec::new(),
        }
    }
}
