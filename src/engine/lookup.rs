use crate::data::scheduled_item::{Environment, ScheduledItem};
use crate::engine::matcher::find_matches;
use crate::engine::scope::{apply_scope, ProjectScope};
use chrono::NaiveDate;

/// The items behind one cell, for display outside the grid: match then
/// scope, exactly what the cell resolver puts in `matches`. Standalone so
/// an "inspect this cell" action does not re-render the whole view.
pub fn lookup_details<'a>(
    items: &'a [ScheduledItem],
    application: &str,
    date: NaiveDate,
    environment: Environment,
    scope: &ProjectScope,
) -> Vec<&'a ScheduledItem> {
    apply_scope(
        find_matches(items, application, environment, date),
        environment,
        scope,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::scheduled_item::Category;
    use crate::engine::calendar::HolidayCalendar;
    use crate::engine::matcher::ScheduleIndex;
    use crate::engine::resolver::resolve_cell;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn fixture() -> Vec<ScheduledItem> {
        let mut with_project = ScheduledItem::new(
            "PAY",
            Environment::Acceptance,
            Category::Test,
            d(2026, 3, 11),
            d(2026, 3, 13),
        );
        with_project.project = Some("ALPHA".to_string());
        vec![
            ScheduledItem::new(
                "PAY",
                Environment::Prod,
                Category::Deployment,
                d(2026, 3, 10),
                d(2026, 3, 12),
            ),
            with_project,
            ScheduledItem::new(
                "PAY",
                Environment::Acceptance,
                Category::RegressionTest,
                d(2026, 3, 11),
                d(2026, 3, 11),
            ),
        ]
    }

    #[test]
    fn test_lookup_matches_and_scopes() {
        let items = fixture();
        let hits = lookup_details(
            &items,
            "PAY",
            d(2026, 3, 11),
            Environment::Acceptance,
            &ProjectScope::Unscoped,
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, Category::RegressionTest);
    }

    #[test]
    fn test_lookup_no_hits_for_uncovered_date() {
        let items = fixture();
        let hits = lookup_details(
            &items,
            "PAY",
            d(2026, 3, 20),
            Environment::Prod,
            &ProjectScope::All,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_lookup_empty_collection() {
        let hits = lookup_details(
            &[],
            "PAY",
            d(2026, 3, 11),
            Environment::Prod,
            &ProjectScope::All,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_lookup_equals_resolver_matches() {
        // The detail panel and the grid cell must never disagree.
        let items = fixture();
        let index = ScheduleIndex::build(&items);
        let cal = HolidayCalendar::french(2026);
        let today = d(2026, 3, 11);
        for env in Environment::ALL {
            for scope in [
                ProjectScope::All,
                ProjectScope::Unscoped,
                ProjectScope::project("ALPHA"),
                ProjectScope::project("BETA"),
            ] {
                for day in 9..=15 {
                    let date = d(2026, 3, day);
                    let cell =
                        resolve_cell(&index, &cal, "PAY", date, env, &scope, today);
                    let details = lookup_details(&items, "PAY", date, env, &scope);
                    assert_eq!(cell.matches, details, "{env}/{scope}/{date}");
                }
            }
        }
    }
}
