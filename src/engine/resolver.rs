use crate::data::scheduled_item::{Environment, ScheduledItem};
use crate::engine::axis::CalendarAxis;
use crate::engine::calendar::HolidayCalendar;
use crate::engine::matcher::ScheduleIndex;
use crate::engine::scope::{apply_scope, ProjectScope};
use chrono::NaiveDate;

/// Everything the presentation layer needs to know about one
/// (application, date) cell. Day-type flags and event matches are
/// independent fields: a weekend cell with two events reports both facts,
/// and the consumer decides visual precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct CellDescriptor<'a> {
    pub is_weekend: bool,
    pub holiday_name: Option<&'a str>,
    pub is_today: bool,
    /// Covering items in insertion order; zero, one or many, no dedup.
    pub matches: Vec<&'a ScheduledItem>,
}

impl CellDescriptor<'_> {
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// One grid row: an application and its cell per axis date.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<'a> {
    pub application: String,
    pub cells: Vec<CellDescriptor<'a>>,
}

/// Resolves one cell: classify the day, match items for the application and
/// environment, narrow by project scope, and report all of it side by side.
/// `today` is the evaluation date the caller chose, not the wall clock.
pub fn resolve_cell<'a>(
    index: &ScheduleIndex<'a>,
    calendar: &'a HolidayCalendar,
    application: &str,
    date: NaiveDate,
    environment: Environment,
    scope: &ProjectScope,
    today: NaiveDate,
) -> CellDescriptor<'a> {
    let class = calendar.classify(date);
    let matches = apply_scope(index.matches(application, environment, date), environment, scope);
    CellDescriptor {
        is_weekend: class.is_weekend,
        holiday_name: class.holiday_name,
        is_today: date == today,
        matches,
    }
}

/// Resolves a whole view: one row per application, one cell per axis date.
/// Zero applications or zero items produce empty rows or all-empty matches,
/// never an error.
pub fn resolve_grid<'a>(
    index: &ScheduleIndex<'a>,
    calendar: &'a HolidayCalendar,
    applications: &[String],
    axis: &CalendarAxis,
    environment: Environment,
    scope: &ProjectScope,
    today: NaiveDate,
) -> Vec<GridRow<'a>> {
    applications
        .iter()
        .map(|application| GridRow {
            application: application.clone(),
            cells: axis
                .days()
                .iter()
                .map(|date| {
                    resolve_cell(index, calendar, application, *date, environment, scope, today)
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::scheduled_item::Category;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn item(
        app: &str,
        env: Environment,
        cat: Category,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ScheduledItem {
        ScheduledItem::new(app, env, cat, start, end)
    }

    fn fixture() -> Vec<ScheduledItem> {
        vec![
            item(
                "PAY",
                Environment::Prod,
                Category::Deployment,
                d(2026, 3, 10),
                d(2026, 3, 12),
            ),
            item(
                "PAY",
                Environment::Prod,
                Category::Incident,
                d(2026, 3, 11),
                d(2026, 3, 11),
            ),
            item(
                "CRM",
                Environment::Prod,
                Category::Freeze,
                d(2026, 3, 14),
                d(2026, 3, 16),
            ),
        ]
    }

    #[test]
    fn test_resolve_cell_combines_matches_and_flags() {
        let items = fixture();
        let index = ScheduleIndex::build(&items);
        let cal = HolidayCalendar::french(2026);
        let cell = resolve_cell(
            &index,
            &cal,
            "PAY",
            d(2026, 3, 11),
            Environment::Prod,
            &ProjectScope::All,
            d(2026, 3, 11),
        );
        assert!(cell.is_today);
        assert!(!cell.is_weekend);
        assert_eq!(cell.holiday_name, None);
        assert_eq!(cell.matches.len(), 2);
        assert_eq!(cell.matches[0].category, Category::Deployment);
        assert_eq!(cell.matches[1].category, Category::Incident);
    }

    #[test]
    fn test_is_today_tracks_evaluation_date_not_wall_clock() {
        let items = fixture();
        let index = ScheduleIndex::build(&items);
        let cal = HolidayCalendar::french(2026);
        let cell = resolve_cell(
            &index,
            &cal,
            "PAY",
            d(2026, 3, 11),
            Environment::Prod,
            &ProjectScope::All,
            d(2026, 3, 12),
        );
        assert!(!cell.is_today);
    }

    #[test]
    fn test_weekend_flags_do_not_hide_matches() {
        // CRM freeze covers Saturday 2026-03-14: both facts must be visible
        let items = fixture();
        let index = ScheduleIndex::build(&items);
        let cal = HolidayCalendar::french(2026);
        let cell = resolve_cell(
            &index,
            &cal,
            "CRM",
            d(2026, 3, 14),
            Environment::Prod,
            &ProjectScope::All,
            d(2026, 3, 11),
        );
        assert!(cell.is_weekend);
        assert_eq!(cell.matches.len(), 1);
        assert_eq!(cell.matches[0].category, Category::Freeze);
    }

    #[test]
    fn test_holiday_flag_alongside_match() {
        let items = vec![item(
            "PAY",
            Environment::Prod,
            Category::Maintenance,
            d(2026, 7, 13),
            d(2026, 7, 15),
        )];
        let index = ScheduleIndex::build(&items);
        let cal = HolidayCalendar::french(2026);
        let cell = resolve_cell(
            &index,
            &cal,
            "PAY",
            d(2026, 7, 14),
            Environment::Prod,
            &ProjectScope::All,
            d(2026, 7, 1),
        );
        assert_eq!(cell.holiday_name, Some("Fête Nationale"));
        assert_eq!(cell.matches.len(), 1);
    }

    #[test]
    fn test_resolve_cell_applies_project_scope() {
        let mut scoped = item(
            "PAY",
            Environment::Acceptance,
            Category::Test,
            d(2026, 3, 11),
            d(2026, 3, 11),
        );
        scoped.project = Some("ALPHA".to_string());
        let unscoped = item(
            "PAY",
            Environment::Acceptance,
            Category::RegressionTest,
            d(2026, 3, 11),
            d(2026, 3, 11),
        );
        let items = vec![scoped, unscoped];
        let index = ScheduleIndex::build(&items);
        let cal = HolidayCalendar::french(2026);

        let beta = resolve_cell(
            &index,
            &cal,
            "PAY",
            d(2026, 3, 11),
            Environment::Acceptance,
            &ProjectScope::project("BETA"),
            d(2026, 3, 11),
        );
        assert_eq!(beta.matches.len(), 1);
        assert_eq!(beta.matches[0].category, Category::RegressionTest);

        let alpha = resolve_cell(
            &index,
            &cal,
            "PAY",
            d(2026, 3, 11),
            Environment::Acceptance,
            &ProjectScope::project("ALPHA"),
            d(2026, 3, 11),
        );
        assert_eq!(alpha.matches.len(), 2);
    }

    #[test]
    fn test_resolve_grid_one_row_per_application() {
        let items = fixture();
        let index = ScheduleIndex::build(&items);
        let cal = HolidayCalendar::french(2026);
        let axis = CalendarAxis::month(2026, 3).unwrap();
        let apps = vec!["CRM".to_string(), "PAY".to_string()];
        let rows = resolve_grid(
            &index,
            &cal,
            &apps,
            &axis,
            Environment::Prod,
            &ProjectScope::All,
            d(2026, 3, 11),
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].application, "CRM");
        assert_eq!(rows[0].cells.len(), 31);
        // PAY row: deployment covers the 10th..12th (indices 9..11)
        assert_eq!(rows[1].cells[9].matches.len(), 1);
        assert_eq!(rows[1].cells[10].matches.len(), 2);
        assert_eq!(rows[1].cells[12].matches.len(), 0);
    }

    #[test]
    fn test_resolve_grid_no_applications() {
        let items = fixture();
        let index = ScheduleIndex::build(&items);
        let cal = HolidayCalendar::french(2026);
        let axis = CalendarAxis::month(2026, 3).unwrap();
        let rows = resolve_grid(
            &index,
            &cal,
            &[],
            &axis,
            Environment::Prod,
            &ProjectScope::All,
            d(2026, 3, 11),
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn test_resolve_grid_no_items_all_cells_empty() {
        let items: Vec<ScheduledItem> = Vec::new();
        let index = ScheduleIndex::build(&items);
        let cal = HolidayCalendar::french(2026);
        let axis = CalendarAxis::month(2026, 3).unwrap();
        let apps = vec!["PAY".to_string()];
        let rows = resolve_grid(
            &index,
            &cal,
            &apps,
            &axis,
            Environment::Prod,
            &ProjectScope::All,
            d(2026, 3, 11),
        );
        assert_eq!(rows.len(), 1);
        assert!(rows[0].cells.iter().all(|c| c.matches.is_empty()));
        // Day-type metadata is still populated
        assert!(rows[0].cells[13].is_weekend); // 2026-03-14, Saturday
    }

    #[test]
    fn test_item_spanning_month_boundary_visible_in_both_months() {
        let items = vec![item(
            "PAY",
            Environment::Prod,
            Category::Freeze,
            d(2026, 3, 28),
            d(2026, 4, 3),
        )];
        let index = ScheduleIndex::build(&items);
        let cal = HolidayCalendar::french(2026);
        let scope = ProjectScope::All;
        let today = d(2026, 3, 30);

        let march = CalendarAxis::month(2026, 3).unwrap();
        let rows = resolve_grid(
            &index,
            &cal,
            &["PAY".to_string()],
            &march,
            Environment::Prod,
            &scope,
            today,
        );
        assert_eq!(rows[0].cells[30].matches.len(), 1); // March 31

        let april = CalendarAxis::month(2026, 4).unwrap();
        let rows = resolve_grid(
            &index,
            &cal,
            &["PAY".to_string()],
            &april,
            Environment::Prod,
            &scope,
            today,
        );
        assert_eq!(rows[0].cells[0].matches.len(), 1); // April 1
        assert_eq!(rows[0].cells[2].matches.len(), 1); // April 3
        assert_eq!(rows[0].cells[3].matches.len(), 0); // April 4
    }
}
