use crate::data::{ApplicationData, Environment, Persistable, PlannerSettings, ScheduleData};
use crate::engine::resolver::GridRow;
use crate::engine::{
    resolve_grid, CalendarAxis, CellDescriptor, HolidayCalendar, ProjectScope, ScheduleIndex,
};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};

pub fn run(
    year: Option<i32>,
    month: Option<u32>,
    start: Option<NaiveDate>,
    days: Option<u32>,
    environment: Option<Environment>,
    scope: &ProjectScope,
    app_filter: Option<&str>,
) -> Result<()> {
    let schedule = ScheduleData::load()?;
    let applications = ApplicationData::load()?;
    let settings = PlannerSettings::load()?;
    let environment = environment.unwrap_or(settings.default_environment);

    let today = Local::now().date_naive();
    let axis = match start {
        // Window mode: a fixed span of days from an arbitrary start.
        Some(start) => CalendarAxis::window(start, days.unwrap_or(settings.window_days))?,
        None => {
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            CalendarAxis::month(year, month)?
        }
    };

    let mut apps = applications.rows_with(&schedule);
    if let Some(filter) = app_filter {
        let filter = filter.to_uppercase();
        apps.retain(|a| a == &filter);
    }

    let calendar = HolidayCalendar::french_for_axis(&axis);
    let index = ScheduleIndex::build(&schedule.items);
    let rows = resolve_grid(&index, &calendar, &apps, &axis, environment, scope, today);

    write_grid(&rows, &axis, environment, scope, &mut std::io::stdout())
}

/// Short cell text for the text grid: the first matching item's category
/// code (with a '+' when more items overlap), otherwise the day type.
pub(crate) fn cell_text(cell: &CellDescriptor) -> String {
    if let Some(first) = cell.matches.first() {
        if cell.matches.len() > 1 {
            format!("{}+", first.category.code())
        } else {
            first.category.code().to_string()
        }
    } else if cell.holiday_name.is_some() {
        "hol".to_string()
    } else if cell.is_weekend {
        "we".to_string()
    } else {
        ".".to_string()
    }
}

pub(crate) fn write_grid<W: std::io::Write>(
    rows: &[GridRow],
    axis: &CalendarAxis,
    environment: Environment,
    scope: &ProjectScope,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "{} [{} - {}] ({})",
        environment,
        axis.first(),
        axis.last(),
        scope
    )?;
    writeln!(out, "---")?;

    write!(out, "  {:<16}", "Application")?;
    for date in axis.days() {
        write!(out, " {:>4}", date.day())?;
    }
    writeln!(out)?;

    for row in rows {
        write!(out, "  {:<16}", row.application)?;
        for cell in &row.cells {
            write!(out, " {:>4}", cell_text(cell))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "---")?;
    writeln!(out, "Total: {} application(s)", rows.len())?;
    Ok(())
}
