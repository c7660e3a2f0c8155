use crate::data::{Environment, Persistable, PlannerSettings, ScheduleData, ScheduledItem};
use crate::engine::{lookup_details, ProjectScope};
use anyhow::Result;
use chrono::NaiveDate;

pub fn run(
    application: &str,
    date: NaiveDate,
    environment: Option<Environment>,
    scope: &ProjectScope,
) -> Result<()> {
    let schedule = ScheduleData::load()?;
    let settings = PlannerSettings::load()?;
    let environment = environment.unwrap_or(settings.default_environment);
    let application = application.to_uppercase();
    let details = lookup_details(&schedule.items, &application, date, environment, scope);
    write_detail(&application, date, environment, &details, &mut std::io::stdout())
}

pub(crate) fn write_detail<W: std::io::Write>(
    application: &str,
    date: NaiveDate,
    environment: Environment,
    details: &[&ScheduledItem],
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{} on {} ({})", application, date, environment)?;
    writeln!(out, "---")?;
    if details.is_empty() {
        writeln!(out, "  No scheduled item covers this day.")?;
    }
    for (i, item) in details.iter().enumerate() {
        writeln!(
            out,
            "  {:<4} {:<16} {} {} - {} {}",
            i + 1,
            item.category.label(),
            item.start_date,
            item.start_time,
            item.end_date,
            item.end_time
        )?;
        if let Some(project) = &item.project {
            writeln!(out, "       project: {}", project)?;
        }
        if let Some(note) = &item.note {
            writeln!(out, "       note: {}", note)?;
        }
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} item(s)", details.len())?;
    Ok(())
}
