use crate::data::{Persistable, ScheduleData};
use anyhow::Result;

pub fn run() -> Result<()> {
    let schedule = ScheduleData::load()?;
    write_items(&schedule, &mut std::io::stdout())
}

pub(crate) fn write_items<W: std::io::Write>(data: &ScheduleData, out: &mut W) -> Result<()> {
    writeln!(out, "Scheduled items")?;
    writeln!(out, "---")?;
    writeln!(
        out,
        "  {:<4} {:<16} {:<16} {:<16} {:<12} {:<12} {}",
        "#", "Application", "Environment", "Category", "Start", "End", "Project"
    )?;
    for (i, item) in data.items.iter().enumerate() {
        writeln!(
            out,
            "  {:<4} {:<16} {:<16} {:<16} {:<12} {:<12} {}",
            i + 1,
            item.application,
            item.environment.label(),
            item.category.label(),
            item.start_date.to_string(),
            item.end_date.to_string(),
            item.project.as_deref().unwrap_or("-")
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} item(s)", data.items.len())?;
    Ok(())
}
