use crate::engine::axis::{MAX_YEAR, MIN_YEAR};
use crate::engine::HolidayCalendar;
use anyhow::{bail, Result};

pub fn run(year: i32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        bail!("year {} is out of range (expected {}-{})", year, MIN_YEAR, MAX_YEAR);
    }
    let calendar = HolidayCalendar::french(year);
    write_holidays(&calendar, year, &mut std::io::stdout())
}

pub(crate) fn write_holidays<W: std::io::Write>(
    calendar: &HolidayCalendar,
    year: i32,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Public holidays {}", year)?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<14} {}", "Date", "Name")?;
    for (date, name) in calendar.holidays() {
        writeln!(out, "  {:<14} {}", date.to_string(), name)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} holiday(s)", calendar.len())?;
    Ok(())
}
