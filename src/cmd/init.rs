use crate::data::{
    ApplicationData, Category, Environment, PlannerSettings, ScheduleData, ScheduledItem,
};
use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!("Data files initialized successfully.");
    Ok(())
}

/// Writes all default data files into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    write_config(dir)?;
    write_applications(dir)?;
    write_schedule(dir)?;
    Ok(())
}

fn write_config(dir: &Path) -> Result<()> {
    let settings = PlannerSettings::default();
    let yaml = serde_norway::to_string(&settings)?;
    fs::write(dir.join("config.yaml"), yaml)?;
    Ok(())
}

fn write_applications(dir: &Path) -> Result<()> {
    let mut data = ApplicationData::default();
    for app in ["APPLICATION TEST", "PAY", "CRM"] {
        data.add(app);
    }
    let yaml = serde_norway::to_string(&data)?;
    fs::write(dir.join("applications.yaml"), yaml)?;
    Ok(())
}

fn write_schedule(dir: &Path) -> Result<()> {
    let mut data = ScheduleData::default();
    for item in sample_items() {
        data.add(item)?;
    }
    let json = serde_json::to_string_pretty(&data)?;
    fs::write(dir.join("schedule.json"), json)?;
    Ok(())
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_items() -> Vec<ScheduledItem> {
    vec![
        ScheduledItem::new(
            "PAY",
            Environment::Prod,
            Category::Deployment,
            d(2026, 3, 10),
            d(2026, 3, 12),
        )
        .with_note("release 4.2"),
        ScheduledItem::new(
            "PAY",
            Environment::Prod,
            Category::Incident,
            d(2026, 3, 11),
            d(2026, 3, 11),
        ),
        ScheduledItem::new(
            "CRM",
            Environment::Prod,
            Category::Freeze,
            d(2026, 12, 20),
            d(2027, 1, 3),
        )
        .with_note("year-end moratorium"),
        ScheduledItem::new(
            "APPLICATION TEST",
            Environment::Acceptance,
            Category::Test,
            d(2026, 3, 2),
            d(2026, 3, 6),
        )
        .with_project("ALPHA"),
        ScheduledItem::new(
            "APPLICATION TEST",
            Environment::Acceptance,
            Category::RegressionTest,
            d(2026, 3, 4),
            d(2026, 3, 5),
        ),
        ScheduledItem::new(
            "CRM",
            Environment::Preprod,
            Category::Maintenance,
            d(2026, 3, 14),
            d(2026, 3, 15),
        ),
    ]
}
