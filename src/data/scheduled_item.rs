use crate::data::persistence::Persistable;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Deployment tier an item applies to. Storage spellings are fixed; the
/// persistence collaborator round-trips them verbatim.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    #[serde(rename = "PROD")]
    Prod,
    #[serde(rename = "PRE-PROD")]
    Preprod,
    #[serde(rename = "TEST/ACCEPTANCE")]
    Acceptance,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Prod,
        Environment::Preprod,
        Environment::Acceptance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Environment::Prod => "PROD",
            Environment::Preprod => "PRE-PROD",
            Environment::Acceptance => "TEST/ACCEPTANCE",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Environment {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PROD" | "PRODUCTION" => Ok(Environment::Prod),
            "PRE-PROD" | "PREPROD" => Ok(Environment::Preprod),
            "TEST/ACCEPTANCE" | "TEST" | "ACCEPTANCE" => Ok(Environment::Acceptance),
            other => Err(ItemError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Kind of scheduled change. Closed set with an explicit fallback so an
/// unrecognized storage string still loads and still shows up in matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Deployment,
    Incident,
    Maintenance,
    Test,
    RegressionTest,
    Freeze,
    Other,
}

impl Category {
    /// Total mapping from the storage spelling; anything unrecognized lands
    /// in the fallback bucket instead of failing the load.
    pub fn from_storage(s: &str) -> Category {
        match s {
            "DEPLOYMENT" => Category::Deployment,
            "INCIDENT" => Category::Incident,
            "MAINTENANCE" => Category::Maintenance,
            "TEST" => Category::Test,
            "REGRESSION-TEST" => Category::RegressionTest,
            "FREEZE" => Category::Freeze,
            _ => Category::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Deployment => "DEPLOYMENT",
            Category::Incident => "INCIDENT",
            Category::Maintenance => "MAINTENANCE",
            Category::Test => "TEST",
            Category::RegressionTest => "REGRESSION-TEST",
            Category::Freeze => "FREEZE",
            Category::Other => "OTHER",
        }
    }

    /// Three-letter code used in grid cells.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Deployment => "DEP",
            Category::Incident => "INC",
            Category::Maintenance => "MNT",
            Category::Test => "TST",
            Category::RegressionTest => "REG",
            Category::Freeze => "FRZ",
            Category::Other => "???",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Category::from_storage(&s))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ItemError {
    #[error("application must not be empty")]
    EmptyApplication,
    #[error("invalid interval: end date {end} is before start date {start}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },
    #[error("invalid time of day '{0}' (expected HH:MM)")]
    BadTime(String),
    #[error("unknown environment '{0}'")]
    UnknownEnvironment(String),
}

fn default_start_time() -> String {
    "00:00".to_string()
}

fn default_end_time() -> String {
    "23:59".to_string()
}

/// One planned or historical change tied to an application, environment,
/// category and inclusive date range.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduledItem {
    pub application: String,
    pub environment: Environment,
    pub category: Category,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Advisory only: a day is covered if any part of it is in range.
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ScheduledItem {
    pub fn new(
        application: &str,
        environment: Environment,
        category: Category,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        ScheduledItem {
            application: application.to_string(),
            environment,
            category,
            start_date,
            end_date,
            start_time: default_start_time(),
            end_time: default_end_time(),
            project: None,
            note: None,
        }
    }

    pub fn with_project(mut self, project: &str) -> Self {
        self.project = Some(project.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    /// Boundary validation: the engine itself never rejects an item, so bad
    /// intervals and malformed times are refused here, where items enter the
    /// collection.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.application.trim().is_empty() {
            return Err(ItemError::EmptyApplication);
        }
        if self.end_date < self.start_date {
            return Err(ItemError::InvalidInterval {
                start: self.start_date,
                end: self.end_date,
            });
        }
        for t in [&self.start_time, &self.end_time] {
            if NaiveTime::parse_from_str(t, "%H:%M").is_err() {
                return Err(ItemError::BadTime(t.clone()));
            }
        }
        Ok(())
    }
}

/// The full item collection. Insertion order is load-bearing: matcher output
/// is defined as insertion order, so the collection is never re-sorted.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct ScheduleData {
    pub items: Vec<ScheduledItem>,
}

impl Persistable for ScheduleData {
    fn filename() -> &'static str {
        "schedule.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl ScheduleData {
    pub fn add(&mut self, item: ScheduledItem) -> Result<(), ItemError> {
        item.validate()?;
        self.items.push(item);
        Ok(())
    }

    /// Whole-collection replace: every save swaps the full snapshot, deletion
    /// is omission from the replacement. If any incoming item is invalid the
    /// current collection is left untouched.
    pub fn replace_all(&mut self, items: Vec<ScheduledItem>) -> Result<(), ItemError> {
        for item in &items {
            item.validate()?;
        }
        self.items = items;
        Ok(())
    }

    /// Distinct application names appearing in the collection, sorted.
    pub fn applications(&self) -> Vec<String> {
        let mut apps: Vec<String> = Vec::new();
        for item in &self.items {
            if !apps.contains(&item.application) {
                apps.push(item.application.clone());
            }
        }
        apps.sort();
        apps
    }
}
