use crate::data::scheduled_item::{Environment, ScheduledItem};
use std::fmt;

/// Acceptance-environment visibility restriction. Items without a project
/// are considered relevant to every project's view, so a specific-project
/// scope keeps them too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectScope {
    /// No restriction.
    All,
    /// Only items not tied to any project.
    Unscoped,
    /// Items tied to this project, plus unscoped items.
    Project(String),
}

impl ProjectScope {
    pub fn project(id: &str) -> Self {
        ProjectScope::Project(id.to_string())
    }

    fn keeps(&self, item: &ScheduledItem) -> bool {
        match self {
            ProjectScope::All => true,
            ProjectScope::Unscoped => item.project.is_none(),
            ProjectScope::Project(id) => match &item.project {
                None => true,
                Some(p) => p == id,
            },
        }
    }
}

impl fmt::Display for ProjectScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectScope::All => f.write_str("all projects"),
            ProjectScope::Unscoped => f.write_str("no project"),
            ProjectScope::Project(id) => write!(f, "project {id}"),
        }
    }
}

/// Narrows a match list by project. Scoping only exists in the acceptance
/// environment; everywhere else the input passes through unchanged.
pub fn apply_scope<'a>(
    matches: Vec<&'a ScheduledItem>,
    environment: Environment,
    scope: &ProjectScope,
) -> Vec<&'a ScheduledItem> {
    if environment != Environment::Acceptance || *scope == ProjectScope::All {
        return matches;
    }
    matches.into_iter().filter(|item| scope.keeps(item)).collect()
}
