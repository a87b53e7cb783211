//! Cleaning checklists.

use chrono::NaiveDate;
use serde::Serialize;

/// Named, ordered list of cleaning tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checklist {
    pub name: String,
    pub tasks: Vec<String>,
    /// Name of the employee responsible, if assigned
    pub assignee: Option<String>,
    pub due: Option<NaiveDate>,
}
