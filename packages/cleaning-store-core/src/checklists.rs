//! Checklist book: checklists keyed by unique name.

use chrono::NaiveDate;

use crate::error::{Result, StoreError, ValidationError};
use crate::schema::Checklist;

/// Insertion-ordered collection of checklists.
///
/// Checklists are created once and then only have their tasks replaced or
/// their assignment changed; they are never removed.
#[derive(Debug, Clone, Default)]
pub struct ChecklistBook {
    checklists: Vec<Checklist>,
}

impl ChecklistBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of checklists.
    pub fn len(&self) -> usize {
        self.checklists.len()
    }

    /// Returns true if the book holds no checklists.
    pub fn is_empty(&self) -> bool {
        self.checklists.is_empty()
    }

    /// Looks up a checklist by name. Surrounding whitespace is ignored.
    pub fn get(&self, name: &str) -> Option<&Checklist> {
        let name = name.trim();
        self.checklists.iter().find(|checklist| checklist.name == name)
    }

    /// Looks up a checklist, failing with `ChecklistNotFound` when absent.
    pub fn require(&self, name: &str) -> Result<&Checklist> {
        self.get(name).ok_or_else(|| not_found(name))
    }

    /// Returns checklist names in creation order.
    pub fn names(&self) -> Vec<&str> {
        self.checklists
            .iter()
            .map(|checklist| checklist.name.as_str())
            .collect()
    }

    /// Iterates over checklists in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Checklist> {
        self.checklists.iter()
    }

    /// Creates a new checklist.
    ///
    /// # Arguments
    /// * `name` - Unique checklist name
    /// * `tasks` - Initial task list, at least one task
    /// * `assignee` - Employee responsible, if any
    /// * `due` - Due date, if any
    ///
    /// # Returns
    /// `Result<&Checklist, StoreError>`; fails with `ChecklistExists` when the
    /// name is taken.
    pub fn create(
        &mut self,
        name: &str,
        tasks: Vec<String>,
        assignee: Option<String>,
        due: Option<NaiveDate>,
    ) -> Result<&Checklist> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField { field: "name" }.into());
        }
        Self::check_tasks(&tasks)?;
        if self.get(name).is_some() {
            tracing::warn!(checklist = name, "checklist already exists");
            return Err(StoreError::ChecklistExists {
                name: name.to_string(),
            });
        }

        self.checklists.push(Checklist {
            name: name.to_string(),
            tasks,
            assignee,
            due,
        });
        tracing::debug!(checklist = name, "checklist created");
        Ok(&self.checklists[self.checklists.len() - 1])
    }

    /// Replaces the whole task list of a checklist.
    pub fn replace_tasks(&mut self, name: &str, tasks: Vec<String>) -> Result<&Checklist> {
        Self::check_tasks(&tasks)?;
        let checklist = self.get_mut(name)?;
        checklist.tasks = tasks;
        tracing::debug!(checklist = name, tasks = checklist.tasks.len(), "checklist tasks replaced");
        Ok(&*checklist)
    }

    /// Changes who a checklist is assigned to and when it is due.
    pub fn reassign(
        &mut self,
        name: &str,
        assignee: Option<String>,
        due: Option<NaiveDate>,
    ) -> Result<&Checklist> {
        let checklist = self.get_mut(name)?;
        checklist.assignee = assignee;
        checklist.due = due;
        tracing::debug!(checklist = name, "checklist reassigned");
        Ok(&*checklist)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Checklist> {
        let name = name.trim();
        self.checklists
            .iter_mut()
            .find(|checklist| checklist.name == name)
            .ok_or_else(|| not_found(name))
    }

    fn check_tasks(tasks: &[String]) -> Result<()> {
        if tasks.is_empty() || tasks.iter().all(|task| task.trim().is_empty()) {
            return Err(ValidationError::EmptyField { field: "tasks" }.into());
        }
        Ok(())
    }
}

fn not_found(name: &str) -> StoreError {
    let name = name.trim();
    tracing::warn!(checklist = name, "checklist not found");
    StoreError::ChecklistNotFound {
        name: name.to_string(),
    }
}
