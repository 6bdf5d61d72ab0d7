//! Task model types for the task list.

use serde::{Deserialize, Serialize};

/// A single entry on the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier assigned by the store; never reused within a process.
    pub id: u64,
    /// The text the user entered.
    pub description: String,
    /// Completion flag. Always `false`: nothing on the HTTP surface sets it.
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task.
    #[must_use]
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Self { id, description: description.into(), completed: false }
    }
}
