//! # Task
//!
//! The unit of work handed to a project when assigning tasks. The state
//! machine only ever reads its name.

use serde::{Deserialize, Serialize};

/// A named piece of work supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    name: String,
}

impl Task {
    /// Create a task with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The task name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
