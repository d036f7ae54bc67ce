//! The task record held by the store.

use serde::{Deserialize, Serialize};

/// Prefix drawn in front of a completed task's text.
pub const COMPLETION_MARKER: &str = "✔ ";

/// A single to-do entry.
///
/// Tasks have no identity beyond their position in the list; two tasks with
/// the same text are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Trimmed, never empty
    pub text: String,

    /// Source of truth for completion; the marker is derived from it
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task. The caller has already validated `text`.
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// Flip the completion flag and return the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// The label shown in the list.
    pub fn label(&self) -> String {
        if self.completed {
            format!("{}{}", COMPLETION_MARKER, self.text)
        } else {
            self.text.clone()
        }
    }
}
