//! Error types for todolist
//!
//! Centralized error handling using thiserror. `StoreError` covers the two
//! user-input problems the task list can report; `TodoError` covers
//! everything else the library can fail with.

use thiserror::Error;

/// Rejections returned by the task list. Neither is fatal: the caller shows
/// a warning and the list is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Task text was empty after trimming
    #[error("Task description cannot be empty!")]
    EmptyInput,

    /// No task selected, or the selection is out of range
    #[error("No task selected")]
    NoSelection,
}

/// All error types that can occur in todolist
#[derive(Debug, Error)]
pub enum TodoError {
    /// A rejected store operation
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Malformed command script
    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for todolist operations
pub type Result<T> = std::result::Result<T, TodoError>;
