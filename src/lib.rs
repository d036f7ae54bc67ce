//! todolist - a terminal to-do list manager
//!
//! Tasks live in an in-memory `TaskListStore`; the TUI and the headless
//! script runner are two front ends over the same store. Nothing is
//! persisted between runs.

pub mod error;
pub mod script;
pub mod store;
pub mod tui;

pub use error::{Result, StoreError, TodoError};
pub use store::{ClearOutcome, Task, TaskListStore};
