//! In-memory task list for todolist.
//!
//! The store is the only place tasks are mutated. The TUI and the script
//! runner hold a `TaskListStore`, call into it, and redraw from its contents.
//!
//! # Example
//!
//! ```
//! use todolist::store::{ClearOutcome, TaskListStore};
//!
//! let mut store = TaskListStore::new();
//! store.add("  Buy milk ")?;
//! store.toggle_complete_at(Some(0))?;
//! assert_eq!(store.labels(), vec!["✔ Buy milk".to_string()]);
//!
//! assert_eq!(store.clear_all(), ClearOutcome::PendingConfirmation);
//! store.confirm_clear();
//! assert!(store.is_empty());
//! # Ok::<(), todolist::StoreError>(())
//! ```

mod records;
mod task_store;

pub use records::{COMPLETION_MARKER, Task};
pub use task_store::{ClearOutcome, TaskListStore};
