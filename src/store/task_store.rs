//! TaskListStore: the ordered task sequence and its mutation contract.
//!
//! All four mutations validate their input before touching the list, so a
//! rejected call always leaves the store exactly as it was:
//! - **add**: trims, rejects blank text with `EmptyInput`
//! - **delete_at / toggle_complete_at**: reject a missing or out-of-range
//!   selection with `NoSelection`
//! - **clear_all / confirm_clear**: two-phase, nothing is removed until the
//!   caller confirms

use crate::error::StoreError;
use crate::store::records::Task;
use log::debug;

/// Result of asking to clear the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Nothing to clear; the list was not touched
    AlreadyEmpty,
    /// The list has tasks; call `confirm_clear` to remove them
    PendingConfirmation,
}

/// Ordered list of tasks. Display order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListStore {
    tasks: Vec<Task>,
}

impl TaskListStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new incomplete task.
    ///
    /// Leading and trailing whitespace is stripped before storage.
    pub fn add(&mut self, raw_text: &str) -> Result<(), StoreError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyInput);
        }

        self.tasks.push(Task::new(text));
        debug!("Added task {}: {:?}", self.tasks.len() - 1, text);
        Ok(())
    }

    /// Remove the selected task and return it. Later tasks shift down by one.
    pub fn delete_at(&mut self, selection: Option<usize>) -> Result<Task, StoreError> {
        let index = self.resolve(selection)?;
        let task = self.tasks.remove(index);
        debug!("Deleted task {}: {:?}", index, task.text);
        Ok(task)
    }

    /// Flip the completion flag of the selected task and return the new value.
    pub fn toggle_complete_at(&mut self, selection: Option<usize>) -> Result<bool, StoreError> {
        let index = self.resolve(selection)?;
        let completed = self.tasks[index].toggle();
        debug!("Task {} completed={}", index, completed);
        Ok(completed)
    }

    /// First phase of clearing. Never mutates.
    pub fn clear_all(&self) -> ClearOutcome {
        if self.tasks.is_empty() {
            ClearOutcome::AlreadyEmpty
        } else {
            ClearOutcome::PendingConfirmation
        }
    }

    /// Second phase of clearing: remove every task.
    pub fn confirm_clear(&mut self) {
        debug!("Clearing {} tasks", self.tasks.len());
        self.tasks.clear();
    }

    /// All tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Display labels in order, with the completion marker applied.
    pub fn labels(&self) -> Vec<String> {
        self.tasks.iter().map(Task::label).collect()
    }

    /// Number of completed tasks.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    fn resolve(&self, selection: Option<usize>) -> Result<usize, StoreError> {
        selection
            .filter(|&i| i < self.tasks.len())
            .ok_or(StoreError::NoSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> TaskListStore {
        let mut store = TaskListStore::new();
        for text in texts {
            store.add(text).unwrap();
        }
        store
    }

    fn texts(store: &TaskListStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = TaskListStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.labels().is_empty());
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut store = store_with(&["first"]);
        store.add("  Buy milk \t").unwrap();

        assert_eq!(store.len(), 2);
        let task = store.get(1).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_keeps_inner_whitespace() {
        let mut store = TaskListStore::new();
        store.add(" call  mum ").unwrap();
        assert_eq!(store.get(0).unwrap().text, "call  mum");
    }

    #[test]
    fn test_add_empty_rejected() {
        let mut store = store_with(&["keep"]);
        assert_eq!(store.add(""), Err(StoreError::EmptyInput));
        assert_eq!(store.add("   "), Err(StoreError::EmptyInput));
        assert_eq!(store.add("\n\t"), Err(StoreError::EmptyInput));
        assert_eq!(texts(&store), vec!["keep"]);
    }

    #[test]
    fn test_duplicate_texts_are_distinct() {
        let mut store = store_with(&["same", "same"]);
        assert_eq!(store.len(), 2);

        store.toggle_complete_at(Some(1)).unwrap();
        assert!(!store.get(0).unwrap().completed);
        assert!(store.get(1).unwrap().completed);
    }

    #[test]
    fn test_delete_removes_and_shifts() {
        let mut store = store_with(&["a", "b", "c"]);
        let removed = store.delete_at(Some(1)).unwrap();

        assert_eq!(removed.text, "b");
        assert_eq!(texts(&store), vec!["a", "c"]);
    }

    #[test]
    fn test_delete_no_selection() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.delete_at(None), Err(StoreError::NoSelection));
        assert_eq!(store.delete_at(Some(2)), Err(StoreError::NoSelection));
        assert_eq!(store.delete_at(Some(usize::MAX)), Err(StoreError::NoSelection));
        assert_eq!(texts(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_delete_on_empty_store() {
        let mut store = TaskListStore::new();
        assert_eq!(store.delete_at(Some(0)), Err(StoreError::NoSelection));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = store_with(&["a", "b"]);
        let before = store.clone();

        assert_eq!(store.toggle_complete_at(Some(0)), Ok(true));
        assert_eq!(store.toggle_complete_at(Some(0)), Ok(false));
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_never_changes_text() {
        let mut store = store_with(&["Buy milk"]);
        store.toggle_complete_at(Some(0)).unwrap();
        assert_eq!(store.get(0).unwrap().text, "Buy milk");
        assert_eq!(store.labels(), vec!["✔ Buy milk"]);
    }

    #[test]
    fn test_toggle_no_selection() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.toggle_complete_at(None), Err(StoreError::NoSelection));
        assert_eq!(store.toggle_complete_at(Some(1)), Err(StoreError::NoSelection));
        assert!(!store.get(0).unwrap().completed);
    }

    #[test]
    fn test_clear_all_empty() {
        let store = TaskListStore::new();
        assert_eq!(store.clear_all(), ClearOutcome::AlreadyEmpty);
    }

    #[test]
    fn test_clear_is_two_phase() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.clear_all(), ClearOutcome::PendingConfirmation);
        assert_eq!(store.len(), 2);

        store.confirm_clear();
        assert!(store.is_empty());
        assert_eq!(store.clear_all(), ClearOutcome::AlreadyEmpty);
    }

    #[test]
    fn test_completed_count() {
        let mut store = store_with(&["a", "b", "c"]);
        store.toggle_complete_at(Some(0)).unwrap();
        store.toggle_complete_at(Some(2)).unwrap();
        assert_eq!(store.completed_count(), 2);
    }

    #[test]
    fn test_scenario() {
        let mut store = TaskListStore::new();

        store.add("Buy milk").unwrap();
        assert_eq!(store.tasks(), &[Task::new("Buy milk")]);

        store.toggle_complete_at(Some(0)).unwrap();
        assert_eq!(store.labels(), vec!["✔ Buy milk"]);

        store.add("Walk dog").unwrap();
        assert_eq!(store.labels(), vec!["✔ Buy milk", "Walk dog"]);

        store.delete_at(Some(0)).unwrap();
        assert_eq!(store.tasks(), &[Task::new("Walk dog")]);

        assert_eq!(store.clear_all(), ClearOutcome::PendingConfirmation);
        store.confirm_clear();
        assert!(store.is_empty());
    }
}
