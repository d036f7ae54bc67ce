//! TUI Application
//!
//! `App` owns the task list and the UI state, and turns key presses into
//! store calls. Every rejection from the store becomes a dialog; nothing here
//! is fatal.

use super::state::{AppState, ConfirmAction, ConfirmDialog, Focus, InteractionMode, Notice};
use crate::store::{ClearOutcome, TaskListStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;

pub const DEFAULT_TITLE: &str = "To-Do List App";

pub const EMPTY_INPUT_TITLE: &str = "Input Error";
pub const EMPTY_INPUT_MESSAGE: &str = "Task description cannot be empty!";
pub const SELECTION_TITLE: &str = "Selection Error";
pub const NO_DELETE_SELECTION_MESSAGE: &str = "Please select a task to delete.";
pub const NO_COMPLETE_SELECTION_MESSAGE: &str = "Please select a task to mark complete.";
pub const ALREADY_EMPTY_TITLE: &str = "No Tasks";
pub const ALREADY_EMPTY_MESSAGE: &str = "The list is already empty!";
pub const CONFIRM_CLEAR_TITLE: &str = "Confirm Clear All";
pub const CONFIRM_CLEAR_MESSAGE: &str = "Are you sure you want to clear all tasks?";

/// Main TUI application
#[derive(Debug)]
pub struct App {
    title: String,
    store: TaskListStore,
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            store: TaskListStore::new(),
            state: AppState::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn store(&self) -> &TaskListStore {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match self.state.mode.clone() {
            InteractionMode::Notice(_) => self.handle_notice_key(key),
            InteractionMode::Confirm(dialog) => self.handle_confirm_key(key, dialog.action),
            InteractionMode::Normal => match self.state.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::List => self.handle_list_key(key),
            },
        }

        self.state.should_quit
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.add_task(),
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::Esc => self.state.focus = Focus::List,
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            _ => {
                self.state.input.handle_key(&key);
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::Char('a') | KeyCode::Char('i') => self.state.focus = Focus::Input,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char(' ') | KeyCode::Char('c') => self.complete_selected(),
            KeyCode::Char('x') => self.clear_all(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn handle_notice_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.state.mode = InteractionMode::Normal;
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, action: ConfirmAction) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.state.mode = InteractionMode::Normal;
                self.run_confirmed(action);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state.mode = InteractionMode::Normal;
                self.set_status("Clear cancelled");
            }
            _ => {}
        }
    }

    fn run_confirmed(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::ClearAll => {
                let count = self.store.len();
                self.store.confirm_clear();
                self.state.selected = None;
                info!("Cleared {} tasks", count);
                self.set_status(format!("Cleared {} tasks", count));
            }
        }
    }

    /// Add the input buffer as a new task.
    pub fn add_task(&mut self) {
        match self.store.add(self.state.input.content()) {
            Ok(()) => {
                self.state.input.clear();
                info!("Task added, {} in list", self.store.len());
                self.set_status("Task added");
            }
            Err(_) => self.show_notice(Notice::warning(EMPTY_INPUT_TITLE, EMPTY_INPUT_MESSAGE)),
        }
    }

    /// Delete the selected task.
    pub fn delete_selected(&mut self) {
        match self.store.delete_at(self.state.selected) {
            Ok(task) => {
                self.state.selected = None;
                info!("Task deleted: {}", task.text);
                self.set_status(format!("Deleted: {}", task.text));
            }
            Err(_) => self.show_notice(Notice::warning(SELECTION_TITLE, NO_DELETE_SELECTION_MESSAGE)),
        }
    }

    /// Toggle completion of the selected task.
    pub fn complete_selected(&mut self) {
        match self.store.toggle_complete_at(self.state.selected) {
            Ok(completed) => {
                info!("Task {:?} completed={}", self.state.selected, completed);
                self.set_status(if completed { "Marked complete" } else { "Marked incomplete" });
            }
            Err(_) => self.show_notice(Notice::warning(SELECTION_TITLE, NO_COMPLETE_SELECTION_MESSAGE)),
        }
    }

    /// Ask to clear the list; opens the confirmation dialog when there is
    /// something to clear.
    pub fn clear_all(&mut self) {
        match self.store.clear_all() {
            ClearOutcome::AlreadyEmpty => self.show_notice(Notice::info(ALREADY_EMPTY_TITLE, ALREADY_EMPTY_MESSAGE)),
            ClearOutcome::PendingConfirmation => {
                self.state.mode = InteractionMode::Confirm(ConfirmDialog {
                    title: CONFIRM_CLEAR_TITLE.to_string(),
                    message: CONFIRM_CLEAR_MESSAGE.to_string(),
                    action: ConfirmAction::ClearAll,
                });
            }
        }
    }

    /// Select the next task, wrapping to the top.
    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        self.state.selected = Some(match self.state.selected {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    /// Select the previous task, wrapping to the bottom.
    pub fn select_prev(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        self.state.selected = Some(match self.state.selected {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        });
    }

    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    fn show_notice(&mut self, notice: Notice) {
        info!("{}: {}", notice.title, notice.message);
        self.state.mode = InteractionMode::Notice(notice);
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.state.status_message = Some(message.into());
    }
}
