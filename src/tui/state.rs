//! Application state for the TUI.
//!
//! This module defines the UI-side state that sits next to the task list:
//! - `AppState`: focus, dialogs, input buffer and selection
//! - `Focus`: which pane receives keys
//! - `InteractionMode`: normal editing or a modal dialog

use super::input::TextInput;

/// UI state. The task list itself lives in `TaskListStore`, owned by `App`.
#[derive(Debug, Default)]
pub struct AppState {
    /// Pane receiving keys in normal mode
    pub focus: Focus,
    /// Current interaction mode
    pub mode: InteractionMode,
    /// "New Task" buffer
    pub input: TextInput,
    /// Selected row; `None` means nothing is selected
    pub selected: Option<usize>,
    /// Last action feedback, shown in the header
    pub status_message: Option<String>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a dialog is capturing keys.
    pub fn has_dialog(&self) -> bool {
        !matches!(self.mode, InteractionMode::Normal)
    }
}

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

impl Focus {
    /// Cycle to the other pane.
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        }
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Normal,
    /// Message box dismissed with Enter/Esc
    Notice(Notice),
    /// Yes/no question
    Confirm(ConfirmDialog),
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Confirmation dialog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    /// The action to take on confirm
    pub action: ConfirmAction,
}

/// Actions that require confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Remove every task
    ClearAll,
}
