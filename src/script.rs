//! Headless command scripts.
//!
//! Drives a `TaskListStore` from a line-oriented script so the list can be
//! exercised without a terminal:
//!
//! ```text
//! # comments and blank lines are skipped
//! add Buy milk
//! toggle 0
//! delete 3      # out of range: rejected, not fatal
//! clear
//! confirm
//! ```
//!
//! A missing or negative index is treated as "nothing selected".

use crate::error::{Result, StoreError, TodoError};
use crate::store::{ClearOutcome, Task, TaskListStore};
use crate::tui::{EMPTY_INPUT_MESSAGE, NO_COMPLETE_SELECTION_MESSAGE, NO_DELETE_SELECTION_MESSAGE};
use log::{debug, info};
use std::fmt;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Delete(Option<usize>),
    Toggle(Option<usize>),
    Clear,
    Confirm,
    Cancel,
}

impl Command {
    /// Parse a single non-blank, non-comment line.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim_start();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest),
            None => (line, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add(rest.to_string())),
            "delete" => parse_selection(rest).map(Self::Delete),
            "toggle" => parse_selection(rest).map(Self::Toggle),
            "clear" => expect_no_args(keyword, rest, Self::Clear),
            "confirm" => expect_no_args(keyword, rest, Self::Confirm),
            "cancel" => expect_no_args(keyword, rest, Self::Cancel),
            other => Err(format!("unknown command '{}'", other)),
        }
    }
}

fn parse_selection(arg: &str) -> std::result::Result<Option<usize>, String> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Ok(None);
    }
    let is_integer = |digits: &str| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());

    if let Some(digits) = arg.strip_prefix('-') {
        return if is_integer(digits) {
            Ok(None)
        } else {
            Err(format!("invalid index '{}'", arg))
        };
    }
    if !is_integer(arg) {
        return Err(format!("invalid index '{}'", arg));
    }
    // Too large for usize is still just out of range
    Ok(Some(arg.parse().unwrap_or(usize::MAX)))
}

fn expect_no_args(keyword: &str, rest: &str, command: Command) -> std::result::Result<Command, String> {
    if rest.trim().is_empty() {
        Ok(command)
    } else {
        Err(format!("'{}' takes no arguments", keyword))
    }
}

/// The store operation a rejected command asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete,
    Toggle,
}

/// What applying one command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Deleted(Task),
    Toggled { index: usize, completed: bool },
    AlreadyEmpty,
    PendingConfirmation,
    Cleared(usize),
    Cancelled,
    /// The store refused the command; shown as a warning
    Rejected { action: Action, error: StoreError },
}

impl Outcome {
    /// Whether this outcome is a user-facing warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(text) => write!(f, "Added: {}", text),
            Self::Deleted(task) => write!(f, "Deleted: {}", task.text),
            Self::Toggled { index, completed: true } => write!(f, "Completed task {}", index),
            Self::Toggled { index, completed: false } => write!(f, "Reopened task {}", index),
            Self::AlreadyEmpty => write!(f, "The list is already empty!"),
            Self::PendingConfirmation => write!(f, "Are you sure you want to clear all tasks?"),
            Self::Cleared(count) => write!(f, "Cleared {} tasks", count),
            Self::Cancelled => write!(f, "Clear cancelled"),
            Self::Rejected { action, error } => match (action, error) {
                (_, StoreError::EmptyInput) => write!(f, "{}", EMPTY_INPUT_MESSAGE),
                (Action::Toggle, StoreError::NoSelection) => write!(f, "{}", NO_COMPLETE_SELECTION_MESSAGE),
                (_, StoreError::NoSelection) => write!(f, "{}", NO_DELETE_SELECTION_MESSAGE),
            },
        }
    }
}

/// Applies commands to a store it owns.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    store: TaskListStore,
    clear_pending: bool,
}

impl ScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &TaskListStore {
        &self.store
    }

    pub fn into_store(self) -> TaskListStore {
        self.store
    }

    /// Apply one command.
    ///
    /// Store rejections come back as `Outcome::Rejected`. The only error is a
    /// `confirm` or `cancel` with no clear waiting for an answer; the caller
    /// attaches the line number.
    pub fn apply(&mut self, command: Command) -> std::result::Result<Outcome, String> {
        let was_pending = std::mem::take(&mut self.clear_pending);

        let outcome = match command {
            Command::Add(text) => match self.store.add(&text) {
                Ok(()) => Outcome::Added(text.trim().to_string()),
                Err(error) => Outcome::Rejected {
                    action: Action::Add,
                    error,
                },
            },
            Command::Delete(selection) => match self.store.delete_at(selection) {
                Ok(task) => Outcome::Deleted(task),
                Err(error) => Outcome::Rejected {
                    action: Action::Delete,
                    error,
                },
            },
            Command::Toggle(selection) => match self.store.toggle_complete_at(selection) {
                Ok(completed) => Outcome::Toggled {
                    // resolved by the store, so the selection is present
                    index: selection.unwrap_or_default(),
                    completed,
                },
                Err(error) => Outcome::Rejected {
                    action: Action::Toggle,
                    error,
                },
            },
            Command::Clear => match self.store.clear_all() {
                ClearOutcome::AlreadyEmpty => Outcome::AlreadyEmpty,
                ClearOutcome::PendingConfirmation => {
                    self.clear_pending = true;
                    Outcome::PendingConfirmation
                }
            },
            Command::Confirm if was_pending => {
                let count = self.store.len();
                self.store.confirm_clear();
                Outcome::Cleared(count)
            }
            Command::Cancel if was_pending => Outcome::Cancelled,
            Command::Confirm | Command::Cancel => {
                return Err("no clear is waiting for confirmation".to_string());
            }
        };

        debug!("Script outcome: {:?}", outcome);
        Ok(outcome)
    }

    /// Parse and apply a whole script, stopping at the first malformed line.
    pub fn run(&mut self, script: &str) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();

        for (number, line) in script.lines().enumerate() {
            let line = strip_comment(line);
            if line.trim().is_empty() {
                continue;
            }

            let script_error = |message| TodoError::Script {
                line: number + 1,
                message,
            };
            let command = Command::parse(line).map_err(script_error)?;
            let outcome = self.apply(command).map_err(script_error)?;
            outcomes.push(outcome);
        }

        info!("Script applied {} commands, {} tasks remain", outcomes.len(), self.store.len());
        Ok(outcomes)
    }
}

fn strip_comment(line: &str) -> &str {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return "";
    }
    if trimmed.to_ascii_lowercase().starts_with("add") {
        return line;
    }
    // Inline comments need leading whitespace so text like "fix#12" is not cut.
    line.match_indices('#')
        .map(|(pos, _)| pos)
        .find(|&pos| line[..pos].ends_with(char::is_whitespace))
        .map_or(line, |pos| &line[..pos])
}

/// Render the final list as numbered labels, one per line.
pub fn render_text(store: &TaskListStore) -> String {
    if store.is_empty() {
        return "(no tasks)\n".to_string();
    }
    store
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{:>3}  {}\n", i, label))
        .collect()
}

/// Render the final list as a pretty JSON array of tasks.
pub fn render_json(store: &TaskListStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(store.tasks())?)
}
