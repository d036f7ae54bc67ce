//! Terminal User Interface for todolist.
//!
//! A single window in the terminal:
//! - **New Task** input at the top
//! - **Your Tasks** list in the middle
//! - key bindings for add, delete, mark complete and clear all at the bottom
//!
//! Warnings and the clear-all confirmation are modal dialogs drawn over the
//! window.

mod app;
mod events;
mod input;
mod runner;
mod state;
mod views;

pub use app::{
    App, DEFAULT_TITLE, EMPTY_INPUT_MESSAGE, NO_COMPLETE_SELECTION_MESSAGE, NO_DELETE_SELECTION_MESSAGE,
};
pub use events::{Event, EventHandler};
pub use input::TextInput;
pub use runner::TuiRunner;
pub use state::{AppState, ConfirmAction, ConfirmDialog, Focus, InteractionMode, Notice, NoticeLevel};
pub use views::render;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use log::warn;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits, restoring the terminal even when the
/// loop fails. Returns the app so the caller can report on the final list.
pub fn run(app: App, tick_rate_ms: u64) -> Result<App> {
    let terminal = init_terminal()?;
    let mut runner = TuiRunner::new(terminal, app, tick_rate_ms);
    let result = runner.run();

    if let Err(e) = restore_terminal() {
        warn!("Failed to restore terminal: {}", e);
    }

    result.map(|()| runner.into_app())
}

/// Palette, after the original window's colours.
pub mod colors {
    use ratatui::style::Color;

    pub const TEXT: Color = Color::Rgb(220, 220, 220);
    pub const DIM: Color = Color::DarkGray;
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const BORDER: Color = Color::Rgb(180, 200, 220); // Light steel blue
    pub const FOCUS: Color = Color::Rgb(33, 150, 243); // Blue
    pub const SELECTION: Color = Color::Rgb(33, 80, 140);
    pub const WARNING: Color = Color::Rgb(255, 215, 0); // Gold
    pub const INFO: Color = Color::Rgb(76, 175, 80); // Green
    pub const DANGER: Color = Color::Rgb(244, 67, 54); // Red
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_colors_distinct() {
        assert_ne!(colors::WARNING, colors::INFO);
        assert_ne!(colors::WARNING, colors::DANGER);
        assert_ne!(colors::FOCUS, colors::BORDER);
    }
}
