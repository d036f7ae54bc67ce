//! CLI module for todolist - command-line interface and subcommands.
//!
//! With no subcommand the TUI is launched; `run` applies a command script
//! without a terminal.

pub mod commands;

pub use commands::Cli;
