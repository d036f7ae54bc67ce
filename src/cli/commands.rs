//! CLI command definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// todolist - a terminal to-do list manager
#[derive(Parser, Debug)]
#[command(name = "todolist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (launches the TUI when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a command script to an empty list and print the result
    Run {
        /// Script file; reads stdin when omitted
        script: Option<PathBuf>,

        /// How to print the final list
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for the final list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered labels
    Text,
    /// JSON array of tasks
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (TUI mode)
        let cli = Cli::try_parse_from(["todolist"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["todolist", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["todolist", "-c", "/path/to/todolist.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/todolist.yml")));
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["todolist", "run"]).unwrap();
        match cli.command {
            Some(Commands::Run { script, format }) => {
                assert!(script.is_none());
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("Expected run command"),
        }
    }

    #[test]
    fn test_run_with_script_and_json() {
        let cli = Cli::try_parse_from(["todolist", "run", "tasks.txt", "--format", "json"]).unwrap();
        match cli.command {
            Some(Commands::Run { script, format }) => {
                assert_eq!(script, Some(PathBuf::from("tasks.txt")));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected run command"),
        }
    }

    #[test]
    fn test_run_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["todolist", "run", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["todolist", "run", "-c", "x.yml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.yml")));
    }

    #[test]
    fn test_help_works() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["todolist", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
