use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use todolist::script::{self, Outcome, ScriptRunner};
use todolist::TaskListStore;
use todolist::tui::{self, App};

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, OutputFormat};
use config::Config;

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todolist")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("todolist.log");

    // Log to a file; stdout belongs to the TUI
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let default_level = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    // stdout carries `run` output, keep the banner off it
    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => run_tui(config),
        Some(Commands::Run { script, format }) => handle_run_command(script.as_deref(), *format, cli.is_verbose()),
    }
}

fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    let app = tui::run(App::new(config.tui.title.as_str()), config.tui.tick_rate_ms).context("TUI failed")?;

    let remaining = app.store().len();
    if remaining > 0 {
        println!("{}", format!("{} tasks discarded (lists are not saved)", remaining).dimmed());
    }
    Ok(())
}

fn handle_run_command(path: Option<&Path>, format: OutputFormat, verbose: bool) -> Result<()> {
    let source = match path {
        Some(path) => {
            info!("Running script: {}", path.display());
            fs::read_to_string(path).context(format!("Failed to read script {}", path.display()))?
        }
        None => {
            info!("Running script from stdin");
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            source
        }
    };

    let mut runner = ScriptRunner::new();
    let outcomes = runner.run(&source)?;
    let store = runner.into_store();

    write_run_output(&outcomes, &store, format, verbose, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Outcome lines go to `diagnostics`; `out` only ever holds the final list.
fn write_run_output(
    outcomes: &[Outcome],
    store: &TaskListStore,
    format: OutputFormat,
    verbose: bool,
    out: &mut impl Write,
    diagnostics: &mut impl Write,
) -> Result<()> {
    for outcome in outcomes {
        if outcome.is_warning() {
            writeln!(diagnostics, "{} {}", "warning:".yellow().bold(), outcome)?;
        } else if verbose {
            writeln!(diagnostics, "{}", outcome.to_string().green())?;
        }
    }

    match format {
        OutputFormat::Text => write!(out, "{}", script::render_text(store))?,
        OutputFormat::Json => writeln!(out, "{}", script::render_json(store)?)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging once the configured level is known
    setup_logging(&config).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
