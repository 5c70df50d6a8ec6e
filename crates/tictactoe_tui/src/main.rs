//! Two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod keymap;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::CrosstermInput;
use keymap::KeyMap;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::process::ExitCode;
use tictactoe_core::GameController;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "Could not start program");
            eprintln!("Could not start program: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => TuiConfig::from_file(path)?,
        None => TuiConfig::default(),
    }
    .with_overrides(cli.log_file, cli.log_level);

    init_tracing(&config)?;
    info!("Starting tic-tac-toe");

    let keymap = KeyMap::from_bindings(config.keys())?;
    let mut input = CrosstermInput::new(keymap.clone());
    let mut controller = GameController::new();

    let mut terminal = setup_terminal()?;
    let res = app::run(&mut terminal, &mut controller, &mut input, &keymap);
    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Sends logs to a file so they don't interfere with the TUI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

#[instrument]
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

#[instrument(skip_all)]
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
