//! Tic Tac Toe - terminal front end
//!
//! Runs the game controller against a ratatui view.

#![warn(missing_docs)]

mod cli;
mod input;
mod terminal_view;
mod ui;

use std::io::{self, Stdout};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tictactoe_mvc::{GameController, Roster};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use terminal_view::TerminalView;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let roster = match &cli.config {
        Some(path) => Roster::from_file(path)
            .with_context(|| format!("Failed to load roster from {}", path.display()))?,
        None => Roster::default(),
    };

    if let Err(err) = run(roster) {
        error!(error = ?err, "Game loop error");
        return Err(err);
    }
    Ok(())
}

/// Logs go to a file so they do not draw over the board.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[instrument(skip_all)]
fn run(roster: Roster) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    let _guard = TerminalGuard::enter()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")?;

    let mut controller = GameController::new(roster, TerminalView::new(terminal));
    controller.run()?;

    info!("Game closed");
    Ok(())
}

/// Raw mode, alternate screen and mouse capture for the lifetime of the game.
///
/// Restores the terminal on drop, including when the game loop fails.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = Self {
            stdout: io::stdout(),
        };
        execute!(guard.stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(self.stdout, LeaveAlternateScreen, DisableMouseCapture);
    }
}
