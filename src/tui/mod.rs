//! Terminal UI for hangman.

mod controller;
mod screen;
mod screens;
mod widgets;

pub use controller::GameController;
pub use screen::{Screen, ScreenTransition};
pub use screens::{
    GuessScreen, PickerScreen, RoundOverScreen, SetupField, SetupScreen, WordEntryScreen,
};
pub use widgets::center_rect;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::AppConfig;

/// Runs the terminal game until the players quit.
///
/// The terminal is restored even when the game loop fails.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting hangman TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = GameController::new(config);
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}
