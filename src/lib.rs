//! Hangman - two-player word guessing in the terminal.
//!
//! The rules live in [`strictly_hangman`]; this crate adds the pieces that
//! make it a program.
//!
//! # Architecture
//!
//! - **Cli**: `play` and `init-config` subcommands
//! - **Config**: TOML settings pre-filling the setup form
//! - **Tui**: one ratatui screen per round phase, driven by [`GameController`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILE};
pub use tui::{
    GameController, GuessScreen, PickerScreen, RoundOverScreen, Screen, ScreenTransition,
    SetupField, SetupScreen, WordEntryScreen, center_rect, run_tui,
};
