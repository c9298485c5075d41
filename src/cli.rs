//! Command-line interface for hangman.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Hangman - two-player word guessing in the terminal
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Two-player hangman in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rounds in the terminal UI
    Play {
        /// Path to the config file (defaults are used if it is missing)
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Name pre-filled for player 1
        #[arg(long)]
        player1: Option<String>,

        /// Name pre-filled for player 2
        #[arg(long)]
        player2: Option<String>,

        /// Wrong guesses allowed (5-15)
        #[arg(short, long)]
        guesses: Option<u8>,

        /// Log file (overrides the config file)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Write a config file with the default settings
    InitConfig {
        /// Where to write the file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
