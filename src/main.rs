//! Hangman - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{AppConfig, Cli, Command};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG may be set there)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            player1,
            player2,
            guesses,
            log_file,
        } => {
            let config = load_config(&config, player1, player2, guesses, log_file)?;
            initialize_tracing(config.log_file())?;
            info!("Starting hangman");
            hangman::run_tui(&config)
        }
        Command::InitConfig { path, force } => init_config(&path, force),
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(
    path: &Path,
    player1: Option<String>,
    player2: Option<String>,
    guesses: Option<u8>,
    log_file: Option<PathBuf>,
) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(path)?;

    if let Some(name) = player1 {
        config = config.with_player1_name(name);
    }
    if let Some(name) = player2 {
        config = config.with_player2_name(name);
    }
    if let Some(guesses) = guesses {
        config = config.with_guess_budget(guesses);
    }
    if let Some(log_file) = log_file {
        config = config.with_log_file(log_file);
    }

    Ok(config)
}

/// Writes the default config to `path`.
fn init_config(path: &Path, force: bool) -> Result<()> {
    AppConfig::default().write_to(path, force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Sends tracing output to `log_file` so it does not corrupt the terminal.
#[instrument]
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,strictly_hangman=debug,hangman=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false),
        )
        .init();

    info!(log_file = %log_file.display(), "Tracing initialized");
    Ok(())
}
