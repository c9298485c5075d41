//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_hangman::{DEFAULT_GUESS_BUDGET, RoundConfig, Seat};
use tracing::{debug, info, instrument};

/// Default location of the config file.
pub const DEFAULT_CONFIG_PATH: &str = "hangman.toml";

/// Default location of the log file.
pub const DEFAULT_LOG_FILE: &str = "hangman.log";

/// Settings for a terminal session.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
pub struct AppConfig {
    /// Name pre-filled for the first seat.
    #[serde(default = "default_player1_name")]
    player1_name: String,

    /// Name pre-filled for the second seat.
    #[serde(default = "default_player2_name")]
    player2_name: String,

    /// Wrong guesses allowed, pre-selected in the setup form.
    #[serde(default = "default_guess_budget")]
    guess_budget: u8,

    /// Where tracing output goes.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player1_name() -> String {
    Seat::First.default_name().to_string()
}

fn default_player2_name() -> String {
    Seat::Second.default_name().to_string()
}

fn default_guess_budget() -> u8 {
    DEFAULT_GUESS_BUDGET
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player1_name: default_player1_name(),
            player2_name: default_player2_name(),
            guess_budget: default_guess_budget(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(guess_budget = config.guess_budget, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Writes the configuration to `path`.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn write_to(&self, path: impl AsRef<Path>, force: bool) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if path.exists() && !force {
            return Err(ConfigError::new(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        std::fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::new(format!("Failed to write config file: {}", e)))?;
        info!("Config written");
        Ok(())
    }

    /// The setup values this config pre-fills.
    pub fn round_config(&self) -> RoundConfig {
        RoundConfig::new(
            self.player1_name.clone(),
            self.player2_name.clone(),
            self.guess_budget,
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a configuration error at the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
