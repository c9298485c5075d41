//! Setup rules and the recognised round configuration.

use crate::error::GameError;
use crate::types::{GuessBudget, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest guess budget offered at setup.
pub const MIN_GUESS_BUDGET: u8 = 5;
/// Largest guess budget offered at setup.
pub const MAX_GUESS_BUDGET: u8 = 15;
/// Guess budget used when none is chosen.
pub const DEFAULT_GUESS_BUDGET: u8 = 5;

/// Limits the engine enforces when players are configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    min_budget: u8,
    max_budget: u8,
    default_budget: u8,
}

impl GameRules {
    /// Creates rules allowing budgets in `min..=max`, defaulting to `min`.
    ///
    /// Returns `None` if `min` is zero or greater than `max`.
    #[instrument]
    pub fn new(min: u8, max: u8) -> Option<Self> {
        if min == 0 || min > max {
            debug!("Rejected budget range");
            return None;
        }
        Some(Self {
            min_budget: min,
            max_budget: max,
            default_budget: min,
        })
    }

    /// Smallest allowed budget.
    pub fn min_budget(&self) -> u8 {
        self.min_budget
    }

    /// Largest allowed budget.
    pub fn max_budget(&self) -> u8 {
        self.max_budget
    }

    /// Budget offered before the players change it.
    pub fn default_budget(&self) -> u8 {
        self.default_budget
    }

    /// Returns true if the budget is within range.
    pub fn allows(&self, budget: u8) -> bool {
        (self.min_budget..=self.max_budget).contains(&budget)
    }

    /// Checks a requested budget and turns it into a full [`GuessBudget`].
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidConfig`] if the budget is out of range.
    #[instrument(skip(self))]
    pub fn budget(&self, budget: u8) -> Result<GuessBudget, GameError> {
        if self.allows(budget) {
            Ok(GuessBudget::new(budget))
        } else {
            Err(GameError::InvalidConfig {
                budget,
                min: self.min_budget,
                max: self.max_budget,
            })
        }
    }

    /// Steps a budget selector up or down by one, wrapping at the ends.
    ///
    /// Out-of-range input is clamped into range before stepping.
    pub fn step_budget(&self, current: u8, up: bool) -> u8 {
        let current = current.clamp(self.min_budget, self.max_budget);
        match (up, current) {
            (true, c) if c == self.max_budget => self.min_budget,
            (true, c) => c + 1,
            (false, c) if c == self.min_budget => self.max_budget,
            (false, c) => c - 1,
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            min_budget: MIN_GUESS_BUDGET,
            max_budget: MAX_GUESS_BUDGET,
            default_budget: DEFAULT_GUESS_BUDGET,
        }
    }
}

/// Setup values for one round: two names and a guess budget.
///
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundConfig {
    /// Name for the first seat.
    #[serde(default = "default_player1_name")]
    player1_name: String,

    /// Name for the second seat.
    #[serde(default = "default_player2_name")]
    player2_name: String,

    /// Wrong guesses allowed.
    #[serde(default = "default_guess_budget")]
    guess_budget: u8,
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

impl RoundConfig {
    /// Creates a configuration.
    pub fn new(
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
        guess_budget: u8,
    ) -> Self {
        Self {
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
            guess_budget,
        }
    }

    /// Name entered for a seat.
    pub fn name(&self, seat: Seat) -> &str {
        match seat {
            Seat::First => &self.player1_name,
            Seat::Second => &self.player2_name,
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            player1_name: default_player1_name(),
            player2_name: default_player2_name(),
            guess_budget: default_guess_budget(),
        }
    }
}
