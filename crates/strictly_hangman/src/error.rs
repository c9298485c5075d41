//! Error taxonomy for engine operations.
//!
//! Every variant is a local, recoverable validation failure. A rejected
//! operation never changes the round.

use crate::types::{Operation, RoundPhase};
use serde::{Deserialize, Serialize};

/// Error returned by a rejected engine operation.
///
/// The `Display` text is the message shown to players.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, strum::EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(Hash, Serialize, Deserialize, strum::Display))]
pub enum GameError {
    /// Guess budget outside the allowed range.
    #[display("Guess budget must be between {} and {} (got {})", min, max, budget)]
    InvalidConfig {
        /// Requested budget.
        budget: u8,
        /// Smallest allowed budget.
        min: u8,
        /// Largest allowed budget.
        max: u8,
    },

    /// No player was chosen as picker.
    #[display("Select which player will pick the word")]
    NoSelection,

    /// Secret word shorter than two characters.
    #[display("Enter a word at least 2 letters long")]
    WordTooShort {
        /// Length of the rejected input, in characters.
        length: usize,
    },

    /// Secret word contains something other than ASCII letters.
    #[display("Your word can only contain letters")]
    WordHasInvalidChars {
        /// First offending character.
        offending: char,
    },

    /// Guess is not a single letter, or that letter was already tried.
    #[display("Guess failed. Must be a single letter you've yet to guess.")]
    InvalidGuess {
        /// The rejected input, as typed.
        input: String,
    },

    /// Operation is not legal in the current phase.
    #[display("Cannot {} while {}", operation, phase)]
    WrongPhase {
        /// The attempted operation.
        operation: Operation,
        /// The phase the engine was in.
        phase: RoundPhase,
    },

    /// A postcondition failed after a transition (programming error).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl GameError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.into()
    }
}

impl std::error::Error for GameError {}
