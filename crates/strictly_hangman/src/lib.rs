//! Strictly Hangman - pure game logic for two-player hangman.
//!
//! One player (the picker) chooses a secret word and the other (the guesser)
//! reveals it one letter at a time within a limited number of wrong guesses.
//!
//! # Architecture
//!
//! - **Alphabet**: validation predicates and the [`Letter`] newtype
//! - **Blank**: per-position reveal state of the secret word
//! - **Ledger**: letters already attempted, tagged hit or miss
//! - **Round**: phase-carried state ([`RoundState`])
//! - **Engine**: the phase-gated state machine ([`GameEngine`])
//!
//! The engine performs no I/O. A presentation layer drives it and re-reads
//! [`GameEngine::snapshot`] after every call.
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{GameEngine, OutcomeReason, RoundPhase, Seat};
//!
//! # fn example() -> Result<(), strictly_hangman::GameError> {
//! let mut engine = GameEngine::new();
//! engine.configure_players("Ada", "Grace", 5)?;
//! engine.select_picker(Some(Seat::First))?;
//! engine.submit_word("cat")?;
//!
//! for guess in ["c", "a", "t"] {
//!     engine.submit_guess(guess)?;
//! }
//!
//! assert_eq!(engine.phase(), RoundPhase::RoundOver);
//! let outcome = engine.outcome().expect("finished round has an outcome");
//! assert_eq!(outcome.reason(), OutcomeReason::WordCompleted);
//! assert_eq!(outcome.winner_name(), "Grace");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod alphabet;
mod blank;
mod contracts;
mod engine;
mod error;
mod invariants;
mod ledger;
mod round;
mod rules;
mod snapshot;
mod types;

pub use alphabet::{Letter, is_letters_only, is_single_letter};
pub use blank::{Cell, WordBlank};
pub use contracts::{Contract, GuessContract, LegalGuess, NotYetGuessed, SingleLetter};
pub use engine::{GameEngine, GuessFeedback};
pub use error::{ErrorKind, GameError};
pub use invariants::{
    BlankMatchesWord, BudgetTracksMisses, HangmanInvariants, Invariant, InvariantSet,
    InvariantViolation, LedgerHasNoRepeats, RevealsMatchHits,
};
pub use ledger::{Attempt, GuessLedger, Mark};
pub use round::{FinishedRound, Lineup, Round, RoundState, Seating};
pub use rules::{
    DEFAULT_GUESS_BUDGET, GameRules, MAX_GUESS_BUDGET, MIN_GUESS_BUDGET, RoundConfig,
};
pub use snapshot::{PlayerView, Snapshot};
pub use types::{
    GuessBudget, Operation, OutcomeReason, Player, Role, RoundOutcome, RoundPhase, Seat,
    SecretWord,
};
