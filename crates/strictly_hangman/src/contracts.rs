//! Contract-based validation for guesses.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} guess {Q}. Preconditions are always checked; postconditions run in
//! debug builds after every accepted guess.

use crate::alphabet::Letter;
use crate::blank::Cell;
use crate::error::GameError;
use crate::invariants::{HangmanInvariants, InvariantSet};
use crate::round::Round;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the raw guess is exactly one ASCII letter.
pub struct SingleLetter;

impl SingleLetter {
    /// Parses the guess or rejects it.
    #[instrument]
    pub fn check(raw: &str) -> Result<Letter, GameError> {
        Letter::parse(raw).ok_or_else(|| GameError::InvalidGuess {
            input: raw.to_string(),
        })
    }
}

/// Precondition: the letter has not been guessed this round.
pub struct NotYetGuessed;

impl NotYetGuessed {
    /// Rejects letters already in the ledger.
    #[instrument(skip(round))]
    pub fn check(letter: Letter, round: &Round) -> Result<(), GameError> {
        if round.ledger().contains(letter) {
            Err(GameError::InvalidGuess {
                input: letter.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a single letter not yet guessed.
pub struct LegalGuess;

impl LegalGuess {
    /// Validates raw input against the round and returns the letter.
    #[instrument(skip(round))]
    pub fn check(raw: &str, round: &Round) -> Result<Letter, GameError> {
        let letter = SingleLetter::check(raw)?;
        GuessContract::pre(round, &letter)?;
        Ok(letter)
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guesses.
///
/// Preconditions:
/// - Letter not yet guessed
///
/// Postconditions:
/// - All round invariants hold
/// - Exactly one ledger entry was added
/// - No revealed cell became hidden again
/// - The budget did not grow
pub struct GuessContract;

impl Contract<Round, Letter> for GuessContract {
    fn pre(round: &Round, letter: &Letter) -> Result<(), GameError> {
        NotYetGuessed::check(*letter, round)
    }

    fn post(before: &Round, after: &Round) -> Result<(), GameError> {
        HangmanInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Round invariants violated");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.ledger().len() != before.ledger().len() + 1 {
            return Err(GameError::InvariantViolation(
                "Guess must add exactly one ledger entry".to_string(),
            ));
        }

        let still_revealed = before
            .blank()
            .cells()
            .iter()
            .zip(after.blank().cells())
            .all(|(was, now)| matches!(was, Cell::Hidden) || was == now);
        if !still_revealed {
            return Err(GameError::InvariantViolation(
                "Revealed cells must stay revealed".to_string(),
            ));
        }

        if after.budget().remaining() > before.budget().remaining() {
            return Err(GameError::InvariantViolation(
                "Guess budget must never grow".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Lineup;
    use crate::types::{GuessBudget, Seat, SecretWord};

    fn round(word: &str) -> Round {
        Lineup::new("Ada", "Grace", GuessBudget::new(5))
            .assign(Seat::First)
            .begin(SecretWord::parse(word).unwrap())
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_precondition_fresh_letter() {
        assert!(GuessContract::pre(&round("cat"), &letter('C')).is_ok());
    }

    #[test]
    fn test_precondition_repeated_letter() {
        let mut round = round("cat");
        round.apply(letter('C'));
        assert!(matches!(
            GuessContract::pre(&round, &letter('C')),
            Err(GameError::InvalidGuess { .. })
        ));
    }

    #[test]
    fn test_legal_guess_normalises_case() {
        let round = round("cat");
        assert_eq!(LegalGuess::check("a", &round), Ok(letter('A')));
    }

    #[test]
    fn test_legal_guess_rejects_non_letters() {
        let round = round("cat");
        for raw in ["", "ab", "7", "?"] {
            assert_eq!(
                LegalGuess::check(raw, &round),
                Err(GameError::InvalidGuess {
                    input: raw.to_string()
                })
            );
        }
    }

    #[test]
    fn test_postcondition_holds_after_guess() {
        let before = round("cat");
        let mut after = before.clone();
        after.apply(letter('A'));
        assert!(GuessContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_entry() {
        let before = round("cat");
        assert!(GuessContract::post(&before, &before.clone()).is_err());
    }

    #[test]
    fn test_postcondition_detects_hidden_again() {
        let mut before = round("cat");
        before.apply(letter('C'));
        let mut after = before.clone();
        after.apply(letter('A'));
        // Corrupt: hide the C again.
        after.blank = crate::WordBlank::create(after.word());
        after.blank.reveal(letter('A'), &before.word);
        assert!(GuessContract::post(&before, &after).is_err());
    }
}
