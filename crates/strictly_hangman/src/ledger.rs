//! Record of letters already attempted.

use crate::alphabet::Letter;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Whether a guessed letter was in the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// The letter occurs in the word.
    #[strum(to_string = "CORRECT")]
    Hit,
    /// The letter does not occur in the word.
    #[strum(to_string = "WRONG")]
    Miss,
}

impl Mark {
    /// Converts a hit flag into a mark.
    pub fn from_hit(hit: bool) -> Self {
        if hit { Mark::Hit } else { Mark::Miss }
    }

    /// Returns true for [`Mark::Hit`].
    pub fn is_hit(self) -> bool {
        matches!(self, Mark::Hit)
    }
}

/// One recorded guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Attempt {
    /// The letter guessed.
    pub letter: Letter,
    /// Hit or miss.
    pub mark: Mark,
}

/// Letters attempted this round, in the order they were guessed.
///
/// The ledger does not reject repeats itself: the engine checks
/// [`GuessLedger::contains`] before calling [`GuessLedger::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessLedger {
    pub(crate) attempts: Vec<Attempt>,
}

impl GuessLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the letter was already attempted.
    pub fn contains(&self, letter: Letter) -> bool {
        self.attempts.iter().any(|attempt| attempt.letter == letter)
    }

    /// Appends a guess.
    ///
    /// Callers must check [`GuessLedger::contains`] first.
    #[instrument(skip(self))]
    pub fn record(&mut self, letter: Letter, mark: Mark) {
        debug_assert!(!self.contains(letter), "letter {letter} recorded twice");
        self.attempts.push(Attempt::new(letter, mark));
    }

    /// All attempts in guess order.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The most recent attempt.
    pub fn last(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// Number of attempts.
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    /// Returns true if nothing has been guessed.
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Number of hits.
    pub fn hits(&self) -> usize {
        self.attempts.iter().filter(|a| a.mark.is_hit()).count()
    }

    /// Number of misses.
    pub fn misses(&self) -> usize {
        self.len() - self.hits()
    }

    /// Guessed letters in order, separated by spaces (`C Z A`).
    pub fn display(&self) -> String {
        self.attempts
            .iter()
            .map(|a| a.letter.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
