//! Alphabet validation helpers.
//!
//! Only the ASCII letters A-Z take part in the game. Everything here is a
//! pure function of its input.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Returns true if `s` is exactly one ASCII letter (either case).
#[instrument]
pub fn is_single_letter(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

/// Returns true if every character of `s` is an ASCII letter.
///
/// The empty string passes; length is checked separately.
#[instrument]
pub fn is_letters_only(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

/// A single uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Letter(char);

impl Letter {
    /// Creates a letter from a character, normalising to uppercase.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then(|| Self(c.to_ascii_uppercase()))
    }

    /// Parses raw guess input. Succeeds only for a single ASCII letter.
    #[instrument]
    pub fn parse(raw: &str) -> Option<Self> {
        if !is_single_letter(raw) {
            return None;
        }
        raw.chars().next().and_then(Self::from_char)
    }

    /// Returns the uppercase character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Iterates A through Z.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        ('A'..='Z').map(Letter)
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
