//! Core domain types for hangman.

use crate::alphabet::{Letter, is_letters_only};
use crate::error::GameError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Role a player takes for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Role {
    /// Supplies the secret word.
    Picker,
    /// Tries to reveal the secret word.
    Guesser,
}

impl Role {
    /// Returns the other role.
    pub fn opposite(self) -> Self {
        match self {
            Role::Picker => Role::Guesser,
            Role::Guesser => Role::Picker,
        }
    }
}

/// Position of a player in the setup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The first name entered (index 0).
    First,
    /// The second name entered (index 1).
    Second,
}

impl Seat {
    /// Both seats in order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// Creates a seat from a player index (0 or 1).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::First),
            1 => Some(Seat::Second),
            _ => None,
        }
    }

    /// Converts the seat to a player index.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Name used when the caller leaves this seat's name blank.
    pub fn default_name(self) -> &'static str {
        match self {
            Seat::First => "Player 1",
            Seat::Second => "Player 2",
        }
    }
}

/// A named player with an assigned role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Role for the current round.
    role: Role,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// The picker's word: uppercase ASCII letters, at least two of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretWord(String);

impl SecretWord {
    /// Shortest accepted word.
    pub const MIN_LEN: usize = 2;

    /// Validates raw input and uppercases it.
    ///
    /// Length is checked before characters, so `"7"` is too short rather
    /// than invalid.
    ///
    /// # Errors
    ///
    /// - [`GameError::WordTooShort`] if fewer than two characters
    /// - [`GameError::WordHasInvalidChars`] if any character is not an ASCII letter
    #[instrument(skip(raw), fields(length = raw.chars().count()))]
    pub fn parse(raw: &str) -> Result<Self, GameError> {
        let length = raw.chars().count();
        if length < Self::MIN_LEN {
            return Err(GameError::WordTooShort { length });
        }
        if !is_letters_only(raw) {
            let offending = raw
                .chars()
                .find(|c| !c.is_ascii_alphabetic())
                .unwrap_or_default();
            return Err(GameError::WordHasInvalidChars { offending });
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// Returns the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the word has no letters. Never true for a parsed word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the letters in order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.chars().filter_map(Letter::from_char)
    }

    /// Returns true if the letter occurs anywhere in the word.
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters().any(|l| l == letter)
    }
}

impl std::fmt::Display for SecretWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wrong guesses allowed and still remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessBudget {
    allowed: u8,
    remaining: u8,
}

impl GuessBudget {
    /// Creates a full budget.
    pub fn new(allowed: u8) -> Self {
        Self {
            allowed,
            remaining: allowed,
        }
    }

    /// Wrong guesses allowed at the start of the round.
    pub fn allowed(&self) -> u8 {
        self.allowed
    }

    /// Wrong guesses still available.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Wrong guesses used so far.
    pub fn spent(&self) -> u8 {
        self.allowed - self.remaining
    }

    /// Spends one wrong guess and returns what is left. Never goes below zero.
    pub fn spend(&mut self) -> u8 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// Returns true once no wrong guesses remain.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// The step of a round the engine is waiting on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum RoundPhase {
    /// Names and guess budget not yet configured.
    #[strum(to_string = "awaiting players")]
    AwaitingPlayers,
    /// Players configured, picker not chosen.
    #[strum(to_string = "awaiting picker selection")]
    AwaitingPickerSelection,
    /// Roles assigned, secret word not submitted.
    #[strum(to_string = "awaiting the word")]
    AwaitingWord,
    /// The guesser is guessing.
    #[strum(to_string = "guessing")]
    Guessing,
    /// The round has an outcome.
    #[strum(to_string = "the round is over")]
    RoundOver,
}

/// Engine operation, used to report out-of-phase calls.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Operation {
    /// `configure_players`
    #[strum(to_string = "configure players")]
    ConfigurePlayers,
    /// `select_picker`
    #[strum(to_string = "select the picker")]
    SelectPicker,
    /// `submit_word`
    #[strum(to_string = "submit a word")]
    SubmitWord,
    /// `submit_guess`
    #[strum(to_string = "submit a guess")]
    SubmitGuess,
}

impl Operation {
    /// The only phase in which this operation is legal.
    pub fn legal_phase(self) -> RoundPhase {
        match self {
            Operation::ConfigurePlayers => RoundPhase::AwaitingPlayers,
            Operation::SelectPicker => RoundPhase::AwaitingPickerSelection,
            Operation::SubmitWord => RoundPhase::AwaitingWord,
            Operation::SubmitGuess => RoundPhase::Guessing,
        }
    }
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum OutcomeReason {
    /// The guesser ran out of wrong guesses.
    ExhaustedGuesses,
    /// The guesser revealed every letter.
    WordCompleted,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    winner_name: String,
    loser_name: String,
    revealed_word: String,
    reason: OutcomeReason,
}

impl RoundOutcome {
    /// Creates an outcome.
    pub fn new(
        winner_name: impl Into<String>,
        loser_name: impl Into<String>,
        revealed_word: impl Into<String>,
        reason: OutcomeReason,
    ) -> Self {
        Self {
            winner_name: winner_name.into(),
            loser_name: loser_name.into(),
            revealed_word: revealed_word.into(),
            reason,
        }
    }

    /// Name of the winning player.
    pub fn winner_name(&self) -> &str {
        &self.winner_name
    }

    /// Name of the losing player.
    pub fn loser_name(&self) -> &str {
        &self.loser_name
    }

    /// The secret word, uppercase.
    pub fn revealed_word(&self) -> &str {
        &self.revealed_word
    }

    /// How the round ended.
    pub fn reason(&self) -> OutcomeReason {
        self.reason
    }

    /// First line of the game-over message.
    pub fn headline(&self) -> String {
        format!("The word was {}", self.revealed_word)
    }

    /// Second line of the game-over message.
    pub fn detail(&self) -> String {
        match self.reason {
            OutcomeReason::ExhaustedGuesses => format!(
                "{} is out of guesses. {} WINS!",
                self.loser_name, self.winner_name
            ),
            OutcomeReason::WordCompleted => format!("{} WINS!", self.winner_name),
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.headline(), self.detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_each_phase_gates_one_operation() {
        for phase in RoundPhase::iter() {
            let legal = Operation::iter()
                .filter(|op| op.legal_phase() == phase)
                .count();
            let expected = if phase == RoundPhase::RoundOver { 0 } else { 1 };
            assert_eq!(legal, expected, "{phase}");
        }
    }

    #[test]
    fn test_seat_round_trips_index() {
        for seat in Seat::ALL {
            assert_eq!(Seat::from_index(seat.index()), Some(seat));
        }
        assert_eq!(Seat::from_index(2), None);
    }

    #[test]
    fn test_secret_word_uppercases() {
        let word = SecretWord::parse("Rust").unwrap();
        assert_eq!(word.as_str(), "RUST");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn test_secret_word_checks_length_first() {
        assert!(matches!(
            SecretWord::parse("7"),
            Err(GameError::WordTooShort { length: 1 })
        ));
        assert!(matches!(
            SecretWord::parse(""),
            Err(GameError::WordTooShort { length: 0 })
        ));
    }

    #[test]
    fn test_secret_word_reports_offending_char() {
        assert!(matches!(
            SecretWord::parse("CA7"),
            Err(GameError::WordHasInvalidChars { offending: '7' })
        ));
    }

    #[test]
    fn test_budget_never_negative() {
        let mut budget = GuessBudget::new(1);
        assert_eq!(budget.spend(), 0);
        assert_eq!(budget.spend(), 0);
        assert!(budget.is_exhausted());
        assert_eq!(budget.spent(), 1);
    }

    #[test]
    fn test_outcome_messages() {
        let lost = RoundOutcome::new("Ada", "Grace", "DOG", OutcomeReason::ExhaustedGuesses);
        assert_eq!(lost.headline(), "The word was DOG");
        assert_eq!(lost.detail(), "Grace is out of guesses. Ada WINS!");

        let won = RoundOutcome::new("Grace", "Ada", "CAT", OutcomeReason::WordCompleted);
        assert_eq!(won.detail(), "Grace WINS!");
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(RoundPhase::AwaitingPlayers.to_string(), "awaiting players");
        assert_eq!(Operation::SubmitGuess.legal_phase(), RoundPhase::Guessing);
    }
}
