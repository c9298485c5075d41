//! Phase-gated round engine.
//!
//! [`GameEngine`] owns the single live [`RoundState`] and is the only way to
//! change it. Every operation validates first and writes second, so a
//! rejected call leaves the round exactly as it was.

use crate::alphabet::Letter;
use crate::contracts::LegalGuess;
#[cfg(debug_assertions)]
use crate::contracts::{Contract, GuessContract};
use crate::error::GameError;
use crate::ledger::Mark;
use crate::round::{Lineup, RoundState};
use crate::rules::{GameRules, RoundConfig};
use crate::snapshot::Snapshot;
use crate::types::{Operation, Player, Role, RoundOutcome, RoundPhase, Seat, SecretWord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What happened on an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct GuessFeedback {
    /// The letter, uppercase.
    pub letter: Letter,
    /// Hit or miss.
    pub mark: Mark,
    /// Cells revealed by this guess.
    pub revealed: usize,
    /// Wrong guesses left after this guess.
    pub guesses_left: u8,
    /// Set when this guess ended the round.
    pub outcome: Option<RoundOutcome>,
}

/// Hangman state machine for one pair of players.
///
/// Legal operations per phase:
///
/// | Phase | Operation |
/// |---|---|
/// | `AwaitingPlayers` | [`configure_players`](Self::configure_players) |
/// | `AwaitingPickerSelection` | [`select_picker`](Self::select_picker) |
/// | `AwaitingWord` | [`submit_word`](Self::submit_word) |
/// | `Guessing` | [`submit_guess`](Self::submit_guess) |
/// | any | [`reset`](Self::reset) |
///
/// Anything else fails with [`GameError::WrongPhase`].
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    rules: GameRules,
    state: RoundState,
}

impl GameEngine {
    /// Creates an engine with the default rules (budget 5 to 15).
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom rules.
    #[instrument]
    pub fn with_rules(rules: GameRules) -> Self {
        Self {
            rules,
            state: RoundState::default(),
        }
    }

    /// Rules in force.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Read-only view of the round state.
    pub fn round(&self) -> &RoundState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    /// Observable state for the presentation layer.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    // ─────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────

    /// Stores both players and the guess budget.
    ///
    /// Blank names become "Player 1" / "Player 2".
    ///
    /// # Errors
    ///
    /// - [`GameError::WrongPhase`] outside `AwaitingPlayers`
    /// - [`GameError::InvalidConfig`] if the budget is out of range
    #[instrument(skip(self))]
    pub fn configure_players(
        &mut self,
        name1: &str,
        name2: &str,
        guess_budget: u8,
    ) -> Result<(), GameError> {
        self.expect_phase(Operation::ConfigurePlayers)?;
        let budget = self.rules.budget(guess_budget).inspect_err(|e| {
            warn!(error = %e, "Rejected player configuration");
        })?;

        let lineup = Lineup::new(name1, name2, budget);
        info!(
            player1 = lineup.name(Seat::First),
            player2 = lineup.name(Seat::Second),
            guess_budget,
            "Players configured"
        );
        self.state = RoundState::AwaitingPickerSelection(lineup);
        Ok(())
    }

    /// Same as [`configure_players`](Self::configure_players), from a [`RoundConfig`].
    pub fn configure(&mut self, config: &RoundConfig) -> Result<(), GameError> {
        self.configure_players(
            config.player1_name(),
            config.player2_name(),
            *config.guess_budget(),
        )
    }

    /// Makes the player at `seat` the picker; the other player guesses.
    ///
    /// # Errors
    ///
    /// - [`GameError::WrongPhase`] outside `AwaitingPickerSelection`
    /// - [`GameError::NoSelection`] if no seat was supplied
    #[instrument(skip(self))]
    pub fn select_picker(&mut self, seat: Option<Seat>) -> Result<(), GameError> {
        let RoundState::AwaitingPickerSelection(lineup) = &self.state else {
            return Err(self.wrong_phase(Operation::SelectPicker));
        };
        let Some(seat) = seat else {
            warn!("No picker selected");
            return Err(GameError::NoSelection);
        };

        let seating = lineup.clone().assign(seat);
        info!(picker = %seating.picker().name(), "Picker selected");
        self.state = RoundState::AwaitingWord(seating);
        Ok(())
    }

    /// Sets the secret word and starts guessing.
    ///
    /// # Errors
    ///
    /// - [`GameError::WrongPhase`] outside `AwaitingWord`
    /// - [`GameError::WordTooShort`] if shorter than two characters
    /// - [`GameError::WordHasInvalidChars`] if not letters only
    #[instrument(skip(self, raw))]
    pub fn submit_word(&mut self, raw: &str) -> Result<(), GameError> {
        let RoundState::AwaitingWord(seating) = &self.state else {
            return Err(self.wrong_phase(Operation::SubmitWord));
        };
        let word = SecretWord::parse(raw).inspect_err(|e| {
            warn!(kind = %e.kind(), "Rejected secret word");
        })?;

        info!(length = word.len(), "Secret word accepted");
        let round = seating.clone().begin(word);
        self.state = RoundState::Guessing(round);
        Ok(())
    }

    /// Resolves one guess.
    ///
    /// A hit reveals every matching cell and never touches the budget; a
    /// miss spends one guess. Completion is only checked after a hit and
    /// exhaustion only after a miss.
    ///
    /// # Errors
    ///
    /// - [`GameError::WrongPhase`] outside `Guessing`
    /// - [`GameError::InvalidGuess`] if not a single, not-yet-guessed letter
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessFeedback, GameError> {
        let RoundState::Guessing(round) = &mut self.state else {
            return Err(self.wrong_phase(Operation::SubmitGuess));
        };
        let letter = LegalGuess::check(raw, round).inspect_err(|_| {
            warn!("Rejected guess");
        })?;

        #[cfg(debug_assertions)]
        let before = round.clone();

        let (mark, revealed) = round.apply(letter);
        let guesses_left = round.budget().remaining();
        debug!(%letter, %mark, revealed, guesses_left, "Guess applied");

        #[cfg(debug_assertions)]
        GuessContract::post(&before, round)?;

        let outcome = round.settle(mark);
        if let Some(outcome) = &outcome {
            self.state = std::mem::take(&mut self.state).conclude(outcome.clone());
        }

        Ok(GuessFeedback::new(letter, mark, revealed, guesses_left, outcome))
    }

    /// Discards the round and returns to `AwaitingPlayers`. Never fails.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(from = %self.phase(), "Round reset");
        self.state = RoundState::AwaitingPlayers;
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Role of the player at `seat`, once the picker is chosen.
    pub fn role_of(&self, seat: Seat) -> Option<Role> {
        self.player(seat).map(|p| *p.role())
    }

    /// Player at `seat`, once the picker is chosen.
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.state.seating().map(|s| s.player(seat))
    }

    /// The picker, once chosen.
    pub fn picker(&self) -> Option<&Player> {
        self.state.seating().map(|s| s.picker())
    }

    /// The guesser, once the picker is chosen.
    pub fn guesser(&self) -> Option<&Player> {
        self.state.seating().map(|s| s.guesser())
    }

    /// Wrong guesses left, once players are configured.
    pub fn guesses_left(&self) -> Option<u8> {
        self.state.budget().map(|b| b.remaining())
    }

    /// Outcome, once the round is over.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.state.outcome()
    }

    // ─────────────────────────────────────────────────────────
    //  Gating
    // ─────────────────────────────────────────────────────────

    fn expect_phase(&self, operation: Operation) -> Result<(), GameError> {
        if self.phase() == operation.legal_phase() {
            Ok(())
        } else {
            Err(self.wrong_phase(operation))
        }
    }

    fn wrong_phase(&self, operation: Operation) -> GameError {
        let phase = self.phase();
        warn!(%operation, %phase, "Operation not legal in this phase");
        GameError::WrongPhase { operation, phase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutcomeReason;

    fn guessing(word: &str, budget: u8) -> GameEngine {
        let rules = GameRules::new(1, 15).unwrap();
        let mut engine = GameEngine::with_rules(rules);
        engine.configure_players("Ada", "Grace", budget).unwrap();
        engine.select_picker(Some(Seat::First)).unwrap();
        engine.submit_word(word).unwrap();
        engine
    }

    #[test]
    fn test_starts_awaiting_players() {
        let engine = GameEngine::new();
        assert_eq!(engine.phase(), RoundPhase::AwaitingPlayers);
        assert!(engine.picker().is_none());
        assert!(engine.guesses_left().is_none());
    }

    #[test]
    fn test_hit_feedback() {
        let mut engine = guessing("banana", 5);
        let feedback = engine.submit_guess("a").unwrap();
        assert_eq!(feedback.mark, Mark::Hit);
        assert_eq!(feedback.revealed, 3);
        assert_eq!(feedback.guesses_left, 5);
        assert!(feedback.outcome.is_none());
    }

    #[test]
    fn test_miss_feedback() {
        let mut engine = guessing("banana", 5);
        let feedback = engine.submit_guess("z").unwrap();
        assert_eq!(feedback.mark, Mark::Miss);
        assert_eq!(feedback.guesses_left, 4);
        assert_eq!(engine.guesses_left(), Some(4));
    }

    #[test]
    fn test_final_guess_reports_outcome() {
        let mut engine = guessing("ox", 5);
        engine.submit_guess("o").unwrap();
        let feedback = engine.submit_guess("x").unwrap();
        let outcome = feedback.outcome.expect("round should end");
        assert_eq!(outcome.reason(), OutcomeReason::WordCompleted);
        assert_eq!(engine.outcome(), Some(&outcome));
    }

    #[test]
    fn test_rejected_guess_leaves_state() {
        let mut engine = guessing("cat", 5);
        engine.submit_guess("c").unwrap();
        let before = engine.round().clone();
        assert!(engine.submit_guess("C").is_err());
        assert_eq!(engine.round(), &before);
    }

    #[test]
    fn test_role_lookup() {
        let engine = guessing("cat", 5);
        assert_eq!(engine.role_of(Seat::First), Some(Role::Picker));
        assert_eq!(engine.role_of(Seat::Second), Some(Role::Guesser));
    }
}
