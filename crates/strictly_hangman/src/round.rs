//! Phase-carried round state.
//!
//! Each phase is a variant carrying exactly the data that exists in that
//! phase. A finished round ALWAYS has an outcome and a guessing round
//! ALWAYS has a word, so neither is an `Option`.

use crate::alphabet::Letter;
use crate::blank::WordBlank;
use crate::ledger::{GuessLedger, Mark};
use crate::types::{
    GuessBudget, OutcomeReason, Player, Role, RoundOutcome, RoundPhase, Seat, SecretWord,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup
// ─────────────────────────────────────────────────────────────

/// Names and budget chosen at setup, before roles exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    names: [String; 2],
    budget: GuessBudget,
}

impl Lineup {
    /// Creates a lineup. Blank names fall back to the seat's default.
    #[instrument(skip_all)]
    pub fn new(name1: &str, name2: &str, budget: GuessBudget) -> Self {
        Self {
            names: [
                normalize_name(name1, Seat::First),
                normalize_name(name2, Seat::Second),
            ],
            budget,
        }
    }

    /// Name at a seat.
    pub fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }

    /// Budget for the round.
    pub fn budget(&self) -> GuessBudget {
        self.budget
    }

    /// Assigns the picker role to `picker` and the guesser role to the other seat.
    #[instrument(skip(self))]
    pub fn assign(self, picker: Seat) -> Seating {
        let [first, second] = self.names;
        let role = |seat: Seat| {
            if seat == picker {
                Role::Picker
            } else {
                Role::Guesser
            }
        };
        Seating {
            players: [
                Player::new(first, role(Seat::First)),
                Player::new(second, role(Seat::Second)),
            ],
            picker,
            budget: self.budget,
        }
    }
}

fn normalize_name(raw: &str, seat: Seat) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        seat.default_name().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Players with roles assigned, waiting for the secret word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seating {
    players: [Player; 2],
    picker: Seat,
    budget: GuessBudget,
}

impl Seating {
    /// Both players in seat order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player at a seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Seat of the picker.
    pub fn picker_seat(&self) -> Seat {
        self.picker
    }

    /// The player choosing the word.
    pub fn picker(&self) -> &Player {
        self.player(self.picker)
    }

    /// The player guessing the word.
    pub fn guesser(&self) -> &Player {
        self.player(self.picker.other())
    }

    /// Budget for the round.
    pub fn budget(&self) -> GuessBudget {
        self.budget
    }

    /// Starts guessing on `word` with an empty ledger and a full budget.
    #[instrument(skip_all, fields(length = word.len()))]
    pub fn begin(self, word: SecretWord) -> Round {
        let blank = WordBlank::create(&word);
        Round {
            seating: self,
            word,
            blank,
            ledger: GuessLedger::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Guessing
// ─────────────────────────────────────────────────────────────

/// A round in which the guesser is guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) seating: Seating,
    pub(crate) word: SecretWord,
    pub(crate) blank: WordBlank,
    pub(crate) ledger: GuessLedger,
}

impl Round {
    /// Players and roles.
    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    /// The secret word.
    pub fn word(&self) -> &SecretWord {
        &self.word
    }

    /// The blank shown to players.
    pub fn blank(&self) -> &WordBlank {
        &self.blank
    }

    /// Letters attempted so far.
    pub fn ledger(&self) -> &GuessLedger {
        &self.ledger
    }

    /// Remaining and allowed wrong guesses.
    pub fn budget(&self) -> GuessBudget {
        self.seating.budget
    }

    /// Applies a validated, unseen letter and records it.
    ///
    /// Returns the mark and how many cells were revealed. Preconditions are
    /// checked by the engine before this is called.
    #[instrument(skip(self))]
    pub(crate) fn apply(&mut self, letter: Letter) -> (Mark, usize) {
        if self.word.contains(letter) {
            let revealed = self.blank.reveal(letter, &self.word);
            self.ledger.record(letter, Mark::Hit);
            (Mark::Hit, revealed)
        } else {
            self.ledger.record(letter, Mark::Miss);
            self.seating.budget.spend();
            (Mark::Miss, 0)
        }
    }

    /// Outcome reached by the last guess, if any.
    ///
    /// Completion is only possible after a hit and exhaustion only after a
    /// miss, so at most one applies.
    pub(crate) fn settle(&self, mark: Mark) -> Option<RoundOutcome> {
        let picker = self.seating.picker().name();
        let guesser = self.seating.guesser().name();
        match mark {
            Mark::Hit if self.blank.is_complete() => Some(RoundOutcome::new(
                guesser.as_str(),
                picker.as_str(),
                self.word.as_str(),
                OutcomeReason::WordCompleted,
            )),
            Mark::Miss if self.budget().is_exhausted() => Some(RoundOutcome::new(
                picker.as_str(),
                guesser.as_str(),
                self.word.as_str(),
                OutcomeReason::ExhaustedGuesses,
            )),
            _ => None,
        }
    }

    /// Ends the round with `outcome`.
    #[instrument(skip(self))]
    pub(crate) fn finish(self, outcome: RoundOutcome) -> FinishedRound {
        info!(winner = outcome.winner_name(), reason = %outcome.reason(), "Round finished");
        FinishedRound {
            round: self,
            outcome,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished
// ─────────────────────────────────────────────────────────────

/// A round with a decided outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedRound {
    round: Round,
    outcome: RoundOutcome,
}

impl FinishedRound {
    /// The outcome. Never missing.
    pub fn outcome(&self) -> &RoundOutcome {
        &self.outcome
    }

    /// The round as it stood on the final guess.
    pub fn round(&self) -> &Round {
        &self.round
    }
}

// ─────────────────────────────────────────────────────────────
//  State
// ─────────────────────────────────────────────────────────────

/// The single live round owned by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Nothing configured yet.
    #[default]
    AwaitingPlayers,
    /// Names and budget set.
    AwaitingPickerSelection(Lineup),
    /// Roles assigned.
    AwaitingWord(Seating),
    /// Guessing in progress.
    Guessing(Round),
    /// Outcome decided.
    RoundOver(FinishedRound),
}

impl RoundState {
    /// The phase tag of this state.
    pub fn phase(&self) -> RoundPhase {
        match self {
            RoundState::AwaitingPlayers => RoundPhase::AwaitingPlayers,
            RoundState::AwaitingPickerSelection(_) => RoundPhase::AwaitingPickerSelection,
            RoundState::AwaitingWord(_) => RoundPhase::AwaitingWord,
            RoundState::Guessing(_) => RoundPhase::Guessing,
            RoundState::RoundOver(_) => RoundPhase::RoundOver,
        }
    }

    /// Players with roles, once the picker has been chosen.
    pub fn seating(&self) -> Option<&Seating> {
        match self {
            RoundState::AwaitingWord(seating) => Some(seating),
            RoundState::Guessing(round) => Some(round.seating()),
            RoundState::RoundOver(finished) => Some(finished.round().seating()),
            RoundState::AwaitingPlayers | RoundState::AwaitingPickerSelection(_) => None,
        }
    }

    /// The round, once a word has been submitted.
    pub fn round(&self) -> Option<&Round> {
        match self {
            RoundState::Guessing(round) => Some(round),
            RoundState::RoundOver(finished) => Some(finished.round()),
            _ => None,
        }
    }

    /// Budget, once players are configured.
    pub fn budget(&self) -> Option<GuessBudget> {
        match self {
            RoundState::AwaitingPlayers => None,
            RoundState::AwaitingPickerSelection(lineup) => Some(lineup.budget()),
            RoundState::AwaitingWord(seating) => Some(seating.budget()),
            RoundState::Guessing(round) => Some(round.budget()),
            RoundState::RoundOver(finished) => Some(finished.round().budget()),
        }
    }

    /// Outcome, once the round is over.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        match self {
            RoundState::RoundOver(finished) => Some(finished.outcome()),
            _ => None,
        }
    }

    /// Moves a guessing round to `RoundOver`. Other phases are returned unchanged.
    pub(crate) fn conclude(self, outcome: RoundOutcome) -> RoundState {
        match self {
            RoundState::Guessing(round) => RoundState::RoundOver(round.finish(outcome)),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_use_defaults() {
        let lineup = Lineup::new("", "   ", GuessBudget::new(5));
        assert_eq!(lineup.name(Seat::First), "Player 1");
        assert_eq!(lineup.name(Seat::Second), "Player 2");
    }

    #[test]
    fn test_names_are_trimmed() {
        let lineup = Lineup::new("  Ada ", "Grace", GuessBudget::new(5));
        assert_eq!(lineup.name(Seat::First), "Ada");
    }

    #[test]
    fn test_assign_roles_exhaustive() {
        let seating = Lineup::new("Ada", "Grace", GuessBudget::new(5)).assign(Seat::Second);
        assert_eq!(seating.picker().name(), "Grace");
        assert_eq!(seating.guesser().name(), "Ada");
        assert_eq!(*seating.player(Seat::First).role(), Role::Guesser);
        assert_eq!(*seating.player(Seat::Second).role(), Role::Picker);
    }

    #[test]
    fn test_begin_creates_matching_blank() {
        let seating = Lineup::new("Ada", "Grace", GuessBudget::new(5)).assign(Seat::First);
        let round = seating.begin(SecretWord::parse("rust").unwrap());
        assert_eq!(round.blank().len(), round.word().len());
        assert!(round.ledger().is_empty());
        assert_eq!(round.budget().remaining(), 5);
    }

    #[test]
    fn test_phase_tags() {
        assert_eq!(RoundState::default().phase(), RoundPhase::AwaitingPlayers);
        let lineup = Lineup::new("Ada", "Grace", GuessBudget::new(5));
        assert_eq!(
            RoundState::AwaitingPickerSelection(lineup).phase(),
            RoundPhase::AwaitingPickerSelection
        );
    }
}
