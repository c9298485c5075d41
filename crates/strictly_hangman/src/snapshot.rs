//! Read-only view of the engine for the presentation layer.

use crate::round::RoundState;
use crate::types::{Role, RoundOutcome, RoundPhase, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct PlayerView {
    /// Seat in the setup form.
    seat: Seat,
    /// Display name.
    name: String,
    /// Role, once the picker has been chosen.
    role: Option<Role>,
}

/// Everything a presentation layer needs to render the current phase.
///
/// Captured fresh after every engine call; holding one does not borrow
/// the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Current phase.
    phase: RoundPhase,
    /// Players in seat order (empty before configuration).
    players: Vec<PlayerView>,
    /// Blank display string, `_` for hidden cells (empty before the word).
    blank: String,
    /// Wrong guesses still available, once configured.
    guesses_left: Option<u8>,
    /// Wrong guesses allowed this round, once configured.
    guesses_allowed: Option<u8>,
    /// Guessed letters in guess order.
    guessed: String,
    /// Status line for the current phase.
    message: String,
    /// Second status line, used for the game-over detail.
    detail: Option<String>,
    /// Outcome, once the round is over.
    outcome: Option<RoundOutcome>,
}

impl Snapshot {
    /// Captures the observable state of a round.
    #[instrument(skip(state), fields(phase = %state.phase()))]
    pub fn capture(state: &RoundState) -> Self {
        let players = match state {
            RoundState::AwaitingPlayers => Vec::new(),
            RoundState::AwaitingPickerSelection(lineup) => Seat::ALL
                .iter()
                .map(|&seat| PlayerView::new(seat, lineup.name(seat).to_string(), None))
                .collect(),
            _ => state
                .seating()
                .map(|seating| {
                    Seat::ALL
                        .iter()
                        .map(|&seat| {
                            let player = seating.player(seat);
                            PlayerView::new(seat, player.name().clone(), Some(*player.role()))
                        })
                        .collect()
                })
                .unwrap_or_default(),
        };

        let budget = state.budget();
        let round = state.round();

        Self {
            phase: state.phase(),
            players,
            blank: round.map(|r| r.blank().display()).unwrap_or_default(),
            guesses_left: budget.map(|b| b.remaining()),
            guesses_allowed: budget.map(|b| b.allowed()),
            guessed: round.map(|r| r.ledger().display()).unwrap_or_default(),
            message: status_message(state),
            detail: state.outcome().map(RoundOutcome::detail),
            outcome: state.outcome().cloned(),
        }
    }

    /// Name of the player holding `role`, if roles are assigned.
    pub fn name_of(&self, role: Role) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.role == Some(role))
            .map(|p| p.name.as_str())
    }
}

fn status_message(state: &RoundState) -> String {
    match state {
        RoundState::AwaitingPlayers => {
            "Enter player names and pick the number of guesses".to_string()
        }
        RoundState::AwaitingPickerSelection(_) => {
            "Select which player will pick the word".to_string()
        }
        RoundState::AwaitingWord(seating) => {
            format!("{}, enter your word", seating.picker().name())
        }
        RoundState::Guessing(round) => match round.ledger().last() {
            Some(attempt) => attempt.mark.to_string(),
            None => format!("{}, guess a letter", round.seating().guesser().name()),
        },
        RoundState::RoundOver(finished) => finished.outcome().headline(),
    }
}
