//! First-class invariants for a hangman round.
//!
//! Invariants are properties that must hold after every guess. They are
//! checked as postconditions in debug builds and can be tested on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod blank_matches_word;
pub mod budget_tracks_misses;
pub mod ledger_no_repeats;
pub mod reveals_match_hits;

pub use blank_matches_word::BlankMatchesWord;
pub use budget_tracks_misses::BudgetTracksMisses;
pub use ledger_no_repeats::LedgerHasNoRepeats;
pub use reveals_match_hits::RevealsMatchHits;

/// All round invariants as a composable set.
pub type HangmanInvariants = (
    BlankMatchesWord,
    RevealsMatchHits,
    LedgerHasNoRepeats,
    BudgetTracksMisses,
);
