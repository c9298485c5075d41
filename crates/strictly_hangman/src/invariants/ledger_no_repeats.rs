//! Ledger uniqueness: no letter is recorded twice.

use super::Invariant;
use crate::round::Round;
use std::collections::HashSet;

/// Invariant: every letter appears in the ledger at most once.
pub struct LedgerHasNoRepeats;

impl Invariant<Round> for LedgerHasNoRepeats {
    fn holds(round: &Round) -> bool {
        let mut seen = HashSet::new();
        round
            .ledger()
            .attempts()
            .iter()
            .all(|attempt| seen.insert(attempt.letter))
    }

    fn description() -> &'static str {
        "No letter is recorded twice"
    }
}
