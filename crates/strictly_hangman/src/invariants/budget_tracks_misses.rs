//! Budget accounting: remaining guesses equal allowed minus misses.

use super::Invariant;
use crate::round::Round;

/// Invariant: the budget only moves on misses.
///
/// `remaining == allowed - misses`, which also keeps the counter from
/// going negative before the round ends.
pub struct BudgetTracksMisses;

impl Invariant<Round> for BudgetTracksMisses {
    fn holds(round: &Round) -> bool {
        let budget = round.budget();
        usize::from(budget.spent()) == round.ledger().misses()
            && budget.remaining() <= budget.allowed()
    }

    fn description() -> &'static str {
        "Remaining guesses equal allowed guesses minus misses"
    }
}
