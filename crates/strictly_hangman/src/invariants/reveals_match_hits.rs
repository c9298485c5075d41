//! Reveal/ledger agreement: a cell is revealed exactly when its letter
//! has been recorded as a hit.

use super::Invariant;
use crate::round::Round;

/// Invariant: revealed cells and hit letters describe the same guesses.
///
/// Every hit letter is revealed at all its positions, and no cell is
/// revealed for a letter that was never guessed.
pub struct RevealsMatchHits;

impl Invariant<Round> for RevealsMatchHits {
    fn holds(round: &Round) -> bool {
        round
            .blank()
            .cells()
            .iter()
            .zip(round.word().letters())
            .all(|(cell, actual)| {
                let guessed = round
                    .ledger()
                    .attempts()
                    .iter()
                    .any(|a| a.letter == actual && a.mark.is_hit());
                guessed != cell.is_hidden()
            })
            && round
                .ledger()
                .attempts()
                .iter()
                .all(|a| a.mark.is_hit() == round.word().contains(a.letter))
    }

    fn description() -> &'static str {
        "A cell is revealed exactly when its letter was a recorded hit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Mark;
    use crate::round::Lineup;
    use crate::types::{GuessBudget, Seat, SecretWord};
    use crate::Letter;

    fn round(word: &str) -> Round {
        Lineup::new("Ada", "Grace", GuessBudget::new(5))
            .assign(Seat::First)
            .begin(SecretWord::parse(word).unwrap())
    }

    #[test]
    fn test_applied_guesses_hold() {
        let mut round = round("letter");
        for c in ['T', 'X', 'E'] {
            round.apply(Letter::from_char(c).unwrap());
        }
        assert!(RevealsMatchHits::holds(&round));
    }

    #[test]
    fn test_unrecorded_reveal_violates() {
        let mut round = round("dog");
        let word = round.word.clone();
        round.blank.reveal(Letter::from_char('D').unwrap(), &word);
        assert!(!RevealsMatchHits::holds(&round));
    }

    #[test]
    fn test_mislabelled_miss_violates() {
        let mut round = round("dog");
        round.ledger.record(Letter::from_char('O').unwrap(), Mark::Miss);
        assert!(!RevealsMatchHits::holds(&round));
    }
}
