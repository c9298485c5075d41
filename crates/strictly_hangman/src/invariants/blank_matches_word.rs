//! Blank/word agreement: the blank is as long as the word and every
//! revealed cell shows the letter at that position.

use super::Invariant;
use crate::blank::Cell;
use crate::round::Round;

/// Invariant: the blank is a faithful projection of the secret word.
pub struct BlankMatchesWord;

impl Invariant<Round> for BlankMatchesWord {
    fn holds(round: &Round) -> bool {
        round.blank().len() == round.word().len()
            && round
                .blank()
                .cells()
                .iter()
                .zip(round.word().letters())
                .all(|(cell, actual)| match cell {
                    Cell::Hidden => true,
                    Cell::Revealed(shown) => *shown == actual,
                })
    }

    fn description() -> &'static str {
        "Blank has one cell per letter and shows only true letters"
    }
}
