//! Per-position reveal state of the secret word.

use crate::alphabet::Letter;
use crate::types::SecretWord;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One position of the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not yet guessed.
    Hidden,
    /// Guessed correctly.
    Revealed(Letter),
}

impl Cell {
    /// Display symbol: `_` when hidden, the letter once revealed.
    pub fn symbol(self) -> char {
        match self {
            Cell::Hidden => '_',
            Cell::Revealed(letter) => letter.as_char(),
        }
    }

    /// Returns true if the cell is still hidden.
    pub fn is_hidden(self) -> bool {
        matches!(self, Cell::Hidden)
    }
}

/// The secret word as players see it.
///
/// Always exactly as long as the word it was created from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBlank {
    cells: Vec<Cell>,
}

impl WordBlank {
    /// Creates an all-hidden blank for the word.
    #[instrument(skip(word), fields(length = word.len()))]
    pub fn create(word: &SecretWord) -> Self {
        Self {
            cells: vec![Cell::Hidden; word.len()],
        }
    }

    /// Reveals every position where `word` has `letter`.
    ///
    /// Other positions are left alone, so revealed cells stay revealed.
    /// Returns how many cells changed from hidden to revealed.
    #[instrument(skip(self, word))]
    pub fn reveal(&mut self, letter: Letter, word: &SecretWord) -> usize {
        let mut newly_revealed = 0;
        for (cell, actual) in self.cells.iter_mut().zip(word.letters()) {
            if actual == letter && cell.is_hidden() {
                *cell = Cell::Revealed(letter);
                newly_revealed += 1;
            }
        }
        debug!(newly_revealed, "Blank updated");
        newly_revealed
    }

    /// Returns true when no cell is hidden.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_hidden())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the blank has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of hidden cells.
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }

    /// All cells in word order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Display string, one symbol per cell separated by spaces (`C _ T`).
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for WordBlank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_create_is_all_hidden() {
        let word = SecretWord::parse("hangman").unwrap();
        let blank = WordBlank::create(&word);
        assert_eq!(blank.len(), word.len());
        assert!(blank.cells().iter().all(|cell| cell.is_hidden()));
        assert_eq!(blank.display(), "_ _ _ _ _ _ _");
    }

    #[test]
    fn test_reveal_every_occurrence() {
        let word = SecretWord::parse("banana").unwrap();
        let mut blank = WordBlank::create(&word);
        assert_eq!(blank.reveal(letter('A'), &word), 3);
        assert_eq!(blank.display(), "_ A _ A _ A");
        assert_eq!(blank.hidden_count(), 3);
    }

    #[test]
    fn test_reveal_absent_letter_changes_nothing() {
        let word = SecretWord::parse("dog").unwrap();
        let mut blank = WordBlank::create(&word);
        assert_eq!(blank.reveal(letter('Z'), &word), 0);
        assert_eq!(blank, WordBlank::create(&word));
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let word = SecretWord::parse("cat").unwrap();
        let mut blank = WordBlank::create(&word);
        blank.reveal(letter('C'), &word);
        blank.reveal(letter('A'), &word);
        assert_eq!(blank.reveal(letter('C'), &word), 0);
        assert_eq!(blank.display(), "C A _");
    }

    #[test]
    fn test_complete_after_all_letters() {
        let word = SecretWord::parse("cat").unwrap();
        let mut blank = WordBlank::create(&word);
        for c in ['C', 'A'] {
            blank.reveal(letter(c), &word);
            assert!(!blank.is_complete());
        }
        blank.reveal(letter('T'), &word);
        assert!(blank.is_complete());
    }
}
