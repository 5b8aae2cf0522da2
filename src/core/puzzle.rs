//! The active puzzle: a secret word with an opaque identity
//!
//! Exactly one puzzle is active at a time; its id is what a stored game is
//! matched against to decide whether the player is resuming or starting over.

use super::word::Word;
use chrono::NaiveDate;

/// A secret word selected for play
///
/// Immutable once selected. `id` uniquely identifies "the puzzle currently
/// being played"; the activation date drives streak expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    id: String,
    word: Word,
    activation_date: Option<NaiveDate>,
}

impl Puzzle {
    /// Create a puzzle for the given date
    #[must_use]
    pub fn new(id: impl Into<String>, word: Word, activation_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            word,
            activation_date: Some(activation_date),
        }
    }

    /// Create a puzzle with no activation date (practice play)
    ///
    /// Undated puzzles never preserve a streak across games.
    #[must_use]
    pub fn undated(id: impl Into<String>, word: Word) -> Self {
        Self {
            id: id.into(),
            word,
            activation_date: None,
        }
    }

    /// Opaque puzzle identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Calendar date this puzzle became active, if any
    #[inline]
    #[must_use]
    pub const fn activation_date(&self) -> Option<NaiveDate> {
        self.activation_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_carries_identity_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let puzzle = Puzzle::new("2024-03-01#7", Word::new("crane").unwrap(), date);

        assert_eq!(puzzle.id(), "2024-03-01#7");
        assert_eq!(puzzle.word().text(), "crane");
        assert_eq!(puzzle.activation_date(), Some(date));
    }

    #[test]
    fn undated_puzzle_has_no_date() {
        let puzzle = Puzzle::undated("practice", Word::new("slate").unwrap());
        assert_eq!(puzzle.activation_date(), None);
    }
}
