//! The word bank: puzzle provider and dictionary in one
//!
//! Plays the two collaborator roles the engine expects at its boundary:
//! supplying the active puzzle for a date and answering "is this candidate a
//! valid word" before a guess ever reaches validation.

use crate::core::{Puzzle, Word};
use crate::engine::Rejection;
use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// A set of playable words
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Bank over the given words
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Bank over the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(super::loader::words_from_slice(super::WORDS))
    }

    /// Number of words in the bank
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the bank holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Dictionary membership check (case-insensitive)
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        let candidate = candidate.to_lowercase();
        self.words.iter().any(|word| word.text() == candidate)
    }

    /// Look up a candidate, rejecting words outside the dictionary
    ///
    /// # Errors
    /// Returns [`Rejection::WordNotRecognized`] when the candidate is not in
    /// the bank; the caller surfaces it exactly like an engine rejection.
    pub fn lookup(&self, candidate: &str) -> Result<Word, Rejection> {
        let normalized = candidate.to_lowercase();
        self.words
            .iter()
            .find(|word| word.text() == normalized)
            .cloned()
            .ok_or_else(|| Rejection::WordNotRecognized(candidate.to_string()))
    }

    /// The puzzle active on the given date
    ///
    /// Selection is a pure function of the date, so every call for the same
    /// day hands out the same word, and the puzzle id encodes the date it
    /// belongs to. Returns `None` when the bank is empty.
    #[must_use]
    pub fn daily(&self, date: NaiveDate) -> Option<Puzzle> {
        if self.words.is_empty() {
            return None;
        }

        let days = i64::from(date.num_days_from_ce());
        let index = usize::try_from(days.rem_euclid(self.words.len() as i64))
            .expect("index fits after rem_euclid");

        Some(Puzzle::new(
            format!("{date}#{index}"),
            self.words[index].clone(),
            date,
        ))
    }

    /// A randomly chosen, undated practice puzzle
    ///
    /// Returns `None` when the bank is empty.
    #[must_use]
    pub fn random_puzzle(&self) -> Option<Puzzle> {
        if self.words.is_empty() {
            return None;
        }

        let index = rand::rng().random_range(0..self.words.len());
        Some(Puzzle::undated(
            format!("practice#{index}"),
            self.words[index].clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn small_bank() -> WordBank {
        WordBank::new(words_from_slice(&["apple", "crane", "slate"]))
    }

    #[test]
    fn contains_is_case_insensitive() {
        let bank = small_bank();
        assert!(bank.contains("apple"));
        assert!(bank.contains("APPLE"));
        assert!(!bank.contains("zzzzz"));
    }

    #[test]
    fn lookup_rejects_unknown_words() {
        let bank = small_bank();
        assert_eq!(bank.lookup("crane").unwrap().text(), "crane");
        assert_eq!(
            bank.lookup("qwert"),
            Err(Rejection::WordNotRecognized("qwert".to_string()))
        );
    }

    #[test]
    fn daily_is_deterministic_per_date() {
        let bank = small_bank();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let first = bank.daily(date).unwrap();
        let second = bank.daily(date).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.activation_date(), Some(date));
        assert!(first.id().starts_with("2024-03-01#"));
    }

    #[test]
    fn consecutive_days_rotate_through_the_bank() {
        let bank = small_bank();
        let day_one = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let day_two = day_one.succ_opt().unwrap();

        let first = bank.daily(day_one).unwrap();
        let second = bank.daily(day_two).unwrap();
        assert_ne!(first.word(), second.word());
    }

    #[test]
    fn empty_bank_has_no_puzzles() {
        let bank = WordBank::new(Vec::new());
        assert!(bank.is_empty());
        assert!(bank.daily(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).is_none());
        assert!(bank.random_puzzle().is_none());
    }

    #[test]
    fn random_puzzle_is_undated() {
        let bank = small_bank();
        let puzzle = bank.random_puzzle().unwrap();
        assert_eq!(puzzle.activation_date(), None);
        assert!(bank.contains(puzzle.word().text()));
    }

    #[test]
    fn embedded_bank_is_populated() {
        let bank = WordBank::embedded();
        assert!(!bank.is_empty());
        assert!(bank.contains("apple"));
    }
}
