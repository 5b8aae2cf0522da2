//! Core domain types for the daily game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear rules.

mod puzzle;
mod verdict;
mod word;

pub use puzzle::Puzzle;
pub use verdict::{ScoredGuess, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};
