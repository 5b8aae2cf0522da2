//! One-shot scoring command
//!
//! Scores a single guess against a given secret without touching any game
//! state; handy for scripting and for checking feedback by hand.

use crate::core::{ScoredGuess, Word, WordError};

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns a [`WordError`] if either word is not a valid 5-letter word.
pub fn score_pair(guess: &str, secret: &str) -> Result<ScoredGuess, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;

    Ok(ScoredGuess::score(&guess, &secret))
}
