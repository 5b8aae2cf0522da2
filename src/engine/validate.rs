//! Guess validation against game-length and cross-guess consistency rules
//!
//! Runs before scoring. A rejected guess never reaches the scorer, is never
//! appended to the game, and does not consume a turn.

use super::game::{GameState, Severity};
use crate::core::{Verdict, WORD_LENGTH};

/// Why a submitted guess was refused
///
/// Every variant is an expected, user-facing outcome: the player may simply
/// submit another word. `WordNotRecognized` is produced by the dictionary
/// collaborator rather than the checks below, but travels through the same
/// type so callers surface all refusals identically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("The word must be exactly 5 letters, got {0}")]
    WrongLength(usize),

    #[error("\"{0}\" has already been guessed")]
    AlreadyGuessed(String),

    #[error("Letter '{0}' must stay in its solved position")]
    PositionLocked(char),

    #[error("Letter '{0}' must appear in the guess")]
    MustReuseLetter(char),

    #[error("\"{0}\" is not in the word list")]
    WordNotRecognized(String),
}

impl Rejection {
    /// Notification class for the caller to relay
    #[must_use]
    pub const fn severity(&self) -> Severity {
        Severity::Error
    }
}

/// Check a candidate guess against the current game
///
/// Checks run in order and stop at the first failure:
/// 1. the guess must have exactly 5 letters
/// 2. the guess must differ from every previously scored guess
/// 3. against the most recent scored guess only:
///    - a position solved Correct must keep its letter
///    - a letter marked Present must appear somewhere in the new guess
///
/// Absent verdicts impose no constraint; the letter may reappear or not.
/// Dictionary membership is the caller's concern (see [`crate::wordlists::WordBank`]).
///
/// # Errors
/// Returns the first applicable [`Rejection`]. The game state is never
/// modified here; retrying the same guess reproduces the same rejection.
pub fn validate(guess: &str, state: &GameState) -> Result<(), Rejection> {
    let letters: Vec<char> = guess.to_lowercase().chars().collect();

    if letters.len() != WORD_LENGTH {
        return Err(Rejection::WrongLength(letters.len()));
    }

    let word: String = letters.iter().collect();
    if state.guesses().iter().any(|prior| prior.word() == word) {
        return Err(Rejection::AlreadyGuessed(word));
    }

    if let Some(previous) = state.guesses().last() {
        for (i, &(prev_letter, verdict)) in previous.iter().enumerate() {
            match verdict {
                Verdict::Correct if letters[i] != prev_letter => {
                    return Err(Rejection::PositionLocked(prev_letter));
                }
                Verdict::Present if !letters.contains(&prev_letter) => {
                    return Err(Rejection::MustReuseLetter(prev_letter));
                }
                _ => {}
            }
        }
    }

    Ok(())
}
