//! Letter verdicts and guess scoring
//!
//! Scoring compares a guess against the secret word letter-by-letter and
//! produces one verdict per position:
//! - Correct: right letter, right position
//! - Present: letter occurs elsewhere in the secret, subject to multiplicity
//! - Absent: letter does not occur, or all its occurrences are already consumed
//!
//! The result keeps its positional layout (one `(letter, verdict)` pair per
//! guess position) because cross-guess validation needs to compare letters at
//! matching positions; a map keyed by letter would lose that alignment.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-letter classification of a scored guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Right letter, right position
    Correct,
    /// Letter occurs elsewhere in the secret word
    Present,
    /// Letter not in the secret word (or its occurrences are used up)
    #[default]
    Absent,
}

/// A guess after every letter has been assigned a verdict
///
/// Ordered by guess position; immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredGuess {
    letters: [(char, Verdict); WORD_LENGTH],
}

impl ScoredGuess {
    /// Score `guess` against `secret`
    ///
    /// Implements the exact feedback rules, including proper handling of
    /// duplicate letters.
    ///
    /// # Algorithm
    /// 1. Build the secret's letter multiset (letter -> remaining count)
    /// 2. First pass: mark exact position matches Correct and decrement their
    ///    letter's remaining count
    /// 3. Second pass, left to right: upgrade provisional Absent positions to
    ///    Present while the letter's remaining count is positive
    ///
    /// Correct matches must consume the letter budget before Present matches
    /// compete for what remains; a single-pass version misranks guesses that
    /// repeat a letter the secret holds only once.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{ScoredGuess, Verdict, Word};
    ///
    /// let guess = Word::new("alert").unwrap();
    /// let secret = Word::new("apple").unwrap();
    /// let scored = ScoredGuess::score(&guess, &secret);
    ///
    /// // A(correct) L(present) E(present) R(absent) T(absent)
    /// assert_eq!(scored.verdict(0), Verdict::Correct);
    /// assert_eq!(scored.verdict(1), Verdict::Present);
    /// assert_eq!(scored.verdict(4), Verdict::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut remaining = secret.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == secret.chars()[i] {
                verdicts[i] = Verdict::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, while budget remains
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if verdicts[i] == Verdict::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    verdicts[i] = Verdict::Present;
                    *count -= 1;
                }
            }
        }

        let mut letters = [(' ', Verdict::Absent); WORD_LENGTH];
        for i in 0..WORD_LENGTH {
            letters[i] = (guess.chars()[i] as char, verdicts[i]);
        }

        Self { letters }
    }

    /// The guessed letters as a String, in position order
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|(ch, _)| ch).collect()
    }

    /// Letter at a guess position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn letter(&self, position: usize) -> char {
        self.letters[position].0
    }

    /// Verdict at a guess position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn verdict(&self, position: usize) -> Verdict {
        self.letters[position].1
    }

    /// Whether every position is Correct (a winning guess)
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|(_, verdict)| *verdict == Verdict::Correct)
    }

    /// Iterate over `(letter, verdict)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = &(char, Verdict)> + '_ {
        self.letters.iter()
    }

    /// The pairs as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[(char, Verdict)] {
        &self.letters
    }
}

impl fmt::Display for ScoredGuess {
    /// Compact verdict string: `G` correct, `Y` present, `-` absent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, verdict) in &self.letters {
            f.write_str(match verdict {
                Verdict::Correct => "G",
                Verdict::Present => "Y",
                Verdict::Absent => "-",
            })?;
        }
        Ok(())
    }
}
