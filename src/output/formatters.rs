//! Formatting utilities for terminal output

use crate::core::{ScoredGuess, Verdict};
use colored::Colorize;

/// Format a scored guess as emoji squares
#[must_use]
pub fn scored_guess_to_emoji(scored: &ScoredGuess) -> String {
    scored
        .iter()
        .map(|(_, verdict)| match verdict {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬜',
        })
        .collect()
}

/// Format a scored guess as colored uppercase letters
#[must_use]
pub fn colorize_scored_guess(scored: &ScoredGuess) -> String {
    scored
        .iter()
        .map(|(letter, verdict)| {
            let upper = letter.to_ascii_uppercase().to_string();
            match verdict {
                Verdict::Correct => upper.bright_green().bold().to_string(),
                Verdict::Present => upper.bright_yellow().bold().to_string(),
                Verdict::Absent => upper.bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
