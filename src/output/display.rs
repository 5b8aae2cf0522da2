//! Display functions for game state and notifications

use super::formatters::{colorize_scored_guess, scored_guess_to_emoji};
use crate::engine::{GameState, MAX_GUESSES, Severity};
use colored::Colorize;

/// Print the board: every scored guess so far plus remaining turns
pub fn print_board(state: &GameState) {
    println!("\n{}", "─".repeat(40).cyan());

    for (i, scored) in state.guesses().iter().enumerate() {
        println!(
            "  {}. {}   {}",
            (i + 1).to_string().bright_black(),
            colorize_scored_guess(scored),
            scored_guess_to_emoji(scored)
        );
    }

    for i in state.guesses().len()..MAX_GUESSES {
        println!("  {}. {}", (i + 1).to_string().bright_black(), "_ _ _ _ _".bright_black());
    }

    println!("{}", "─".repeat(40).cyan());
}

/// Print the end-of-game banner with the streak
pub fn print_outcome(state: &GameState, secret: &str) {
    if state.is_won() {
        let turns = state.guesses().len();
        println!(
            "\n{}",
            format!(
                "🎉 Solved in {turns} {}!",
                if turns == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        );
    } else {
        println!(
            "\n{} The word was: {}",
            "❌ Out of guesses.".bright_red().bold(),
            secret.to_uppercase().bright_white().bold()
        );
    }

    println!(
        "   Current streak: {}",
        state.streak().to_string().bright_cyan().bold()
    );
}

/// Print a classified notification the way the game surfaces it
pub fn print_notification(severity: Severity, message: &str) {
    match severity {
        Severity::Success => println!("{}", message.green()),
        Severity::Error => println!("{}", message.red()),
        Severity::Info => println!("{}", message.blue()),
    }
}
