//! Interactive daily game loop
//!
//! Drives the engine from the terminal: selects the active puzzle, binds the
//! stored session state to it, reads guesses, and persists the state back to
//! the session file after every accepted guess.

use crate::core::{Puzzle, Word};
use crate::engine::{GameState, MAX_GUESSES, Severity, Submission};
use crate::output::{print_board, print_notification, print_outcome};
use crate::wordlists::WordBank;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the play command
pub struct PlayConfig {
    /// Session file holding the serialized game state
    pub state_path: Option<PathBuf>,
    /// Play the puzzle of this date instead of today's
    pub date: Option<NaiveDate>,
    /// Force the secret word (testing and demos; skips the dictionary check)
    pub secret: Option<String>,
    /// Play a random undated practice word
    pub random: bool,
}

/// Run the interactive game
///
/// # Errors
///
/// Returns an error if the secret override is not a valid word, the word bank
/// is empty, the session file cannot be read or written, or stdin closes.
pub fn run_play(config: &PlayConfig, bank: &WordBank) -> Result<()> {
    let puzzle = select_puzzle(config, bank)?;
    let check_dictionary = config.secret.is_none();

    let stored = load_state(config.state_path.as_deref())?;
    let mut state = stored.engage(&puzzle);

    println!(
        "\n{}",
        "Guess the word in six tries!".bright_white().bold()
    );
    println!("Commands: 'quit' to exit\n");

    if state.is_complete() {
        print_board(&state);
        print_notification(
            Severity::Info,
            "This puzzle is already finished - come back tomorrow!",
        );
        print_outcome(&state, puzzle.word().text());
        save_state(config.state_path.as_deref(), &state)?;
        return Ok(());
    }

    loop {
        print_board(&state);

        let input = get_user_input(&format!(
            "Guess {}/{MAX_GUESSES}",
            state.guesses().len() + 1
        ))?;
        let guess = input.trim();

        match guess {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 See you tomorrow!\n");
                break;
            }
            _ => {}
        }

        // Dictionary membership is checked before the engine ever sees the
        // guess; an unknown word surfaces like any other rejection.
        if check_dictionary
            && let Err(rejection) = bank.lookup(guess)
        {
            print_notification(rejection.severity(), &rejection.to_string());
            continue;
        }

        match state.submit_guess(guess, &puzzle) {
            Ok(Submission::Accepted(_)) => {
                save_state(config.state_path.as_deref(), &state)?;

                if state.is_complete() {
                    print_board(&state);
                    print_outcome(&state, puzzle.word().text());
                    break;
                }
            }
            Ok(outcome @ Submission::AlreadyFinished) => {
                print_notification(outcome.severity(), "The game is already complete");
                break;
            }
            Err(rejection) => {
                print_notification(rejection.severity(), &rejection.to_string());
            }
        }
    }

    Ok(())
}

/// Pick the puzzle the session plays against
fn select_puzzle(config: &PlayConfig, bank: &WordBank) -> Result<Puzzle> {
    if let Some(secret) = &config.secret {
        let word =
            Word::new(secret.as_str()).with_context(|| format!("invalid secret word \"{secret}\""))?;
        return Ok(match config.date {
            Some(date) => Puzzle::new(format!("{date}#forced"), word, date),
            None => Puzzle::undated("forced", word),
        });
    }

    if config.random {
        return bank.random_puzzle().context("the word bank is empty");
    }

    let date = config.date.unwrap_or_else(|| Local::now().date_naive());
    bank.daily(date).context("the word bank is empty")
}

/// Load the stored session state, or start blank
fn load_state(path: Option<&Path>) -> Result<GameState> {
    let Some(path) = path else {
        return Ok(GameState::default());
    };

    if !path.exists() {
        debug!(path = %path.display(), "no session file yet, starting blank");
        return Ok(GameState::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read session file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("session file {} is not valid game state", path.display()))
}

/// Persist the session state, if a session file is in use
fn save_state(path: Option<&Path>, state: &GameState) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write session file {}", path.display()))?;
    debug!(path = %path.display(), "session saved");
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
