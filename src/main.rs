//! Daily word game - CLI
//!
//! Play the daily puzzle in the terminal, or score a guess against a secret.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordle_daily::{
    commands::{PlayConfig, run_play, score_pair},
    output::formatters::{colorize_scored_guess, scored_guess_to_emoji},
    wordlists::{WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily Wordle-style word game",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the daily puzzle (default)
    Play {
        /// Session file to load and save game state (JSON)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Play the puzzle of this date (YYYY-MM-DD) instead of today's
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Force the secret word (testing and demos)
        #[arg(long)]
        secret: Option<String>,

        /// Play a random practice word instead of the daily puzzle
        #[arg(short, long)]
        random: bool,
    },

    /// Score a single guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

/// Load the word bank based on the -w flag
fn load_bank(wordlist_mode: &str) -> Result<WordBank> {
    match wordlist_mode {
        "embedded" => Ok(WordBank::embedded()),
        path => {
            let words = load_from_file(path)?;
            Ok(WordBank::new(words))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let bank = load_bank(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        state: None,
        date: None,
        secret: None,
        random: false,
    });

    match command {
        Commands::Play {
            state,
            date,
            secret,
            random,
        } => {
            let config = PlayConfig {
                state_path: state,
                date,
                secret,
                random,
            };
            run_play(&config, &bank)
        }
        Commands::Score { secret, guess } => {
            let scored = score_pair(&guess, &secret)?;
            println!(
                "{}   {}",
                colorize_scored_guess(&scored),
                scored_guess_to_emoji(&scored)
            );
            Ok(())
        }
    }
}
