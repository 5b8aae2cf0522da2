//! Daily Wordle-style game engine
//!
//! The rules engine for a daily word-guessing game: letter-by-letter guess
//! scoring with duplicate-letter handling, cross-guess consistency
//! validation, and a per-session state machine with a date-based win streak.
//! The engine is pure computation over a state value the caller persists;
//! the CLI in this crate is one such caller.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{Puzzle, Word};
//! use wordle_daily::engine::GameState;
//!
//! let puzzle = Puzzle::undated("demo", Word::new("apple").unwrap());
//!
//! let mut state = GameState::default().engage(&puzzle);
//! state.submit_guess("alert", &puzzle).unwrap();
//! state.submit_guess("apple", &puzzle).unwrap();
//!
//! assert!(state.is_won());
//! assert_eq!(state.streak(), 1);
//! ```

// Core domain types
pub mod core;

// Guess validation and game state machine
pub mod engine;

// Word lists and puzzle provider
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
