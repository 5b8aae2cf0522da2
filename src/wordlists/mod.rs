//! Word lists for the daily game
//!
//! Provides the embedded word list compiled into the binary, file loading for
//! custom lists, and the [`WordBank`] that hands out puzzles.

mod bank;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use embedded::{WORDS, WORDS_COUNT};
