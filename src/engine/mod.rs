//! The rules engine: guess validation and the game state machine
//!
//! Pure and synchronous; every call takes the one state value it operates on
//! and hands it back, leaving storage and per-session locking to the caller.

mod game;
mod validate;

pub use game::{GameState, GameStatus, MAX_GUESSES, Severity, Submission};
pub use validate::{Rejection, validate};
