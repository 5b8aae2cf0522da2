//! Terminal output formatting
//!
//! Display utilities for the board, verdicts, and notifications.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_notification, print_outcome};
