//! Command implementations

pub mod play;
pub mod score;

pub use play::{PlayConfig, run_play};
pub use score::score_pair;
