//! Terminal output formatting
//!
//! Display utilities for game progress and replay results.

pub mod display;
pub mod formatters;

pub use display::{print_replay_result, write_game_over, write_guess_outcome, write_progress};
