//! Command implementations

pub mod play;
pub mod replay;

use crate::core::PhraseError;
use thiserror::Error;

pub use play::{PlayStatistics, run_play};
pub use replay::{Guess, ReplayConfig, ReplayResult, ReplayStep, replay_guesses};

/// Error type for command failures
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid phrase: {0}")]
    InvalidPhrase(#[from] PhraseError),
    #[error("invalid guess: {0:?}")]
    InvalidGuess(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
