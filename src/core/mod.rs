//! Core domain types for hangman
//!
//! This module contains the game state and the value types it is built from.
//! Nothing here performs I/O; every operation is a pure state transition.

mod config;
mod game;
mod guess;
mod phrase;

pub use config::{DEFAULT_DIVIDER, DEFAULT_EMPTY_MASK, DEFAULT_MAX_FAIL_GUESSES, GameConfig};
pub use game::GameState;
pub use guess::{GameStatus, GuessResult};
pub use phrase::{Cell, Phrase, PhraseError, normalize};
