//! Hangman State
//!
//! Game state for hangman: tracks correct and wrong letter guesses against a
//! secret phrase, renders a masked progress label, and reports win/loss.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_state::core::{GameState, GuessResult};
//!
//! let mut game = GameState::new();
//! assert!(game.start_game("Cat Dog", 10));
//!
//! assert_eq!(game.guess_letter('o'), GuessResult::Success);
//! assert_eq!(game.guess_letter('x'), GuessResult::Failed);
//! assert_eq!(game.label(false), "___/_O_");
//! assert_eq!(game.label(true), "_ _ _ / _ O _ ");
//!
//! assert_eq!(game.guess_solution(Some("cat dog")), GuessResult::Success);
//! assert!(game.is_fully_guessed());
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
