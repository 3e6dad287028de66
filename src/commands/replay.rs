//! Scripted replay command
//!
//! Applies a fixed sequence of guesses to a phrase and records every step.

use super::CommandError;
use crate::core::{GameConfig, GameState, GameStatus, GuessResult, PhraseError};
use log::info;
use std::fmt;
use std::str::FromStr;

/// A single scripted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Solution(String),
}

impl Guess {
    /// Apply this guess to a game
    pub fn apply(&self, game: &mut GameState) -> GuessResult {
        match self {
            Self::Letter(c) => game.guess_letter(*c),
            Self::Solution(text) => game.guess_solution(Some(text.as_str())),
        }
    }
}

impl FromStr for Guess {
    type Err = CommandError;

    /// One character is a letter guess; `=text` or anything longer is a
    /// solution guess
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(solution) = s.strip_prefix('=') {
            return Ok(Self::Solution(solution.to_string()));
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(CommandError::InvalidGuess(s.to_string())),
            (Some(c), None) => Ok(Self::Letter(c)),
            (Some(_), Some(_)) => Ok(Self::Solution(s.to_string())),
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{}", c.to_uppercase()),
            Self::Solution(text) => write!(f, "\"{}\"", text.trim().to_uppercase()),
        }
    }
}

/// Configuration for a replay
pub struct ReplayConfig {
    pub phrase: String,
    pub guesses: Vec<Guess>,
    pub game: GameConfig,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(phrase: String, guesses: Vec<Guess>) -> Self {
        Self {
            phrase,
            guesses,
            game: GameConfig::default(),
        }
    }

    /// Parse guess tokens as given on the command line
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidGuess` for an empty token.
    pub fn from_tokens<S: AsRef<str>>(phrase: String, tokens: &[S]) -> Result<Self, CommandError> {
        let guesses = tokens
            .iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<Guess>, _>>()?;
        Ok(Self::new(phrase, guesses))
    }
}

/// A single step of a replay
pub struct ReplayStep {
    pub guess: Guess,
    pub result: GuessResult,
    pub label: String,
    pub fail_guess_count: u32,
}

/// Result of a replay
pub struct ReplayResult {
    pub solution: String,
    pub steps: Vec<ReplayStep>,
    pub status: GameStatus,
    pub label: String,
    pub guess_count: u32,
    pub fail_guess_count: u32,
    pub max_fail_guesses: u32,
    pub guessed_letters: Vec<char>,
    pub failed_letters: Vec<char>,
    /// Guesses left unplayed because the game had already finished
    pub unplayed: usize,
}

/// Replay a scripted sequence of guesses
///
/// Play stops as soon as the game is won or lost.
///
/// # Errors
///
/// Returns an error if the phrase is empty or whitespace-only.
pub fn replay_guesses(config: ReplayConfig) -> Result<ReplayResult, CommandError> {
    let mut game = GameState::with_config(config.game);
    if !game.start_game_default(&config.phrase) {
        return Err(PhraseError::Empty.into());
    }

    let total = config.guesses.len();
    let mut steps: Vec<ReplayStep> = Vec::with_capacity(total);

    for guess in config.guesses {
        if game.status().is_finished() {
            break;
        }

        let result = guess.apply(&mut game);
        steps.push(ReplayStep {
            guess,
            result,
            label: game.label(false),
            fail_guess_count: game.fail_guess_count(),
        });
    }

    let status = game.status();
    info!(
        "Replay finished: {status} after {} of {total} guesses",
        steps.len()
    );

    Ok(ReplayResult {
        solution: game.solution_text().to_string(),
        unplayed: total - steps.len(),
        steps,
        status,
        label: game.label(false),
        guess_count: game.guess_count(),
        fail_guess_count: game.fail_guess_count(),
        max_fail_guesses: game.max_fail_guesses(),
        guessed_letters: game.guessed_letters().to_vec(),
        failed_letters: game.failed_letters().to_vec(),
    })
}
