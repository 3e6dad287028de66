//! Guess outcomes and derived game status

use std::fmt;

/// Outcome of a letter or solution guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessResult {
    /// The letter is in the phrase, or the solution matched
    Success,
    /// The letter is absent, or the solution did not match
    Failed,
    /// The wrong-guess budget is spent; nothing was recorded
    NoMoreGuesses,
}

impl GuessResult {
    #[inline]
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
            Self::NoMoreGuesses => write!(f, "no more guesses"),
        }
    }
}

/// Where a game stands
///
/// Derived from the counters on demand; the game itself keeps no status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether further guesses are pointless
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}
