//! Game configuration
//!
//! Masking symbols and the wrong-guess budget, scoped to a single game.

/// Symbol shown for a letter that has not been guessed yet
pub const DEFAULT_EMPTY_MASK: char = '_';

/// Symbol shown for a word boundary
pub const DEFAULT_DIVIDER: char = '/';

/// Wrong guesses allowed before the game is lost
pub const DEFAULT_MAX_FAIL_GUESSES: u32 = 10;

/// Per-game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub empty_mask: char,
    pub divider: char,
    pub max_fail_guesses: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            empty_mask: DEFAULT_EMPTY_MASK,
            divider: DEFAULT_DIVIDER,
            max_fail_guesses: DEFAULT_MAX_FAIL_GUESSES,
        }
    }
}

impl GameConfig {
    /// Create a config with the default symbols and the given budget
    #[must_use]
    pub const fn with_max_fail_guesses(max_fail_guesses: u32) -> Self {
        Self {
            empty_mask: DEFAULT_EMPTY_MASK,
            divider: DEFAULT_DIVIDER,
            max_fail_guesses: clamp_budget(max_fail_guesses),
        }
    }

    /// Return a copy with the budget raised to at least one
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self {
            max_fail_guesses: clamp_budget(self.max_fail_guesses),
            ..self
        }
    }
}

/// A zero budget would end the game before it starts
#[inline]
pub(crate) const fn clamp_budget(value: u32) -> u32 {
    if value == 0 { 1 } else { value }
}
