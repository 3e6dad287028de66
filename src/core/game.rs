//! Hangman game state
//!
//! Owns the phrase, the guess history and the counters, and applies letter
//! and solution guesses to them.

use super::config::clamp_budget;
use super::phrase::upper_char;
use super::{Cell, GameConfig, GameStatus, GuessResult, Phrase};
use log::{debug, trace};
use std::fmt;

/// State of a single hangman game
///
/// A fresh value has no phrase; call [`GameState::start_game`] before
/// guessing. Starting again resets everything except the mask symbols.
///
/// # Examples
/// ```
/// use hangman_state::core::{GameState, GuessResult};
///
/// let mut game = GameState::new();
/// assert!(game.start_game("Cat Dog", 10));
/// assert_eq!(game.label(false), "___/___");
///
/// assert_eq!(game.guess_letter('c'), GuessResult::Success);
/// assert_eq!(game.label(false), "C__/___");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameState {
    phrase: Phrase,
    guessed_letters: Vec<char>,
    failed_letters: Vec<char>,
    guess_count: u32,
    fail_guess_count: u32,
    config: GameConfig,
}

impl GameState {
    /// Create a game with the default configuration and no phrase
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game with the given configuration and no phrase
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config: config.clamped(),
            ..Self::default()
        }
    }

    /// Start (or restart) a game on `raw_phrase`
    ///
    /// Returns `false` and leaves the current game untouched if the phrase is
    /// empty or whitespace-only. A zero budget is raised to one.
    pub fn start_game(&mut self, raw_phrase: &str, max_fail_guesses: u32) -> bool {
        let phrase = match Phrase::parse(raw_phrase) {
            Ok(phrase) => phrase,
            Err(e) => {
                debug!("Rejected phrase: {e}");
                return false;
            }
        };

        self.config.max_fail_guesses = clamp_budget(max_fail_guesses);
        self.guess_count = 0;
        self.fail_guess_count = 0;
        self.guessed_letters.clear();
        self.failed_letters.clear();
        self.phrase = phrase;

        debug!(
            "Started game: {} cells, {} wrong guesses allowed",
            self.phrase.len(),
            self.config.max_fail_guesses
        );
        true
    }

    /// Start a game with the configured wrong-guess budget
    pub fn start_game_default(&mut self, raw_phrase: &str) -> bool {
        self.start_game(raw_phrase, self.config.max_fail_guesses)
    }

    /// Guess a single letter
    ///
    /// Repeating an earlier guess returns its earlier outcome without
    /// touching any counter. A first-time correct guess adds two to
    /// [`GameState::guess_count`]; a first-time miss adds one to it and one
    /// to [`GameState::fail_guess_count`].
    pub fn guess_letter(&mut self, letter: char) -> GuessResult {
        if self.is_game_over() {
            debug!("Ignoring letter guess: no guesses left");
            return GuessResult::NoMoreGuesses;
        }

        let letter = upper_char(letter);
        if self.guessed_letters.contains(&letter) {
            trace!("Letter {letter:?} already guessed");
            return GuessResult::Success;
        }
        if self.failed_letters.contains(&letter) {
            trace!("Letter {letter:?} already failed");
            return GuessResult::Failed;
        }

        self.guess_count = self.guess_count.saturating_add(1);

        if self.phrase.contains_letter(letter) {
            self.guessed_letters.push(letter);
            self.guess_count = self.guess_count.saturating_add(1);
            let revealed = self.phrase.reveal_letter(letter);
            debug!("Letter {letter:?} found in {revealed} cells");
            return GuessResult::Success;
        }

        self.failed_letters.push(letter);
        self.fail_guess_count = self.fail_guess_count.saturating_add(1);
        debug!(
            "Letter {letter:?} missed ({}/{})",
            self.fail_guess_count, self.config.max_fail_guesses
        );
        GuessResult::Failed
    }

    /// Guess the whole phrase
    ///
    /// The candidate is trimmed and uppercased, then compared to
    /// [`GameState::solution_text`] exactly. Internal whitespace is not
    /// collapsed. `None` counts as a wrong guess.
    pub fn guess_solution(&mut self, candidate: Option<&str>) -> GuessResult {
        if self.is_game_over() {
            debug!("Ignoring solution guess: no guesses left");
            return GuessResult::NoMoreGuesses;
        }

        let matched = candidate.is_some_and(|candidate| {
            let candidate: String = candidate.trim().chars().map(upper_char).collect();
            candidate == self.phrase.text()
        });

        if matched {
            self.guess_count = self.guess_count.saturating_add(1);
            self.phrase.reveal_all();
            debug!("Solution guessed");
            return GuessResult::Success;
        }

        self.fail_guess_count = self.fail_guess_count.saturating_add(1);
        debug!(
            "Solution guess missed ({}/{})",
            self.fail_guess_count, self.config.max_fail_guesses
        );
        GuessResult::Failed
    }

    /// Render the masked progress label
    ///
    /// Guessed cells show their letter, unguessed spaces the divider, and
    /// unguessed letters the empty mask. With `insert_spacing` each symbol is
    /// followed by a space, including the last.
    #[must_use]
    pub fn label(&self, insert_spacing: bool) -> String {
        self.phrase
            .label(self.config.empty_mask, self.config.divider, insert_spacing)
    }

    /// Normalized solution text
    #[inline]
    #[must_use]
    pub fn solution_text(&self) -> &str {
        self.phrase.text()
    }

    /// Correctly guessed letters, in guess order
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Wrongly guessed letters, in guess order
    #[inline]
    #[must_use]
    pub fn failed_letters(&self) -> &[char] {
        &self.failed_letters
    }

    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> u32 {
        self.guess_count
    }

    #[inline]
    #[must_use]
    pub const fn fail_guess_count(&self) -> u32 {
        self.fail_guess_count
    }

    #[inline]
    #[must_use]
    pub const fn max_fail_guesses(&self) -> u32 {
        self.config.max_fail_guesses
    }

    /// Set the wrong-guess budget; zero is raised to one
    pub fn set_max_fail_guesses(&mut self, value: u32) {
        self.config.max_fail_guesses = clamp_budget(value);
    }

    #[inline]
    #[must_use]
    pub const fn empty_mask(&self) -> char {
        self.config.empty_mask
    }

    pub fn set_empty_mask(&mut self, mask: char) {
        self.config.empty_mask = mask;
    }

    #[inline]
    #[must_use]
    pub const fn divider(&self) -> char {
        self.config.divider
    }

    pub fn set_divider(&mut self, divider: char) {
        self.config.divider = divider;
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.phrase.cells()
    }

    /// Wrong guesses left before the game is lost
    #[inline]
    #[must_use]
    pub const fn remaining_fail_guesses(&self) -> u32 {
        self.config
            .max_fail_guesses
            .saturating_sub(self.fail_guess_count)
    }

    /// Every letter of the phrase has been revealed
    #[must_use]
    pub fn is_fully_guessed(&self) -> bool {
        self.phrase.is_fully_revealed()
    }

    /// The wrong-guess budget is spent
    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.fail_guess_count >= self.config.max_fail_guesses
    }

    /// Current status; a spent budget wins over a revealed phrase
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Lost
        } else if self.is_fully_guessed() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(phrase: &str, max_fail_guesses: u32) -> GameState {
        let mut game = GameState::new();
        assert!(game.start_game(phrase, max_fail_guesses));
        game
    }

    #[test]
    fn start_game_normalizes() {
        let game = started("Cat Dog", 10);
        assert_eq!(game.solution_text(), "CAT DOG");
        assert_eq!(game.label(false), "___/___");
        assert_eq!(game.max_fail_guesses(), 10);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn start_game_collapses_double_space() {
        let game = started("ab  cd", 10);
        assert_eq!(game.solution_text(), "AB CD");
        assert_eq!(game.cells().len(), 5);
    }

    #[test]
    fn label_length_matches_phrase() {
        for phrase in ["Cat Dog", "  hello   there ", "a", "x\ty", "Don't stop!"] {
            let game = started(phrase, 10);
            assert_eq!(
                game.label(false).chars().count(),
                game.solution_text().chars().count()
            );
        }
    }

    #[test]
    fn start_game_rejects_blank_without_touching_state() {
        let mut game = started("Cat Dog", 4);
        game.guess_letter('c');
        game.guess_letter('z');

        assert!(!game.start_game("", 10));
        assert!(!game.start_game("   \t", 10));

        assert_eq!(game.solution_text(), "CAT DOG");
        assert_eq!(game.label(false), "C__/___");
        assert_eq!(game.guessed_letters(), &['C']);
        assert_eq!(game.failed_letters(), &['Z']);
        assert_eq!(game.guess_count(), 3);
        assert_eq!(game.fail_guess_count(), 1);
        assert_eq!(game.max_fail_guesses(), 4);
    }

    #[test]
    fn start_game_resets_previous_game() {
        let mut game = started("Cat Dog", 3);
        game.guess_letter('c');
        game.guess_letter('q');

        assert!(game.start_game("owl", 5));
        assert_eq!(game.label(false), "___");
        assert!(game.guessed_letters().is_empty());
        assert!(game.failed_letters().is_empty());
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.fail_guess_count(), 0);
        assert_eq!(game.max_fail_guesses(), 5);
    }

    #[test]
    fn start_game_clamps_budget() {
        let game = started("owl", 0);
        assert_eq!(game.max_fail_guesses(), 1);
    }

    #[test]
    fn start_game_keeps_symbols() {
        let mut game = GameState::new();
        game.set_empty_mask('*');
        game.set_divider('|');
        assert!(game.start_game("ab cd", 10));
        assert_eq!(game.label(false), "**|**");
    }

    #[test]
    fn start_game_default_uses_configured_budget() {
        let mut game = GameState::with_config(GameConfig::with_max_fail_guesses(6));
        assert!(game.start_game_default("owl"));
        assert_eq!(game.max_fail_guesses(), 6);
    }

    #[test]
    fn correct_letter_reveals_cells() {
        let mut game = started("Cat Dog", 10);
        assert_eq!(game.guess_letter('C'), GuessResult::Success);
        assert_eq!(game.label(false), "C__/___");
        assert_eq!(game.label(true), "C _ _ / _ _ _ ");
    }

    #[test]
    fn letter_guess_is_case_insensitive() {
        let mut game = started("banana", 10);
        assert_eq!(game.guess_letter('a'), GuessResult::Success);
        assert_eq!(game.guessed_letters(), &['A']);
        assert_eq!(game.label(false), "_A_A_A");
    }

    #[test]
    fn first_correct_letter_counts_twice() {
        let mut game = started("Cat Dog", 10);
        game.guess_letter('c');
        assert_eq!(game.guess_count(), 2);

        game.guess_letter('z');
        assert_eq!(game.guess_count(), 3);
        assert_eq!(game.fail_guess_count(), 1);

        assert_eq!(game.guess_solution(Some("cat dog")), GuessResult::Success);
        assert_eq!(game.guess_count(), 4);
    }

    #[test]
    fn repeated_correct_letter_is_idempotent() {
        let mut game = started("Cat Dog", 10);
        assert_eq!(game.guess_letter('o'), GuessResult::Success);
        assert_eq!(game.guess_letter('O'), GuessResult::Success);
        assert_eq!(game.guess_count(), 2);
        assert_eq!(game.fail_guess_count(), 0);
        assert_eq!(game.guessed_letters(), &['O']);
    }

    #[test]
    fn repeated_wrong_letter_is_idempotent() {
        let mut game = started("Cat Dog", 10);
        assert_eq!(game.guess_letter('x'), GuessResult::Failed);
        assert_eq!(game.guess_letter('X'), GuessResult::Failed);
        assert_eq!(game.fail_guess_count(), 1);
        assert_eq!(game.guess_count(), 1);
        assert_eq!(game.failed_letters(), &['X']);
    }

    #[test]
    fn letters_keep_guess_order() {
        let mut game = started("Cat Dog", 10);
        for c in ['g', 'z', 'a', 'q', 'c'] {
            game.guess_letter(c);
        }
        assert_eq!(game.guessed_letters(), &['G', 'A', 'C']);
        assert_eq!(game.failed_letters(), &['Z', 'Q']);
    }

    #[test]
    fn whitespace_and_symbols_never_match() {
        let mut game = started("Cat Dog", 10);
        assert_eq!(game.guess_letter(' '), GuessResult::Failed);
        assert_eq!(game.guess_letter('1'), GuessResult::Failed);
        assert_eq!(game.label(false), "___/___");
        assert_eq!(game.fail_guess_count(), 2);
    }

    #[test]
    fn last_miss_ends_game() {
        let mut game = started("Cat Dog", 3);
        game.guess_letter('x');
        game.guess_letter('y');
        assert!(!game.is_game_over());
        assert_eq!(game.remaining_fail_guesses(), 1);

        assert_eq!(game.guess_letter('z'), GuessResult::Failed);
        assert!(game.is_game_over());
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_fail_guesses(), 0);

        assert_eq!(game.guess_letter('c'), GuessResult::NoMoreGuesses);
        assert_eq!(game.guess_letter('x'), GuessResult::NoMoreGuesses);
        assert_eq!(game.guess_solution(Some("cat dog")), GuessResult::NoMoreGuesses);
        assert_eq!(game.fail_guess_count(), 3);
        assert_eq!(game.label(false), "___/___");
    }

    #[test]
    fn solution_guess_reveals_everything() {
        let mut game = started("Cat Dog", 10);
        game.guess_letter('o');
        assert_eq!(
            game.guess_solution(Some("  cAt DoG \n")),
            GuessResult::Success
        );
        assert!(game.is_fully_guessed());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.label(false), "CAT/DOG");
        assert_eq!(game.guessed_letters(), &['O']);
    }

    #[test]
    fn solution_guess_does_not_collapse_whitespace() {
        let mut game = started("ab  cd", 10);
        assert_eq!(game.guess_solution(Some("ab  cd")), GuessResult::Failed);
        assert_eq!(game.guess_solution(Some("ab cd")), GuessResult::Success);
        assert_eq!(game.fail_guess_count(), 1);
    }

    #[test]
    fn wrong_or_missing_solution_counts_as_fail() {
        let mut game = started("Cat Dog", 10);
        assert_eq!(game.guess_solution(Some("cat dig")), GuessResult::Failed);
        assert_eq!(game.guess_solution(None), GuessResult::Failed);
        assert_eq!(game.fail_guess_count(), 2);
        assert_eq!(game.guess_count(), 0);
        assert!(game.failed_letters().is_empty());
    }

    #[test]
    fn letters_win_the_game() {
        let mut game = started("Cat Dog", 10);
        for c in "catdog".chars() {
            assert_eq!(game.guess_letter(c), GuessResult::Success);
        }
        assert!(game.is_fully_guessed());
        assert_eq!(game.to_string(), "CAT/DOG");
        // Nothing blocks idempotent guesses after a win
        assert_eq!(game.guess_letter('c'), GuessResult::Success);
    }

    #[test]
    fn phrase_without_letters_is_already_won() {
        let game = started("42!", 10);
        assert_eq!(game.solution_text(), "");
        assert_eq!(game.label(false), "");
        assert!(game.is_fully_guessed());
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn counters_saturate() {
        let mut game = started("owl", 10);
        game.guess_solution(Some("owl"));
        game.guess_count = u32::MAX;

        assert_eq!(game.guess_solution(Some("owl")), GuessResult::Success);
        assert_eq!(game.guess_count(), u32::MAX);

        game.guess_count = u32::MAX - 1;
        game.set_max_fail_guesses(u32::MAX);
        game.fail_guess_count = u32::MAX - 1;
        assert_eq!(game.guess_letter('z'), GuessResult::Failed);
        assert_eq!(game.guess_count(), u32::MAX);
        assert_eq!(game.fail_guess_count(), u32::MAX);
        assert!(game.is_game_over());
    }

    #[test]
    fn budget_setter_clamps() {
        let mut game = started("owl", 10);
        game.set_max_fail_guesses(0);
        assert_eq!(game.max_fail_guesses(), 1);
        game.guess_letter('z');
        assert!(game.is_game_over());
    }

    #[test]
    fn lowering_budget_ends_running_game() {
        let mut game = started("owl", 10);
        game.guess_letter('x');
        game.guess_letter('y');
        game.set_max_fail_guesses(2);
        assert_eq!(game.guess_letter('o'), GuessResult::NoMoreGuesses);
    }

    #[test]
    fn with_config_clamps() {
        let game = GameState::with_config(GameConfig {
            empty_mask: '?',
            divider: '-',
            max_fail_guesses: 0,
        });
        assert_eq!(game.max_fail_guesses(), 1);
        assert_eq!(game.empty_mask(), '?');
        assert_eq!(game.divider(), '-');
    }
}
