//! Secret phrase representation
//!
//! A Phrase stores the normalized solution text and one tracking cell per
//! character, plus an index of letter positions so revealing a letter never
//! has to rescan the phrase.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Per-character tracking record
///
/// `is_space` is fixed when the phrase is built. `is_guessed` only ever goes
/// from `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    character: char,
    is_guessed: bool,
    is_space: bool,
}

impl Cell {
    fn new(character: char) -> Self {
        Self {
            character,
            is_guessed: false,
            is_space: character.is_whitespace(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn is_guessed(&self) -> bool {
        self.is_guessed
    }

    #[inline]
    #[must_use]
    pub const fn is_space(&self) -> bool {
        self.is_space
    }

    /// Symbol this cell contributes to a label
    #[inline]
    #[must_use]
    pub const fn symbol(&self, empty_mask: char, divider: char) -> char {
        if self.is_guessed {
            self.character
        } else if self.is_space {
            divider
        } else {
            empty_mask
        }
    }

    #[inline]
    fn reveal(&mut self) {
        self.is_guessed = true;
    }
}

/// Error type for phrases that cannot start a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhraseError {
    #[error("phrase must contain at least one non-whitespace character")]
    Empty,
}

/// Uppercase a single character, keeping it when the uppercase form is not
/// a single character
#[inline]
pub(crate) fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Normalize raw phrase text
///
/// Uppercases, drops everything except `A`-`Z` and whitespace, then replaces
/// each run of two or more whitespace characters with a single space. A lone
/// whitespace character is kept unchanged, and the result is not trimmed.
///
/// # Examples
/// ```
/// use hangman_state::core::normalize;
///
/// assert_eq!(normalize("Don't panic!"), "DONT PANIC");
/// assert_eq!(normalize("ab  cd"), "AB CD");
/// assert_eq!(normalize(" x "), " X ");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut run_start: Option<char> = None;
    let mut run_len = 0usize;

    let kept = raw
        .chars()
        .map(upper_char)
        .filter(|c| c.is_ascii_uppercase() || c.is_whitespace());

    for c in kept {
        if c.is_whitespace() {
            run_start.get_or_insert(c);
            run_len += 1;
            continue;
        }
        flush_whitespace(&mut out, run_start.take(), run_len);
        run_len = 0;
        out.push(c);
    }
    flush_whitespace(&mut out, run_start, run_len);

    out
}

fn flush_whitespace(out: &mut String, run_start: Option<char>, run_len: usize) {
    match (run_start, run_len) {
        (Some(c), 1) => out.push(c),
        (Some(_), _) => out.push(' '),
        (None, _) => {}
    }
}

/// The secret phrase of one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    cells: Vec<Cell>,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

impl Phrase {
    /// Build a phrase from raw text
    ///
    /// # Errors
    /// Returns `PhraseError::Empty` if the text is empty or only whitespace.
    /// Text that normalizes to nothing (e.g. `"123"`) is accepted and yields
    /// a phrase without cells.
    ///
    /// # Examples
    /// ```
    /// use hangman_state::core::{Phrase, PhraseError};
    ///
    /// let phrase = Phrase::parse("Cat Dog").unwrap();
    /// assert_eq!(phrase.text(), "CAT DOG");
    /// assert_eq!(phrase.len(), 7);
    ///
    /// assert_eq!(Phrase::parse("   "), Err(PhraseError::Empty));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, PhraseError> {
        if raw.trim().is_empty() {
            return Err(PhraseError::Empty);
        }

        let text = normalize(raw);
        let cells: Vec<Cell> = text.chars().map(Cell::new).collect();

        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, cell) in cells.iter().enumerate() {
            if !cell.is_space {
                letter_positions.entry(cell.character).or_default().push(i);
            }
        }

        Ok(Self {
            text,
            cells,
            letter_positions,
        })
    }

    /// Canonical solution text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, spaces included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if any letter cell holds `letter`
    #[inline]
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Cell indices holding `letter`
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], Vec::as_slice)
    }

    /// Mark every cell holding `letter` as guessed, returning how many there are
    pub(crate) fn reveal_letter(&mut self, letter: char) -> usize {
        let Some(positions) = self.letter_positions.get(&letter) else {
            return 0;
        };
        for &i in positions {
            self.cells[i].reveal();
        }
        positions.len()
    }

    /// Mark every letter cell as guessed
    pub(crate) fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| !cell.is_space) {
            cell.reveal();
        }
    }

    /// Every letter cell guessed; space cells always count as done
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_space || cell.is_guessed)
    }

    /// Render the masked label
    ///
    /// With `insert_spacing`, every symbol is followed by a space, the last
    /// one included.
    #[must_use]
    pub fn label(&self, empty_mask: char, divider: char, insert_spacing: bool) -> String {
        let capacity = if insert_spacing {
            self.cells.len() * 2
        } else {
            self.cells.len()
        };
        let mut label = String::with_capacity(capacity);

        for cell in &self.cells {
            label.push(cell.symbol(empty_mask, divider));
            if insert_spacing {
                label.push(' ');
            }
        }

        label
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
