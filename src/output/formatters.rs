//! Formatting utilities for terminal output

/// Join letters with single spaces, or a dash when there are none
#[must_use]
pub fn letters_to_string(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }

    let mut result = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(*letter);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Widest the fail meter gets; larger budgets are scaled down to fit
pub const FAIL_METER_WIDTH: u32 = 40;

/// Bar with one slot per allowed wrong guess, filled for each one spent
///
/// Budgets above [`FAIL_METER_WIDTH`] share slots proportionally.
#[must_use]
pub fn fail_meter(fail_guess_count: u32, max_fail_guesses: u32) -> String {
    let width = max_fail_guesses.min(FAIL_METER_WIDTH) as usize;
    create_progress_bar(f64::from(fail_guess_count), f64::from(max_fail_guesses), width)
}
