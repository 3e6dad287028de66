//! Display functions for game progress and command results

use super::formatters::{fail_meter, letters_to_string};
use crate::commands::{Guess, ReplayResult};
use crate::core::{GameState, GameStatus, GuessResult};
use colored::Colorize;
use std::io::{self, Write};

/// Write the spaced label, the fail meter and both letter sets
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_progress<W: Write>(out: &mut W, game: &GameState) -> io::Result<()> {
    writeln!(out, "\n  {}", game.label(true).bright_white().bold())?;
    writeln!(
        out,
        "  Misses: [{}] {}/{}",
        fail_meter(game.fail_guess_count(), game.max_fail_guesses()).red(),
        game.fail_guess_count(),
        game.max_fail_guesses()
    )?;
    writeln!(
        out,
        "  Found:  {}",
        letters_to_string(game.guessed_letters()).green()
    )?;
    writeln!(
        out,
        "  Wrong:  {}\n",
        letters_to_string(game.failed_letters()).red()
    )
}

/// Write a one-line report of a single guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_guess_outcome<W: Write>(
    out: &mut W,
    guess: &Guess,
    result: GuessResult,
) -> io::Result<()> {
    let outcome = match result {
        GuessResult::Success => result.to_string().green().bold(),
        GuessResult::Failed => result.to_string().red().bold(),
        GuessResult::NoMoreGuesses => result.to_string().yellow().bold(),
    };
    writeln!(out, "{guess}: {outcome}")
}

/// Write the win or loss banner
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_game_over<W: Write>(out: &mut W, game: &GameState) -> io::Result<()> {
    match game.status() {
        GameStatus::Won => {
            writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
            writeln!(
                out,
                "{}",
                format!(
                    "Solved with {} of {} misses used!",
                    game.fail_guess_count(),
                    game.max_fail_guesses()
                )
                .bright_green()
                .bold()
            )?;
            writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
        }
        GameStatus::Lost => {
            writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
            writeln!(out, "{}", "Out of guesses!".red().bold())?;
            writeln!(
                out,
                "The phrase was: {}",
                game.solution_text().bright_yellow().bold()
            )?;
            writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
        }
        GameStatus::InProgress => return Ok(()),
    }
    writeln!(out, "Type 'new <phrase>' to play again or 'quit' to exit.")
}

/// Print the result of a replay
pub fn print_replay_result(result: &ReplayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Phrase: {} ({} cells)",
        result.label.bright_yellow().bold(),
        result.label.chars().count()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let outcome = match step.result {
            GuessResult::Success => step.result.to_string().green(),
            GuessResult::Failed => step.result.to_string().red(),
            GuessResult::NoMoreGuesses => step.result.to_string().yellow(),
        };
        println!("\nTurn {}: {} {}", i + 1, step.guess, outcome);

        if verbose {
            println!("  Label:  {}", step.label);
            println!(
                "  Misses: [{}] {}",
                fail_meter(step.fail_guess_count, result.max_fail_guesses).red(),
                step.fail_guess_count
            );
        }
    }

    println!();
    println!("Found:   {}", letters_to_string(&result.guessed_letters));
    println!("Wrong:   {}", letters_to_string(&result.failed_letters));
    println!("Guesses: {}", result.guess_count);

    if result.unplayed > 0 {
        println!(
            "{}",
            format!("({} guesses not played)", result.unplayed).bright_black()
        );
    }

    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved: {}", result.solution).green().bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("❌ Lost, the phrase was {}", result.solution)
                .red()
                .bold()
        ),
        GameStatus::InProgress => println!(
            "{}",
            format!(
                "⏳ Unsolved, {} of {} misses used",
                result.fail_guess_count, result.max_fail_guesses
            )
            .yellow()
            .bold()
        ),
    }
}
