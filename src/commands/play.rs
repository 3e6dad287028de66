//! Interactive play mode
//!
//! Line-based game loop: one guess per line, read from any `BufRead` and
//! reported to any `Write`, so the binary can hand it stdin/stdout.

use super::{CommandError, Guess};
use crate::core::{GameConfig, GameState, GameStatus, GuessResult, PhraseError};
use crate::output::display::{write_game_over, write_guess_outcome, write_progress};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Win/loss tally across games in one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayStatistics {
    pub total_games: usize,
    pub games_won: usize,
    pub games_lost: usize,
}

impl PlayStatistics {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won => self.games_won += 1,
            GameStatus::Lost => self.games_lost += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// A parsed input line
enum Command {
    Quit,
    Help,
    New(String),
    Guess(Guess),
}

fn parse_line(line: &str) -> Option<Command> {
    match line {
        "" => None,
        "quit" | "exit" => Some(Command::Quit),
        "help" | "?" => Some(Command::Help),
        _ => {
            if let Some(phrase) = line.strip_prefix("new")
                && (phrase.is_empty() || phrase.starts_with(char::is_whitespace))
            {
                return Some(Command::New(phrase.to_string()));
            }
            if let Some(solution) = line.strip_prefix('!') {
                return Some(Command::Guess(Guess::Solution(solution.to_string())));
            }
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Command::Guess(Guess::Letter(c))),
                _ => Some(Command::Guess(Guess::Solution(line.to_string()))),
            }
        }
    }
}

fn write_help<W: Write>(out: &mut W) -> Result<(), CommandError> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <letter>        guess a letter")?;
    writeln!(out, "  !<phrase>       guess the whole phrase")?;
    writeln!(out, "  new <phrase>    start over with a new phrase")?;
    writeln!(out, "  quit            exit")?;
    Ok(())
}

/// Run the interactive game loop
///
/// Reads until `quit` or end of input. A game that is neither won nor lost
/// when the session ends is counted in `total_games` only.
///
/// # Errors
///
/// Returns an error if the starting phrase is blank or on an I/O failure.
pub fn run_play<R: BufRead, W: Write>(
    phrase: &str,
    config: GameConfig,
    input: R,
    out: &mut W,
) -> Result<PlayStatistics, CommandError> {
    let mut game = GameState::with_config(config);
    if !game.start_game_default(phrase) {
        return Err(PhraseError::Empty.into());
    }

    let mut stats = PlayStatistics {
        total_games: 1,
        ..PlayStatistics::default()
    };
    // Outcome already tallied for the current game
    let mut recorded = false;

    writeln!(out, "Guess the phrase! Type 'help' for commands.")?;
    write_progress(out, &game)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_line(line.trim()) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => write_help(out)?,
            Command::New(raw) => {
                if game.start_game(&raw, config.max_fail_guesses) {
                    stats.total_games += 1;
                    recorded = false;
                    info!("New game started");
                    writeln!(out, "New game started!")?;
                    write_progress(out, &game)?;
                } else {
                    writeln!(out, "That phrase is empty, keeping the current game.")?;
                }
            }
            Command::Guess(guess) => {
                let result = guess.apply(&mut game);
                debug!("{guess} -> {result}");
                write_guess_outcome(out, &guess, result)?;
                if result != GuessResult::NoMoreGuesses {
                    write_progress(out, &game)?;
                }

                let status = game.status();
                if status.is_finished() && !recorded {
                    stats.record(status);
                    recorded = true;
                    write_game_over(out, &game)?;
                }
            }
        }
    }

    writeln!(out, "Thanks for playing!")?;
    Ok(stats)
}
