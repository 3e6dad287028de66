//! Hangman - CLI
//!
//! Play hangman interactively or replay a scripted list of guesses.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman_state::{
    commands::{ReplayConfig, replay_guesses, run_play},
    core::{DEFAULT_DIVIDER, DEFAULT_EMPTY_MASK, DEFAULT_MAX_FAIL_GUESSES, GameConfig},
    logging::init_logger,
    output::print_replay_result,
};
use log::info;
use std::io;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman game with masked phrase labels and guess tracking",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Symbol for letters not yet guessed
    #[arg(long, global = true, default_value_t = DEFAULT_EMPTY_MASK)]
    mask: char,

    /// Symbol for spaces between words
    #[arg(long, global = true, default_value_t = DEFAULT_DIVIDER)]
    divider: char,

    /// Wrong guesses allowed before the game is lost (0 is treated as 1)
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_FAIL_GUESSES)]
    max_fails: u32,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, one guess per line
    Play {
        /// The secret phrase
        phrase: String,
    },

    /// Apply a list of guesses to a phrase and show every step
    Replay {
        /// The secret phrase
        phrase: String,

        /// Guesses: single characters are letters, longer tokens or `=text` are solutions
        guesses: Vec<String>,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            empty_mask: self.mask,
            divider: self.divider,
            max_fail_guesses: self.max_fails,
        }
        .clamped()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = cli.game_config();

    match cli.command {
        Commands::Play { phrase } => run_play_command(&phrase, config),
        Commands::Replay { phrase, guesses } => {
            run_replay_command(phrase, &guesses, config, cli.verbose)
        }
    }
}

fn run_play_command(phrase: &str, config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let stats = run_play(phrase, config, stdin.lock(), &mut stdout)?;
    info!(
        "Session over: {} games, {} won, {} lost",
        stats.total_games, stats.games_won, stats.games_lost
    );
    Ok(())
}

fn run_replay_command(
    phrase: String,
    guesses: &[String],
    config: GameConfig,
    verbose: bool,
) -> Result<()> {
    let mut replay = ReplayConfig::from_tokens(phrase, guesses)?;
    replay.game = config;

    let result = replay_guesses(replay)?;
    print_replay_result(&result, verbose);
    Ok(())
}
