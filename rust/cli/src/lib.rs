//! # cardplay CLI Library
//!
//! Command-line front end for the cardplay engine: deal games with a chosen
//! shuffler, watch the trickster at work, and measure how well it cheats.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cardplay", "wiezen", "--seed", "7"];
//! let code = cardplay_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `wiezen`: Deal Wiezen (4 players, 4-5-4 cards each)
//! - `consecutive`: Deal four consecutive hands of 13
//! - `bonafide`: Pick game with an honest top dealer
//! - `tricky`: Pick game with the trickster
//! - `simulate`: Histogram of where the trickster deals the Ace of Hearts
//! - `cfg`: Display current configuration settings
//! - `rng`: Verify RNG output for a seed

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
pub mod commands;
pub mod config;
pub mod deal_log;
pub mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{CardplayCli, Commands};
use commands::{
    GameKind, handle_cfg_command, handle_game_command, handle_rng_command,
    handle_simulate_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &[
    "wiezen",
    "consecutive",
    "bonafide",
    "tricky",
    "simulate",
    "cfg",
    "rng",
];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["cardplay", "rng", "--seed", "42"];
/// let code = cardplay_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardplayCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: cardplay <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: cardplay --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Wiezen(opts) => handle_game_command(GameKind::Wiezen, &opts, out, err),
        Commands::Consecutive(opts) => handle_game_command(GameKind::Consecutive, &opts, out, err),
        Commands::Bonafide(opts) => handle_game_command(GameKind::Bonafide, &opts, out, err),
        Commands::Tricky(opts) => handle_game_command(GameKind::Tricky, &opts, out, err),
        Commands::Simulate {
            games,
            seed,
            honest,
        } => handle_simulate_command(games, seed, honest, out),
        Commands::Cfg => {
            // cfg reports its own errors
            return match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(_) => exit_code::ERROR,
            };
        }
        Commands::Rng { seed } => handle_rng_command(seed, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
