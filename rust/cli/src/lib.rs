//! # Vegas CLI Library
//!
//! Command-line front end for the casino dice bidding engine: play a game
//! at the terminal, simulate batches of AI games, verify the rules hold
//! over many seeded games, and inspect a dealt table.
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
//! let args = vec!["vegas", "play", "--vs", "ai", "--players", "3"];
//! let code = vegas_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game against AI seats, or take seat 0 yourself
//! - `sim`: Play many AI-only games and optionally write round records
//! - `verify`: Check every rule at each turn boundary over seeded games
//! - `deal`: Deal the first round for inspection
//! - `rng`: Show the dice and bank shuffle a seed produces
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{Commands, VegasCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_rng_command,
    handle_sim_command, handle_verify_command,
};

pub use cli::Vs;
pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["play", "sim", "verify", "deal", "rng", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// Settings missing from the command line are taken from the environment,
/// then from the file named by `VEGAS_CONFIG`, then from the defaults.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input ends mid-game
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["vegas", "deal", "--players", "3", "--seed", "42"];
/// let code = vegas_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match VegasCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Casino dice bidding CLI");
            write_or_exit!(err, "Usage: vegas <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: vegas --help");
            return exit_code::ERROR;
        }
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Rng { seed } => handle_rng_command(seed, out),
        cmd => {
            let resolved = match config::load_with_sources() {
                Ok(r) => r,
                Err(e) => {
                    write_or_exit!(err, "Error: Invalid configuration: {}", e);
                    return exit_code::ERROR;
                }
            };
            dispatch_configured(cmd, &resolved.config, out, err)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            write_or_exit!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Run a command whose settings may come from the configuration.
fn dispatch_configured(
    cmd: Commands,
    cfg: &config::Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let seats = |flag: Option<u8>| usize::from(flag.unwrap_or(cfg.players));
    match cmd {
        Commands::Play {
            vs,
            players,
            seed,
            ai,
        } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(
                vs,
                seats(players),
                seed.or(cfg.seed),
                ai.as_deref().unwrap_or(cfg.ai.as_str()),
                out,
                err,
                &mut stdin_lock,
            )
        }
        Commands::Sim {
            games,
            players,
            seed,
            ai,
            output,
        } => handle_sim_command(
            games.unwrap_or(cfg.games),
            seats(players),
            seed.or(cfg.seed),
            ai.as_deref().unwrap_or(cfg.ai.as_str()),
            output,
            out,
            err,
        ),
        Commands::Verify {
            games,
            players,
            seed,
        } => handle_verify_command(
            games.unwrap_or(cfg.games),
            seats(players),
            seed.or(cfg.seed),
            out,
            err,
        ),
        Commands::Deal { players, seed } => {
            handle_deal_command(seats(players), seed.or(cfg.seed), out)
        }
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Rng { seed } => handle_rng_command(seed, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<VegasCli, clap::Error> {
        VegasCli::try_parse_from(std::iter::once("vegas").chain(args.iter().copied()))
    }

    #[test]
    fn test_play_flags_parse() {
        let cli = parse(&["play", "--vs", "human", "--players", "4", "--seed", "9"]).unwrap();
        match cli.cmd {
            Commands::Play {
                vs, players, seed, ai,
            } => {
                assert_eq!(vs, Vs::Human);
                assert_eq!(players, Some(4));
                assert_eq!(seed, Some(9));
                assert_eq!(ai, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = parse(&["sim", "--games", "3", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.cmd, Commands::Sim { games: Some(3), .. }));
    }

    #[test]
    fn test_player_count_is_range_checked() {
        assert!(parse(&["deal", "--players", "1"]).is_err());
        assert!(parse(&["deal", "--players", "6"]).is_err());
        assert!(parse(&["deal", "--players", "5"]).is_ok());
    }

    #[test]
    fn test_zero_games_rejected_by_parser() {
        assert!(parse(&["sim", "--games", "0"]).is_err());
        assert!(parse(&["verify", "--games", "0"]).is_err());
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["vegas", "roulette"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        for c in COMMANDS {
            assert!(stderr.contains(&format!("  {}", c)));
        }
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["vegas", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("Usage"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_rng_dispatch_with_seed() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(run(["vegas", "rng", "--seed", "42"], &mut out, &mut err), 0);
        assert!(String::from_utf8(out).unwrap().contains("Seed: 42"));
    }
}
