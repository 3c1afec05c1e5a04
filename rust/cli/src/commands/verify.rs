//! Verify command handler module.
//!
//! Plays a batch of seeded games with every seat on [`RandomAI`] and runs
//! the rules checker at every turn boundary: after each round is dealt and
//! after every turn hand-off. Any game that breaks a rule, or that the
//! engine refuses to continue, is reported with its number and seed.
//!
//! Errors are collected using the shared `BatchValidationError` pattern for structured reporting.

use crate::error::{BatchValidationError, CliError};
use crate::session::{play_ai_game, Checks};
use std::io::Write;
use vegas_ai::random::RandomAI;

/// Failing game, identified as `game N (seed S)`.
type VerifyError = BatchValidationError<String>;

/// Handle the verify command.
///
/// Game `i` (zero-based) uses seed `seed + i` for both the engine and the
/// strategy, so a failure can be replayed from the reported seed alone.
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` if every game passes, otherwise an `Err` that maps to exit code `2`.
///
/// # Example
///
/// ```no_run
/// # use std::io;
/// # use vegas_cli::commands::handle_verify_command;
/// let result = handle_verify_command(50, 4, Some(7), &mut io::stdout(), &mut io::stderr());
/// ```
pub fn handle_verify_command(
    games: u32,
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut errors: Vec<VerifyError> = Vec::new();
    let mut boundaries = 0usize;
    let mut turns = 0usize;

    for i in 0..games {
        let game_seed = base_seed.wrapping_add(u64::from(i));
        let ai = RandomAI::with_seed(game_seed);
        match play_ai_game(players, game_seed, &ai, Checks::TurnBoundaries, &mut |_, _| {}) {
            Ok(report) => {
                boundaries += report.boundaries_checked;
                turns += report.turns;
            }
            Err(e) => errors.push(VerifyError {
                item_context: format!("game {} (seed {})", i + 1, game_seed),
                message: e.to_string(),
            }),
        }
    }

    if errors.is_empty() {
        writeln!(
            out,
            "Verify: OK ({} games, {} turns, {} turn boundaries checked)",
            games, turns, boundaries
        )?;
        Ok(())
    } else {
        writeln!(out, "Verify: FAIL ({} games)", games)?;
        writeln!(err)?;
        writeln!(err, "Errors found:")?;
        for error in &errors {
            writeln!(err, "  {}", error)?;
        }
        writeln!(err)?;
        writeln!(
            err,
            "Summary: {} of {} games failed (base seed {})",
            errors.len(),
            games,
            base_seed
        )?;
        Err(CliError::InvalidInput(format!(
            "{} games failed verification",
            errors.len()
        )))
    }
}
