//! Random source inspection command.
//!
//! The `rng` command shows what the engine's seeded source produces for a
//! seed: a run of die faces and the bank after one shuffle. Two runs with
//! the same seed print the same thing, which makes it a quick check that a
//! reported seed really replays a game.

use crate::error::CliError;
use crate::formatters::{format_bills, format_dice};
use std::io::Write;
use vegas_engine::dice::full_bank;
use vegas_engine::random::{SeededRandom, UniformRandom};

const SAMPLE_FACES: usize = 12;

pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = SeededRandom::new_with_seed(s);

    let faces: Vec<_> = (0..SAMPLE_FACES).map(|_| rng.next_face()).collect();
    let mut bank = full_bank();
    rng.shuffle(&mut bank);

    writeln!(out, "Seed: {}", s)?;
    writeln!(out, "Faces: {}", format_dice(&faces))?;
    writeln!(out, "Bank top: {}", format_bills(&bank[bank.len() - 6..]))?;
    Ok(())
}
