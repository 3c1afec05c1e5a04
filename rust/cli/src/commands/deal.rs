//! Deal command handler.
//!
//! Sets up a game and shows the first round as dealt: every casino's bills
//! and the opening seat's roll. Seeded runs are reproducible.

use crate::error::CliError;
use crate::formatters::{format_color, format_dice, format_table};
use std::io::Write;
use vegas_engine::engine::GameEngine;

pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut engine = GameEngine::new(Some(seed));
    let state = engine.init_game(players)?;

    writeln!(out, "deal: players={} seed={}", players, seed)?;
    for line in format_table(&state) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "Bank: {} bills left", state.bank.len())?;

    let turn = &state.current_turn;
    if let Some(player) = state.active_player() {
        writeln!(
            out,
            "p{} ({}) rolls {} white {}",
            player.index,
            format_color(player.color),
            format_dice(&turn.pending_dice),
            format_dice(&turn.pending_white_dice)
        )?;
    }
    Ok(())
}
