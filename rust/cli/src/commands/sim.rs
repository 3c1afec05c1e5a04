//! Simulation command handler.
//!
//! Plays a batch of AI-only games, one seed per game (`seed + i`), checking
//! the rules at every turn boundary, and reports how often each seat won
//! and how much it took home on average. With `--output`, every finished
//! round is appended to a JSONL file as a [`RoundRecord`].
//!
//! # Examples
//!
//! ```no_run
//! use vegas_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_sim_command(100, 4, Some(42), "baseline", Some("data/rounds.jsonl".into()), &mut out, &mut err)
//!     .unwrap();
//! ```

use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::session::{play_ai_game, Checks};
use crate::ui;
use std::io::Write;
use std::path::PathBuf;
use vegas_engine::game::GameState;
use vegas_engine::logger::{RoundLogger, RoundRecord};
use vegas_engine::payout::Payout;

#[derive(Debug, Default)]
struct Tally {
    wins: Vec<u32>,
    money: Vec<u64>,
    neutral_money: u64,
    turns: usize,
}

pub fn handle_sim_command(
    games: u32,
    players: usize,
    seed: Option<u64>,
    ai_name: &str,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let ai = super::strategy(ai_name)?;
    let base_seed = seed.unwrap_or_else(rand::random);

    let mut logger = match output.map(PathBuf::from) {
        Some(path) => {
            if let Err(e) = ensure_parent_dir(&path) {
                ui::write_error(err, &e)?;
                return Err(CliError::Io(std::io::Error::other(e)));
            }
            match RoundLogger::create(&path) {
                Ok(logger) => Some(logger),
                Err(e) => {
                    ui::write_error(err, &format!("Failed to open {}: {}", path.display(), e))?;
                    return Err(CliError::Io(e));
                }
            }
        }
        None => None,
    };

    writeln!(
        out,
        "sim: games={} players={} seed={} ai={}",
        games,
        players,
        base_seed,
        ai.name()
    )?;

    let mut tally = Tally {
        wins: vec![0; players],
        money: vec![0; players],
        ..Tally::default()
    };

    for i in 0..games {
        let game_seed = base_seed.wrapping_add(u64::from(i));
        let mut records = Vec::new();
        let report = play_ai_game(
            players,
            game_seed,
            ai.as_ref(),
            Checks::TurnBoundaries,
            &mut |state: &GameState, payouts: Vec<Payout>| {
                records.push(RoundRecord::from_state("", Some(game_seed), state, payouts));
            },
        )
        .map_err(|e| {
            let msg = format!("game {} (seed {}): {}", i + 1, game_seed, e);
            let _ = ui::write_error(err, &msg);
            CliError::Engine(msg)
        })?;

        if let Some(logger) = logger.as_mut() {
            let game_id = logger.next_id();
            for mut record in records {
                record.game_id = game_id.clone();
                record.meta = Some(serde_json::json!({ "ai": ai.name() }));
                logger.write(&record)?;
            }
        }

        if let Some(winner) = report.state.standings().first() {
            tally.wins[winner.player] += 1;
        }
        for p in &report.state.players {
            tally.money[p.index] += u64::from(p.money());
        }
        tally.neutral_money += u64::from(report.state.neutral_player.money());
        tally.turns += report.turns;
    }

    write_summary(games, &tally, out)
}

fn write_summary(games: u32, tally: &Tally, out: &mut dyn Write) -> Result<(), CliError> {
    let n = f64::from(games);
    writeln!(out, "Simulated: {} games ({} turns)", games, tally.turns)?;
    for (seat, (wins, money)) in tally.wins.iter().zip(&tally.money).enumerate() {
        writeln!(
            out,
            "p{}: wins={} avg_money={:.1}",
            seat,
            wins,
            *money as f64 / n
        )?;
    }
    writeln!(out, "neutral: avg_money={:.1}", tally.neutral_money as f64 / n)?;
    Ok(())
}
