//! # Play Command
//!
//! One full game at the terminal. Every seat is played by the chosen
//! strategy, or with `--vs human` seat 0 is yours: each turn shows your
//! roll and asks which face to commit.
//!
//! ## Features
//!
//! - Input validation against the faces actually rolled
//! - Graceful quit with `q` or `quit`; closing stdin mid-game interrupts
//! - Casino table before every round, payouts and money after it
//! - Final standings ranked by money, then bill count

use crate::cli::Vs;
use crate::error::CliError;
use crate::formatters::{format_color, format_dice, format_payout, format_standing, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_face_input};
use std::io::{BufRead, Write};
use vegas_ai::DiceStrategy;
use vegas_engine::dice::DiceValue;
use vegas_engine::engine::GameEngine;
use vegas_engine::game::GameState;

const HUMAN_SEAT: usize = 0;

/// Handle the play command.
///
/// # Examples
///
/// ```ignore
/// use vegas_cli::commands::handle_play_command;
/// use vegas_cli::Vs;
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(Vs::Human, 3, None, "baseline", &mut stdout(), &mut stderr(), &mut input)
///     .unwrap();
/// ```
pub fn handle_play_command(
    vs: Vs,
    players: usize,
    seed: Option<u64>,
    ai_name: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let ai = super::strategy(ai_name)?;
    let seed = seed.unwrap_or_else(rand::random);

    writeln!(
        out,
        "play: vs={} players={} seed={} ai={}",
        vs.as_str(),
        players,
        seed,
        ai.name()
    )?;

    let mut engine = GameEngine::new(Some(seed));
    let mut state = engine.init_game(players)?;

    loop {
        writeln!(out, "Round {}", state.round_number + 1)?;
        for line in format_table(&state) {
            writeln!(out, "  {}", line)?;
        }

        while !state.is_round_over() {
            let Some(face) = choose_face(vs, &state, ai.as_ref(), stdin, out, err)? else {
                writeln!(out, "Game abandoned in round {}", state.round_number + 1)?;
                return Ok(());
            };
            let allocation = engine.allocate_dices(&mut state, face.value())?;
            writeln!(
                out,
                "p{} bets {} dice + {} white on casino {}",
                allocation.player, allocation.dice, allocation.white_dice, allocation.face
            )?;
            if state.is_round_over() {
                break;
            }
            engine.advance_to_next_player(&mut state)?;
        }

        let payouts = engine.distribute_casino_bills(&mut state);
        if payouts.is_empty() {
            writeln!(out, "No casino paid out")?;
        }
        for payout in &payouts {
            writeln!(out, "  {}", format_payout(payout))?;
        }
        let money: Vec<String> = state
            .players
            .iter()
            .map(|p| format!("p{}=${}", p.index, p.money()))
            .collect();
        writeln!(out, "Money: {}", money.join(" "))?;

        if state.is_game_over() {
            break;
        }
        engine.begin_next_round(&mut state)?;
    }

    writeln!(out, "Final standings:")?;
    let standings = state.standings();
    for (rank, standing) in standings.iter().enumerate() {
        writeln!(out, "{}", format_standing(rank + 1, standing))?;
    }
    if let Some(winner) = standings.first() {
        writeln!(out, "Winner: p{}", winner.player)?;
    }
    Ok(())
}

/// Face for the active seat, or `None` when the human quits.
fn choose_face(
    vs: Vs,
    state: &GameState,
    ai: &dyn DiceStrategy,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<DiceValue>, CliError> {
    let turn = &state.current_turn;
    let player = turn.active_player_index;
    let color = state
        .active_player()
        .map(|p| format_color(p.color))
        .unwrap_or("?");
    writeln!(
        out,
        "p{} ({}) rolls {} white {}",
        player,
        color,
        format_dice(&turn.pending_dice),
        format_dice(&turn.pending_white_dice)
    )?;

    if vs == Vs::Ai || player != HUMAN_SEAT {
        return ai
            .choose_face(state)
            .map(Some)
            .ok_or_else(|| CliError::Engine(format!("{} chose no face for p{}", ai.name(), player)));
    }

    let available = turn.available_faces();
    loop {
        write!(out, "Choose a face {} or q: ", format_dice(&available))?;
        out.flush()?;
        let Some(input) = read_stdin_line(stdin) else {
            return Err(CliError::Interrupted("input closed before the game ended".into()));
        };
        match parse_face_input(&input, &available) {
            ParseResult::Face(face) => return Ok(Some(face)),
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(vs: Vs, players: usize, seed: u64, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(
            vs,
            players,
            Some(seed),
            "baseline",
            &mut out,
            &mut err,
            &mut stdin,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_ai_game_runs_four_rounds() {
        let (result, output, errors) = play(Vs::Ai, 3, 42, "");
        assert!(result.is_ok(), "AI game should finish: {errors}");
        assert!(output.starts_with("play: vs=ai players=3 seed=42 ai=BaselineAI\n"));
        for round in 1..=4 {
            assert!(output.contains(&format!("Round {}\n", round)));
        }
        assert_eq!(output.matches("Money: ").count(), 4);
        assert!(output.contains("Final standings:\n1. p"));
        assert!(output.contains("Winner: p"));
    }

    #[test]
    fn test_ai_game_is_reproducible() {
        let (_, first, _) = play(Vs::Ai, 5, 9, "");
        let (_, second, _) = play(Vs::Ai, 5, 9, "");
        assert_eq!(first, second);
    }

    #[test]
    fn test_human_can_quit_at_first_prompt() {
        let (result, output, _) = play(Vs::Human, 2, 1, "q\n");
        assert!(result.is_ok());
        assert!(output.contains("Choose a face ["));
        assert!(output.contains("Game abandoned in round 1"));
        assert!(!output.contains("Final standings"));
    }

    #[test]
    fn test_human_input_is_validated_before_allocation() {
        let (result, output, errors) = play(Vs::Human, 2, 1, "9\nabc\nq\n");
        assert!(result.is_ok());
        assert!(errors.contains("Error: Face must be 1 to 6, got 9"));
        assert!(errors.contains("Error: Unrecognized input: abc"));
        assert_eq!(output.matches("Choose a face").count(), 3);
    }

    #[test]
    fn test_closed_input_interrupts_the_game() {
        let (result, _, _) = play(Vs::Human, 2, 1, "");
        assert!(matches!(result, Err(CliError::Interrupted(_))));
    }

    #[test]
    fn test_unknown_ai_is_rejected_before_dealing() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(Vec::new());
        let result = handle_play_command(
            Vs::Ai,
            2,
            Some(1),
            "oracle",
            &mut out,
            &mut err,
            &mut stdin,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
