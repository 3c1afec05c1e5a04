//! Text rendering of dice, casinos, payouts and standings for the terminal.
//!
//! Pure functions over engine types; every command prints through them so
//! the output reads the same everywhere.
//!
//! ## Example
//!
//! ```rust
//! use vegas_cli::formatters::format_dice;
//! use vegas_engine::dice::DiceValue;
//!
//! assert_eq!(format_dice(&[DiceValue::One, DiceValue::Six]), "[1 6]");
//! assert_eq!(format_dice(&[]), "[]");
//! ```

use vegas_engine::casino::CasinoState;
use vegas_engine::dice::{Bill, Color, DiceValue};
use vegas_engine::game::{GameState, Standing};
use vegas_engine::payout::{Payout, Winner};

pub fn format_color(color: Color) -> &'static str {
    match color {
        Color::Red => "red",
        Color::Blue => "blue",
        Color::Green => "green",
        Color::Black => "black",
        Color::White => "white",
    }
}

pub fn format_dice(dice: &[DiceValue]) -> String {
    let faces: Vec<String> = dice.iter().map(|d| d.to_string()).collect();
    format!("[{}]", faces.join(" "))
}

/// Bills highest first, e.g. `$90 $50 $10`.
pub fn format_bills(bills: &[Bill]) -> String {
    let mut sorted = bills.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One casino line: face, bills on offer, and every non-zero bet.
pub fn format_casino(casino: &CasinoState, player_count: usize) -> String {
    let mut line = format!(
        "Casino {} (${:>3}): {}",
        casino.face_value,
        casino.money(),
        format_bills(&casino.bills)
    );
    let bets: Vec<String> = (0..player_count)
        .filter(|&p| casino.bet_of(p) > 0)
        .map(|p| format!("p{}={}", p, casino.bet_of(p)))
        .chain((casino.neutral_bet > 0).then(|| format!("white={}", casino.neutral_bet)))
        .collect();
    if !bets.is_empty() {
        line.push_str(&format!(" | bets {}", bets.join(" ")));
    }
    line
}

pub fn format_table(state: &GameState) -> Vec<String> {
    state
        .casinos
        .iter()
        .map(|c| format_casino(c, state.player_count))
        .collect()
}

pub fn format_winner(winner: Winner) -> String {
    match winner {
        Winner::Player(p) => format!("p{}", p),
        Winner::Neutral => "neutral".to_string(),
    }
}

pub fn format_payout(payout: &Payout) -> String {
    format!(
        "casino {}: {} -> {}",
        payout.casino + 1,
        payout.bill,
        format_winner(payout.winner)
    )
}

pub fn format_standing(rank: usize, standing: &Standing) -> String {
    format!(
        "{}. p{} ({}) ${} in {} bills",
        rank,
        standing.player,
        format_color(standing.color),
        standing.money,
        standing.bills
    )
}
