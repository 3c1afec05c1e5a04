//! Round-end payout of a single casino.
//!
//! Bills are handed out highest first. Each bill goes to the seat holding
//! the strictly highest bet (first seat on ties), or to the neutral pool
//! when the white dice bet is strictly higher still. Bets are not reduced
//! after a win, so the leading bettor keeps collecting until the casino is
//! empty. A casino nobody bet on keeps its bills.

use serde::{Deserialize, Serialize};

use crate::casino::CasinoState;
use crate::dice::Bill;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player(usize),
    Neutral,
}

/// One bill leaving a casino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub casino: usize,
    pub bill: Bill,
    pub winner: Winner,
}

/// Who collects the next bill at `casino`, if anyone bet on it.
pub fn casino_winner(casino: &CasinoState, player_count: usize) -> Option<Winner> {
    let (player, top) = casino.top_bettor(player_count).unwrap_or((0, 0));
    if casino.neutral_bet > top {
        Some(Winner::Neutral)
    } else if top > 0 {
        Some(Winner::Player(player))
    } else {
        None
    }
}

/// Remove the paid bills from `casino` and report where each one went.
/// Crediting the winners is left to the caller.
pub fn distribute_casino(casino: &mut CasinoState, player_count: usize) -> Vec<Payout> {
    casino.bills.sort_unstable_by(|a, b| b.cmp(a));
    let mut paid = Vec::with_capacity(casino.bills.len());
    while !casino.bills.is_empty() {
        let Some(winner) = casino_winner(casino, player_count) else {
            break;
        };
        let bill = casino.bills.remove(0);
        paid.push(Payout {
            casino: casino.index,
            bill,
            winner,
        });
    }
    paid
}
