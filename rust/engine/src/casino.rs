use serde::{Deserialize, Serialize};

use crate::dice::{money_value, Bill, DiceValue, MAX_PLAYER_COUNT};

/// A payout pool tied to one face value. Holds the bills dealt for the
/// current round and the dice committed to it by each seat and by the
/// neutral pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasinoState {
    /// Position in `GameState::casinos`
    pub index: usize,
    /// Face value paying into this casino (`index + 1`)
    pub face_value: DiceValue,
    /// Bills on offer this round
    pub bills: Vec<Bill>,
    /// Dice committed per seat, indexed by player index
    pub bet_per_player: [i32; MAX_PLAYER_COUNT],
    /// White dice committed
    pub neutral_bet: i32,
}

impl CasinoState {
    pub fn for_face(face_value: DiceValue) -> Self {
        Self {
            index: face_value.casino_index(),
            face_value,
            bills: Vec::new(),
            bet_per_player: [0; MAX_PLAYER_COUNT],
            neutral_bet: 0,
        }
    }

    pub fn money(&self) -> u32 {
        money_value(&self.bills)
    }

    pub fn bet_of(&self, player: usize) -> i32 {
        self.bet_per_player.get(player).copied().unwrap_or(0)
    }

    /// First seat holding the strictly highest bet among the first
    /// `player_count` seats. Later seats with an equal bet do not replace
    /// an earlier maximum.
    pub fn top_bettor(&self, player_count: usize) -> Option<(usize, i32)> {
        let mut best: Option<(usize, i32)> = None;
        for (player, &bet) in self.bet_per_player.iter().take(player_count).enumerate() {
            if best.map_or(true, |(_, top)| bet > top) {
                best = Some((player, bet));
            }
        }
        best
    }

    pub fn clear_bets(&mut self) {
        self.bet_per_player = [0; MAX_PLAYER_COUNT];
        self.neutral_bet = 0;
    }
}
