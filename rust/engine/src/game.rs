use serde::{Deserialize, Serialize};

use crate::casino::CasinoState;
use crate::dice::{
    all_faces, extra_white_dice_count, full_bank, Bill, Color, DiceValue, CASINO_COUNT,
    DICE_COUNT, MAX_PLAYER_COUNT, MIN_PLAYER_COUNT, PLAYER_PALETTE, ROUND_COUNT,
};
use crate::errors::GameError;
use crate::player::{NeutralPlayerState, PlayerState};

/// Dice rolled by the active seat for the turn in progress.
/// Replaced wholesale whenever a new turn starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTurnState {
    pub active_player_index: usize,
    pub pending_dice: Vec<DiceValue>,
    pub pending_white_dice: Vec<DiceValue>,
}

impl PlayerTurnState {
    /// Pending (personal, white) dice showing `face`.
    pub fn count_face(&self, face: DiceValue) -> (usize, usize) {
        (
            self.pending_dice.iter().filter(|&&d| d == face).count(),
            self.pending_white_dice.iter().filter(|&&d| d == face).count(),
        )
    }

    /// Distinct faces present in either pool, lowest first.
    pub fn available_faces(&self) -> Vec<DiceValue> {
        all_faces()
            .into_iter()
            .filter(|&face| {
                self.pending_dice.contains(&face) || self.pending_white_dice.contains(&face)
            })
            .collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending_dice.len() + self.pending_white_dice.len()
    }
}

/// Final ranking entry for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: usize,
    pub color: Color,
    pub money: u32,
    pub bills: usize,
}

/// Complete state of a game: seats, casinos, bank, neutral pool, and the
/// turn in progress. Owned by the caller and mutated in place by
/// [`crate::engine::GameEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Zero-based round counter (0 to 3)
    pub round_number: i32,
    /// Seat that opens the current round
    pub first_player_index: usize,
    /// Number of seated players (2 to 5)
    pub player_count: usize,
    /// True when the white dice take part (fewer than 5 players)
    pub neutral_player_present: bool,
    pub players: Vec<PlayerState>,
    pub casinos: [CasinoState; CASINO_COUNT],
    pub neutral_player: NeutralPlayerState,
    pub current_turn: PlayerTurnState,
    /// Bills not dealt to any casino nor won by anyone
    pub bank: Vec<Bill>,
}

impl GameState {
    /// Lay out a fresh table: full bank, seated players with full dice
    /// stock, empty casinos. No round is dealt yet.
    pub fn new(player_count: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYER_COUNT..=MAX_PLAYER_COUNT).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount {
                count: player_count,
            });
        }

        let neutral_player_present = player_count < MAX_PLAYER_COUNT;
        let white_dice = extra_white_dice_count(player_count);
        let players = PLAYER_PALETTE
            .iter()
            .take(player_count)
            .enumerate()
            .map(|(index, &color)| PlayerState::new(index, color, DICE_COUNT, white_dice))
            .collect();

        Ok(Self {
            round_number: 0,
            first_player_index: 0,
            player_count,
            neutral_player_present,
            players,
            casinos: all_faces().map(CasinoState::for_face),
            neutral_player: NeutralPlayerState::default(),
            current_turn: PlayerTurnState::default(),
            bank: full_bank(),
        })
    }

    pub fn casino(&self, face: DiceValue) -> &CasinoState {
        &self.casinos[face.casino_index()]
    }

    pub fn active_player(&self) -> Option<&PlayerState> {
        self.players.get(self.current_turn.active_player_index)
    }

    pub fn is_round_over(&self) -> bool {
        self.players.iter().all(|p| p.stock_dice <= 0)
    }

    pub fn is_game_over(&self) -> bool {
        self.round_number + 1 >= ROUND_COUNT
    }

    /// Send every casino bill back to the bank, clear all bets, and hand
    /// each seat its full dice stock for a new round.
    pub(crate) fn collect_round(&mut self) {
        for casino in self.casinos.iter_mut() {
            self.bank.append(&mut casino.bills);
            casino.clear_bets();
        }
        let white_dice = if self.neutral_player_present {
            extra_white_dice_count(self.player_count)
        } else {
            0
        };
        for player in self.players.iter_mut() {
            player.restock(DICE_COUNT, white_dice);
        }
    }

    /// Copies of `bill` held anywhere on the table.
    pub fn count_bill(&self, bill: Bill) -> usize {
        let count = |bills: &[Bill]| bills.iter().filter(|&&b| b == bill).count();
        count(&self.bank)
            + self.casinos.iter().map(|c| count(&c.bills)).sum::<usize>()
            + self.players.iter().map(|p| count(&p.bills)).sum::<usize>()
            + count(&self.neutral_player.bills)
    }

    /// Seats ranked by money, then by number of bills, then by seat index.
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .map(|p| Standing {
                player: p.index,
                color: p.color,
                money: p.money(),
                bills: p.bills.len(),
            })
            .collect();
        standings.sort_by(|a, b| {
            b.money
                .cmp(&a.money)
                .then(b.bills.cmp(&a.bills))
                .then(a.player.cmp(&b.player))
        });
        standings
    }
}
