use serde::{Deserialize, Serialize};

use crate::dice::{money_value, Bill, Color};

/// One seat at the table: its dice color, the dice still in stock for the
/// current round, and the bills won so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Seat index, always equal to the position in `GameState::players`
    pub index: usize,
    /// Dice color of this seat
    pub color: Color,
    /// Bills won across all rounds
    pub bills: Vec<Bill>,
    /// Personal dice not yet committed this round
    pub stock_dice: i32,
    /// Neutral (white) dice not yet committed this round
    pub stock_white_dice: i32,
}

impl PlayerState {
    pub fn new(index: usize, color: Color, stock_dice: i32, stock_white_dice: i32) -> Self {
        Self {
            index,
            color,
            bills: Vec::new(),
            stock_dice,
            stock_white_dice,
        }
    }

    pub fn money(&self) -> u32 {
        money_value(&self.bills)
    }

    /// A seat keeps taking turns while it holds dice of either kind.
    pub fn has_dice(&self) -> bool {
        self.stock_dice > 0 || self.stock_white_dice > 0
    }

    pub fn receive_bill(&mut self, bill: Bill) {
        self.bills.push(bill);
    }

    pub fn restock(&mut self, stock_dice: i32, stock_white_dice: i32) {
        self.stock_dice = stock_dice;
        self.stock_white_dice = stock_white_dice;
    }
}

/// The non-playing pool credited when the white dice win a casino.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeutralPlayerState {
    pub bills: Vec<Bill>,
}

impl NeutralPlayerState {
    pub fn money(&self) -> u32 {
        money_value(&self.bills)
    }
}
