#![allow(dead_code)]

use vegas_engine::dice::{money_value, Bill, DiceValue, BANK_INIT_STOCK, DICE_COUNT};
use vegas_engine::game::GameState;
use vegas_engine::random::UniformRandom;

/// Replays a fixed face sequence (cycling) and leaves every shuffle as is,
/// so the bank is dealt from its unshuffled end.
pub struct ScriptedRandom {
    faces: Vec<DiceValue>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: &[u8]) -> Self {
        Self {
            faces: faces(values),
            next: 0,
        }
    }
}

impl UniformRandom for ScriptedRandom {
    fn next_face(&mut self) -> DiceValue {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }

    fn shuffle(&mut self, _bills: &mut [Bill]) {}
}

pub fn faces(values: &[u8]) -> Vec<DiceValue> {
    values
        .iter()
        .map(|&v| DiceValue::from_u8(v).expect("scripted face must be 1..=6"))
        .collect()
}

pub fn assert_bills_conserved(state: &GameState) {
    for entry in &BANK_INIT_STOCK {
        assert_eq!(
            state.count_bill(entry.bill),
            entry.count,
            "bill {} not conserved",
            entry.bill
        );
    }
    let total = money_value(&state.bank)
        + state.casinos.iter().map(|c| c.money()).sum::<u32>()
        + state.players.iter().map(|p| p.money()).sum::<u32>()
        + state.neutral_player.money();
    assert_eq!(total, 2500);
}

pub fn assert_dice_conserved(state: &GameState) {
    for (i, p) in state.players.iter().enumerate() {
        let bets: i32 = state.casinos.iter().map(|c| c.bet_per_player[i]).sum();
        assert_eq!(p.stock_dice + bets, DICE_COUNT, "player {} dice", i);
    }
}
