//! Greedy strategy: empty the cup as fast as possible.

use std::cmp::Reverse;

use crate::DiceStrategy;
use vegas_engine::dice::DiceValue;
use vegas_engine::game::GameState;

/// Commits the face with the most matching dice, personal and white
/// together. Lower face wins ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAI;

impl DiceStrategy for GreedyAI {
    fn choose_face(&self, state: &GameState) -> Option<DiceValue> {
        let turn = &state.current_turn;
        turn.available_faces().into_iter().max_by_key(|&face| {
            let (dice, white) = turn.count_face(face);
            (dice + white, Reverse(face))
        })
    }

    fn name(&self) -> &str {
        "GreedyAI"
    }
}
