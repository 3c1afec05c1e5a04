//! Baseline strategy: bid where the committed dice take the lead, and among
//! those prefer the richest casino.

use std::cmp::Reverse;

use crate::DiceStrategy;
use vegas_engine::dice::DiceValue;
use vegas_engine::game::GameState;

/// Deterministic reference opponent.
///
/// For every rolled face it asks whether committing the matching personal
/// dice would leave the seat strictly ahead of every other bettor at that
/// casino, counting the white dice that move with them. Faces that win are
/// ranked by the casino's money; after that, more dice committed is better,
/// then the lower face.
///
/// # Example
///
/// ```rust
/// use vegas_ai::baseline::BaselineAI;
/// use vegas_ai::DiceStrategy;
/// use vegas_engine::engine::GameEngine;
///
/// let ai = BaselineAI::new();
/// let mut engine = GameEngine::new(Some(7));
/// let state = engine.init_game(2).unwrap();
///
/// let face = ai.choose_face(&state).unwrap();
/// assert!(state.current_turn.available_faces().contains(&face));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Whether committing `face` would put the active seat in front at its
    /// casino once the bills are paid.
    fn takes_lead(state: &GameState, face: DiceValue) -> bool {
        let turn = &state.current_turn;
        let me = turn.active_player_index;
        let (dice, white) = turn.count_face(face);
        if dice == 0 {
            return false;
        }

        let casino = state.casino(face);
        let mine = casino.bet_of(me) + dice as i32;
        let neutral = casino.neutral_bet + white as i32;
        // Lower seats keep ties, so they must be beaten outright.
        let beats_others = (0..state.player_count)
            .filter(|&p| p != me)
            .all(|p| {
                let theirs = casino.bet_of(p);
                if p < me { mine > theirs } else { mine >= theirs }
            });
        beats_others && mine >= neutral
    }

    fn score(state: &GameState, face: DiceValue) -> (bool, u32, usize, Reverse<DiceValue>) {
        let leads = Self::takes_lead(state, face);
        let money = if leads { state.casino(face).money() } else { 0 };
        let (dice, white) = state.current_turn.count_face(face);
        (leads, money, dice + white, Reverse(face))
    }
}

impl DiceStrategy for BaselineAI {
    fn choose_face(&self, state: &GameState) -> Option<DiceValue> {
        state
            .current_turn
            .available_faces()
            .into_iter()
            .max_by_key(|&face| Self::score(state, face))
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
