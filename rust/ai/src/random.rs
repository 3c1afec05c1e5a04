//! Uniform strategy: any rolled face, chosen at random.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::DiceStrategy;
use vegas_engine::dice::DiceValue;
use vegas_engine::game::GameState;

/// Picks uniformly among the distinct faces of the pending roll. Seeded so
/// simulations replay.
#[derive(Debug)]
pub struct RandomAI {
    rng: Mutex<StdRng>,
}

impl RandomAI {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomAI {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceStrategy for RandomAI {
    fn choose_face(&self, state: &GameState) -> Option<DiceValue> {
        let faces = state.current_turn.available_faces();
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        faces.choose(&mut *rng).copied()
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
