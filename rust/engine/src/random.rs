use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::dice::{all_faces, Bill, DiceValue, CASINO_COUNT};

/// Source of randomness consumed by the engine. Injected at construction so
/// tests can substitute scripted dice.
pub trait UniformRandom {
    /// A face drawn uniformly from 1 to 6.
    fn next_face(&mut self) -> DiceValue;

    /// Reorder `bills` so every permutation is equally likely.
    fn shuffle(&mut self, bills: &mut [Bill]);
}

/// ChaCha20-backed source. The same seed replays the same game.
///
/// # Examples
///
/// ```
/// use vegas_engine::random::{SeededRandom, UniformRandom};
///
/// let mut a = SeededRandom::new_with_seed(42);
/// let mut b = SeededRandom::new_with_seed(42);
/// let faces_a: Vec<_> = (0..8).map(|_| a.next_face()).collect();
/// let faces_b: Vec<_> = (0..8).map(|_| b.next_face()).collect();
/// assert_eq!(faces_a, faces_b);
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UniformRandom for SeededRandom {
    fn next_face(&mut self) -> DiceValue {
        all_faces()[self.rng.random_range(0..CASINO_COUNT)]
    }

    fn shuffle(&mut self, bills: &mut [Bill]) {
        bills.shuffle(&mut self.rng);
    }
}
