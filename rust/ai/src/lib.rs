//! # vegas-ai: Face-Selection Strategies
//!
//! Computer players for the casino dice game. A strategy looks at the
//! active seat's pending roll and picks which face to commit; the caller
//! then hands that face to
//! [`GameEngine::allocate_dices`](vegas_engine::engine::GameEngine::allocate_dices).
//!
//! ## Core Components
//!
//! - [`DiceStrategy`] - Trait every strategy implements
//! - [`baseline`] - Bids where a win is in reach and the casino pays most
//! - [`greedy`] - Commits as many dice as possible
//! - [`random`] - Picks uniformly among the rolled faces
//! - [`create_ai`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use vegas_ai::create_ai;
//! use vegas_engine::engine::GameEngine;
//!
//! let ai = create_ai("baseline").expect("known strategy");
//!
//! let mut engine = GameEngine::new(Some(42));
//! let mut state = engine.init_game(3).expect("valid table");
//!
//! let face = ai.choose_face(&state).expect("opening seat has dice");
//! engine
//!     .allocate_dices(&mut state, face.value())
//!     .expect("strategy picks a rolled face");
//! ```

use vegas_engine::dice::DiceValue;
use vegas_engine::game::GameState;

pub mod baseline;
pub mod greedy;
pub mod random;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: [&str; 3] = ["baseline", "greedy", "random"];

/// A computer player's policy for the allocation step of a turn.
///
/// # Example Implementation
///
/// ```rust
/// use vegas_ai::DiceStrategy;
/// use vegas_engine::dice::DiceValue;
/// use vegas_engine::game::GameState;
///
/// struct LowestFace;
///
/// impl DiceStrategy for LowestFace {
///     fn choose_face(&self, state: &GameState) -> Option<DiceValue> {
///         state.current_turn.available_faces().first().copied()
///     }
///
///     fn name(&self) -> &str {
///         "LowestFace"
///     }
/// }
/// ```
pub trait DiceStrategy: Send + Sync {
    /// Pick a face shown by at least one of the active seat's pending dice.
    /// Returns `None` only when nothing is pending.
    fn choose_face(&self, state: &GameState) -> Option<DiceValue>;

    fn name(&self) -> &str;
}

/// Build a strategy from its name, or `None` for an unknown name.
///
/// ```rust
/// use vegas_ai::create_ai;
///
/// assert_eq!(create_ai("greedy").unwrap().name(), "GreedyAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(name: &str) -> Option<Box<dyn DiceStrategy>> {
    match name {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "greedy" => Some(Box::new(greedy::GreedyAI)),
        "random" => Some(Box::new(random::RandomAI::new())),
        _ => None,
    }
}
