//! # vegas-engine: Casino Dice Bidding Engine Core
//!
//! A deterministic engine for the casino dice bidding game: players roll
//! dice, commit every die of one face to the matching casino, and each
//! casino pays its bills to the highest bidder when the round ends. Four
//! rounds make a game. Provides the state model, the round and turn
//! lifecycle, payouts, and a validator for the game's invariants, with an
//! injectable random source for reproducible play.
//!
//! ## Core Modules
//!
//! - [`dice`] - Face values, bills, colors, and the fixed stock tables
//! - [`player`] - Seat state and the neutral pool
//! - [`casino`] - Casino bills and bets
//! - [`game`] - The aggregate [`game::GameState`] and the turn in progress
//! - [`random`] - The [`random::UniformRandom`] capability and its ChaCha20 implementation
//! - [`engine`] - Game setup, round dealing, allocation, turn order, payout
//! - [`payout`] - Per-casino distribution of bills
//! - [`rules`] - Invariant checks over a game snapshot
//! - [`logger`] - Round records and JSONL history output
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use vegas_engine::engine::GameEngine;
//! use vegas_engine::rules::validate_game_state;
//!
//! let mut engine = GameEngine::new(Some(42));
//! let mut state = engine.init_game(3).expect("valid player count");
//! assert!(validate_game_state(&state));
//!
//! // Commit the first face the opening player rolled.
//! let face = state.current_turn.pending_dice[0];
//! let allocation = engine
//!     .allocate_dices(&mut state, face.value())
//!     .expect("face is pending");
//! assert!(allocation.dice >= 1);
//!
//! let next = engine
//!     .advance_to_next_player(&mut state)
//!     .expect("other players still hold dice");
//! assert_eq!(next, 1);
//! assert!(validate_game_state(&state));
//! ```
//!
//! ## Deterministic Gameplay
//!
//! The engine draws every face and every shuffle from the random source it
//! was built with, so the same seed replays the same game:
//!
//! ```rust
//! use vegas_engine::engine::GameEngine;
//!
//! let a = GameEngine::new(Some(7)).init_game(4).unwrap();
//! let b = GameEngine::new(Some(7)).init_game(4).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod casino;
pub mod dice;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod payout;
pub mod player;
pub mod random;
pub mod rules;
