use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::dice::{DiceValue, CASINO_MIN_MONEY_VALUE, MAX_PLAYER_COUNT};
use crate::errors::GameError;
use crate::game::{GameState, PlayerTurnState};
use crate::payout::{distribute_casino, Payout, Winner};
use crate::random::{SeededRandom, UniformRandom};

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Outcome of committing one face value during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Seat that made the commitment
    pub player: usize,
    /// Face (and casino) the dice went to
    pub face: DiceValue,
    /// Personal dice added to the seat's bet
    pub dice: i32,
    /// White dice added to the neutral bet
    pub white_dice: i32,
    /// Rolled dice showing another face; they stay in stock for a later turn
    pub discarded: usize,
}

/// Drives every state transition of a game. Holds only the random source;
/// the [`GameState`] is owned by the caller and passed in by `&mut`.
///
/// # Examples
///
/// ```
/// use vegas_engine::engine::GameEngine;
///
/// let mut engine = GameEngine::new(Some(12345));
/// let mut state = engine.init_game(2).expect("2 players is a valid table");
///
/// // Play one round with the simplest possible driver: commit the first
/// // pending die every turn.
/// while !state.is_round_over() {
///     let face = state.current_turn.available_faces()[0];
///     engine.allocate_dices(&mut state, face.value()).expect("face is pending");
///     if !state.is_round_over() {
///         engine.advance_to_next_player(&mut state).expect("someone still has dice");
///     }
/// }
/// let payouts = engine.distribute_casino_bills(&mut state);
/// assert!(!payouts.is_empty());
/// ```
#[derive(Debug)]
pub struct GameEngine<R: UniformRandom = SeededRandom> {
    rng: R,
}

impl GameEngine<SeededRandom> {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_random(SeededRandom::new_with_seed(seed.unwrap_or(DEFAULT_SEED)))
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: UniformRandom> GameEngine<R> {
    pub fn with_random(rng: R) -> Self {
        Self { rng }
    }

    pub fn random_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Lay out a new table and deal its first round.
    pub fn init_game(&mut self, player_count: usize) -> Result<GameState, GameError> {
        let mut state = GameState::new(player_count).inspect_err(|e| {
            warn!(player_count, error = %e, "game setup rejected");
        })?;
        self.setup_round(&mut state)?;
        info!(player_count, neutral = state.neutral_player_present, "game initialised");
        Ok(state)
    }

    /// Deal the current round: return leftover casino bills to the bank,
    /// shuffle it, fund every casino to at least $50 in casino order, and
    /// roll the opening seat's dice. Leaves `state` untouched on error.
    pub fn setup_round(&mut self, state: &mut GameState) -> Result<(), GameError> {
        let mut next = state.clone();
        next.collect_round();
        self.rng.shuffle(&mut next.bank);

        for casino in next.casinos.iter_mut() {
            while casino.money() < CASINO_MIN_MONEY_VALUE {
                let Some(bill) = next.bank.pop() else {
                    warn!(casino = casino.index, "bank exhausted while dealing");
                    return Err(GameError::InsufficientBank {
                        casino: casino.index,
                    });
                };
                casino.bills.push(bill);
            }
        }

        let first = next.first_player_index;
        self.start_player_turn(&mut next, first)?;
        *state = next;

        info!(
            round = state.round_number,
            first_player = first,
            bank_left = state.bank.len(),
            "round dealt"
        );
        Ok(())
    }

    pub fn roll_dice(&mut self, count: i32) -> Vec<DiceValue> {
        (0..count.max(0)).map(|_| self.rng.next_face()).collect()
    }

    /// Make `player_index` the active seat and roll its whole stock.
    pub fn start_player_turn(
        &mut self,
        state: &mut GameState,
        player_index: usize,
    ) -> Result<(), GameError> {
        let player = state
            .players
            .get(player_index)
            .ok_or(GameError::InvalidPlayerIndex {
                index: player_index,
                player_count: state.players.len(),
            })?;
        let (dice, white_dice) = (player.stock_dice, player.stock_white_dice);

        state.current_turn = PlayerTurnState {
            active_player_index: player_index,
            pending_dice: self.roll_dice(dice),
            pending_white_dice: self.roll_dice(white_dice),
        };
        debug!(
            player = player_index,
            dice = ?state.current_turn.pending_dice,
            white_dice = ?state.current_turn.pending_white_dice,
            "turn started"
        );
        Ok(())
    }

    /// Commit every pending die showing `face` to that face's casino, then
    /// clear both pending pools. Dice showing other faces are not bet and
    /// stay in the seat's stock. Nothing changes on error.
    pub fn allocate_dices(
        &self,
        state: &mut GameState,
        face: u8,
    ) -> Result<Allocation, GameError> {
        let face = DiceValue::try_from(face).inspect_err(|e| {
            warn!(error = %e, "allocation rejected");
        })?;

        let active = state.current_turn.active_player_index;
        if active >= state.players.len().min(MAX_PLAYER_COUNT) {
            return Err(GameError::InvalidPlayerIndex {
                index: active,
                player_count: state.players.len(),
            });
        }

        let (dice, white_dice) = state.current_turn.count_face(face);
        if dice + white_dice == 0 {
            warn!(player = active, face = face.value(), "no pending die shows this face");
            return Err(GameError::NothingAllocated { face: face.value() });
        }
        let discarded = state.current_turn.pending_count() - dice - white_dice;
        let (dice, white_dice) = (dice as i32, white_dice as i32);

        let casino = &mut state.casinos[face.casino_index()];
        casino.bet_per_player[active] += dice;
        casino.neutral_bet += white_dice;

        let player = &mut state.players[active];
        player.stock_dice -= dice;
        player.stock_white_dice -= white_dice;

        state.current_turn.pending_dice.clear();
        state.current_turn.pending_white_dice.clear();

        debug!(
            player = active,
            face = face.value(),
            dice,
            white_dice,
            discarded,
            "dice allocated"
        );
        Ok(Allocation {
            player: active,
            face,
            dice,
            white_dice,
            discarded,
        })
    }

    /// Hand the turn to the next seat, clockwise from the active one, that
    /// still holds dice, and roll for it. The active seat itself is the last
    /// candidate. Returns the new active seat.
    pub fn advance_to_next_player(&mut self, state: &mut GameState) -> Result<usize, GameError> {
        let count = state.players.len();
        let current = state.current_turn.active_player_index;
        if current >= count {
            return Err(GameError::InvalidPlayerIndex {
                index: current,
                player_count: count,
            });
        }

        let next = (1..=count)
            .map(|step| (current + step) % count)
            .find(|&p| state.players[p].has_dice());
        match next {
            Some(player) => {
                self.start_player_turn(state, player)?;
                Ok(player)
            }
            None => {
                warn!(current, "turn advance requested with every stock empty");
                Err(GameError::NoEligibleNextPlayer)
            }
        }
    }

    /// Pay out every casino and credit the winners. Bets stay in place until
    /// the next round is dealt.
    pub fn distribute_casino_bills(&self, state: &mut GameState) -> Vec<Payout> {
        let player_count = state.players.len().min(MAX_PLAYER_COUNT);
        let mut payouts = Vec::new();

        for casino in state.casinos.iter_mut() {
            for payout in distribute_casino(casino, player_count) {
                match payout.winner {
                    Winner::Player(p) => state.players[p].receive_bill(payout.bill),
                    Winner::Neutral => state.neutral_player.bills.push(payout.bill),
                }
                payouts.push(payout);
            }
        }

        info!(
            round = state.round_number,
            bills_paid = payouts.len(),
            "casinos paid out"
        );
        payouts
    }

    /// Move to the next round: bump the counter, pass the opening seat
    /// clockwise, and deal. Fails once the last round has been played.
    pub fn begin_next_round(&mut self, state: &mut GameState) -> Result<(), GameError> {
        if state.is_game_over() {
            return Err(GameError::GameOver {
                round: state.round_number,
            });
        }
        let count = state.players.len();
        if count == 0 {
            return Err(GameError::InvalidPlayerCount { count });
        }

        let (round, first) = (state.round_number, state.first_player_index);
        state.round_number += 1;
        state.first_player_index = (first + 1) % count;
        if let Err(e) = self.setup_round(state) {
            state.round_number = round;
            state.first_player_index = first;
            return Err(e);
        }
        Ok(())
    }
}
