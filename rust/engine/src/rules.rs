use std::collections::HashSet;

use thiserror::Error;

use crate::dice::{
    extra_white_dice_count, Bill, Color, BANK_INIT_STOCK, CASINO_MIN_MONEY_VALUE,
    DICE_COUNT, MAX_PLAYER_COUNT, MIN_PLAYER_COUNT, NEUTRAL_COLOR, ROUND_COUNT,
};
use crate::game::GameState;

/// First consistency rule a [`GameState`] breaks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("player count {count} is outside 2 to 5")]
    PlayerCountOutOfRange { count: usize },
    #[error("{actual} player entries for a player count of {expected}")]
    PlayerListLength { expected: usize, actual: usize },
    #[error("neutral pool presence {present} does not match player count {player_count}")]
    NeutralPresence { present: bool, player_count: usize },
    #[error("player {player} accounts for {total} dice instead of 8")]
    DiceNotConserved { player: usize, total: i32 },
    #[error("white dice total {actual}, expected {expected}")]
    WhiteDiceNotConserved { expected: i32, actual: i32 },
    #[error("{actual} bills of {bill} on the table, expected {expected}")]
    BillNotConserved {
        bill: Bill,
        expected: usize,
        actual: usize,
    },
    #[error("player at position {position} carries index {index}")]
    PlayerIndexMismatch { position: usize, index: usize },
    #[error("casino at position {position} carries index {index}")]
    CasinoIndexMismatch { position: usize, index: usize },
    #[error("casino {casino} pays on face {face}")]
    CasinoFaceMismatch { casino: usize, face: u8 },
    #[error("first player index {index} is out of range")]
    FirstPlayerOutOfRange { index: usize },
    #[error("active player index {index} is out of range")]
    ActivePlayerOutOfRange { index: usize },
    #[error("{pending} pending dice for a stock of {stock}")]
    PendingDiceMismatch { pending: usize, stock: i32 },
    #[error("{pending} pending white dice for a stock of {stock}")]
    PendingWhiteDiceMismatch { pending: usize, stock: i32 },
    #[error("color {color:?} is used by more than one player")]
    DuplicateColor { color: Color },
    #[error("player {player} holds the neutral color")]
    NeutralColorTaken { player: usize },
    #[error("round {round} is outside 0 to 3")]
    RoundOutOfRange { round: i32 },
    #[error("casino {casino} holds ${money}, below the $50 floor")]
    CasinoUnderfunded { casino: usize, money: u32 },
    #[error("player {player} has a negative dice stock")]
    NegativeDiceStock { player: usize },
}

/// Returns `true` when `state` satisfies every structural and conservation
/// rule of the game.
///
/// # Examples
///
/// ```
/// use vegas_engine::engine::GameEngine;
/// use vegas_engine::rules::validate_game_state;
///
/// let mut engine = GameEngine::new(Some(7));
/// let mut state = engine.init_game(2).unwrap();
/// assert!(validate_game_state(&state));
///
/// state.players[1].stock_dice += 1;
/// assert!(!validate_game_state(&state));
/// ```
pub fn validate_game_state(state: &GameState) -> bool {
    check_game_state(state).is_ok()
}

/// Same verdict as [`validate_game_state`], naming the first rule broken.
/// Rules are checked in a fixed order and the check stops at the first
/// failure.
pub fn check_game_state(state: &GameState) -> Result<(), RuleViolation> {
    check_table(state)?;
    check_dice(state)?;
    check_bills(state)?;
    check_indices(state)?;
    check_turn(state)?;
    check_colors(state)?;

    if !(0..ROUND_COUNT).contains(&state.round_number) {
        return Err(RuleViolation::RoundOutOfRange {
            round: state.round_number,
        });
    }

    for casino in &state.casinos {
        let money = casino.money();
        if money < CASINO_MIN_MONEY_VALUE {
            return Err(RuleViolation::CasinoUnderfunded {
                casino: casino.index,
                money,
            });
        }
    }

    if let Some(p) = state
        .players
        .iter()
        .find(|p| p.stock_dice < 0 || p.stock_white_dice < 0)
    {
        return Err(RuleViolation::NegativeDiceStock { player: p.index });
    }

    Ok(())
}

fn check_table(state: &GameState) -> Result<(), RuleViolation> {
    let count = state.player_count;
    if !(MIN_PLAYER_COUNT..=MAX_PLAYER_COUNT).contains(&count) {
        return Err(RuleViolation::PlayerCountOutOfRange { count });
    }
    if state.players.len() != count {
        return Err(RuleViolation::PlayerListLength {
            expected: count,
            actual: state.players.len(),
        });
    }
    if state.neutral_player_present != (count < MAX_PLAYER_COUNT) {
        return Err(RuleViolation::NeutralPresence {
            present: state.neutral_player_present,
            player_count: count,
        });
    }
    Ok(())
}

fn check_dice(state: &GameState) -> Result<(), RuleViolation> {
    for (player, p) in state.players.iter().enumerate() {
        let total = p.stock_dice + state.casinos.iter().map(|c| c.bet_of(player)).sum::<i32>();
        if total != DICE_COUNT {
            return Err(RuleViolation::DiceNotConserved { player, total });
        }
    }

    if state.neutral_player_present {
        let expected = extra_white_dice_count(state.player_count) * state.player_count as i32;
        let actual = state.casinos.iter().map(|c| c.neutral_bet).sum::<i32>()
            + state.players.iter().map(|p| p.stock_white_dice).sum::<i32>();
        if actual != expected {
            return Err(RuleViolation::WhiteDiceNotConserved { expected, actual });
        }
    }
    Ok(())
}

fn check_bills(state: &GameState) -> Result<(), RuleViolation> {
    for entry in &BANK_INIT_STOCK {
        let actual = state.count_bill(entry.bill);
        if actual != entry.count {
            return Err(RuleViolation::BillNotConserved {
                bill: entry.bill,
                expected: entry.count,
                actual,
            });
        }
    }
    Ok(())
}

fn check_indices(state: &GameState) -> Result<(), RuleViolation> {
    for (position, p) in state.players.iter().enumerate() {
        if p.index != position {
            return Err(RuleViolation::PlayerIndexMismatch {
                position,
                index: p.index,
            });
        }
    }
    for (position, casino) in state.casinos.iter().enumerate() {
        if casino.index != position {
            return Err(RuleViolation::CasinoIndexMismatch {
                position,
                index: casino.index,
            });
        }
        if casino.face_value.casino_index() != position {
            return Err(RuleViolation::CasinoFaceMismatch {
                casino: position,
                face: casino.face_value.value(),
            });
        }
    }
    Ok(())
}

fn check_turn(state: &GameState) -> Result<(), RuleViolation> {
    if state.first_player_index >= state.player_count {
        return Err(RuleViolation::FirstPlayerOutOfRange {
            index: state.first_player_index,
        });
    }
    let turn = &state.current_turn;
    let Some(active) = state.players.get(turn.active_player_index) else {
        return Err(RuleViolation::ActivePlayerOutOfRange {
            index: turn.active_player_index,
        });
    };

    if usize::try_from(active.stock_dice).ok() != Some(turn.pending_dice.len()) {
        return Err(RuleViolation::PendingDiceMismatch {
            pending: turn.pending_dice.len(),
            stock: active.stock_dice,
        });
    }
    if usize::try_from(active.stock_white_dice).ok() != Some(turn.pending_white_dice.len()) {
        return Err(RuleViolation::PendingWhiteDiceMismatch {
            pending: turn.pending_white_dice.len(),
            stock: active.stock_white_dice,
        });
    }
    Ok(())
}

fn check_colors(state: &GameState) -> Result<(), RuleViolation> {
    let mut colors = HashSet::new();
    for p in &state.players {
        if !colors.insert(p.color) {
            return Err(RuleViolation::DuplicateColor { color: p.color });
        }
    }
    if state.neutral_player_present {
        if let Some(p) = state.players.iter().find(|p| p.color == NEUTRAL_COLOR) {
            return Err(RuleViolation::NeutralColorTaken { player: p.index });
        }
    }
    Ok(())
}
