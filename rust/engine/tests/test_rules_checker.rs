use vegas_engine::dice::{Bill, Color, DiceValue};
use vegas_engine::engine::GameEngine;
use vegas_engine::game::GameState;
use vegas_engine::rules::{check_game_state, validate_game_state, RuleViolation};

fn dealt(players: usize) -> GameState {
    GameEngine::new(Some(11)).init_game(players).unwrap()
}

fn violation(state: &GameState) -> RuleViolation {
    check_game_state(state).expect_err("state should be rejected")
}

#[test]
fn player_count_must_be_two_to_five() {
    let mut state = dealt(3);
    state.player_count = 6;
    assert_eq!(
        violation(&state),
        RuleViolation::PlayerCountOutOfRange { count: 6 }
    );
    state.player_count = 1;
    assert_eq!(
        violation(&state),
        RuleViolation::PlayerCountOutOfRange { count: 1 }
    );
}

#[test]
fn player_list_must_match_player_count() {
    let mut state = dealt(3);
    state.players.pop();
    assert_eq!(
        violation(&state),
        RuleViolation::PlayerListLength {
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn neutral_pool_exists_exactly_below_five_players() {
    let mut state = dealt(5);
    state.neutral_player_present = true;
    assert_eq!(
        violation(&state),
        RuleViolation::NeutralPresence {
            present: true,
            player_count: 5
        }
    );
}

#[test]
fn extra_personal_die_breaks_conservation() {
    let mut state = dealt(3);
    state.players[1].stock_dice += 1;
    assert_eq!(
        violation(&state),
        RuleViolation::DiceNotConserved {
            player: 1,
            total: 9
        }
    );
}

#[test]
fn lost_bet_breaks_conservation() {
    let mut state = dealt(3);
    state.casinos[4].bet_per_player[2] += 2;
    assert_eq!(
        violation(&state),
        RuleViolation::DiceNotConserved {
            player: 2,
            total: 10
        }
    );
}

#[test]
fn white_dice_are_conserved_across_seats_and_casinos() {
    let mut state = dealt(3);
    state.players[2].stock_white_dice -= 1;
    assert_eq!(
        violation(&state),
        RuleViolation::WhiteDiceNotConserved {
            expected: 6,
            actual: 5
        }
    );

    // Moving a white die from a seat onto a casino keeps the total.
    state.casinos[0].neutral_bet += 1;
    assert_eq!(check_game_state(&state), Ok(()));
}

#[test]
fn white_dice_are_not_counted_without_a_neutral_pool() {
    let mut state = dealt(5);
    state.casinos[0].neutral_bet = 3;
    assert_eq!(check_game_state(&state), Ok(()));
}

#[test]
fn duplicated_bill_is_caught() {
    let mut state = dealt(2);
    state.players[1].bills.push(Bill::Ten);
    assert_eq!(
        violation(&state),
        RuleViolation::BillNotConserved {
            bill: Bill::Ten,
            expected: 6,
            actual: 7
        }
    );
}

#[test]
fn vanished_bill_is_caught() {
    let mut state = dealt(4);
    let bill = state.bank.pop().unwrap();
    match violation(&state) {
        RuleViolation::BillNotConserved {
            bill: missing,
            expected,
            actual,
        } => {
            assert_eq!(missing, bill);
            assert_eq!(actual + 1, expected);
        }
        other => panic!("unexpected violation: {other}"),
    }
}

#[test]
fn seat_and_casino_indices_follow_positions() {
    let mut state = dealt(3);
    state.players[1].index = 2;
    assert_eq!(
        violation(&state),
        RuleViolation::PlayerIndexMismatch {
            position: 1,
            index: 2
        }
    );

    let mut state = dealt(3);
    state.casinos[3].index = 4;
    assert_eq!(
        violation(&state),
        RuleViolation::CasinoIndexMismatch {
            position: 3,
            index: 4
        }
    );

    let mut state = dealt(3);
    state.casinos[3].face_value = DiceValue::Five;
    assert_eq!(
        violation(&state),
        RuleViolation::CasinoFaceMismatch { casino: 3, face: 5 }
    );
}

#[test]
fn turn_indices_stay_in_range() {
    let mut state = dealt(3);
    state.first_player_index = 3;
    assert_eq!(
        violation(&state),
        RuleViolation::FirstPlayerOutOfRange { index: 3 }
    );

    let mut state = dealt(3);
    state.current_turn.active_player_index = 7;
    assert_eq!(
        violation(&state),
        RuleViolation::ActivePlayerOutOfRange { index: 7 }
    );
}

#[test]
fn pending_rolls_match_the_active_stock() {
    let mut state = dealt(3);
    state.current_turn.pending_dice.push(DiceValue::One);
    assert_eq!(
        violation(&state),
        RuleViolation::PendingDiceMismatch {
            pending: 9,
            stock: 8
        }
    );

    let mut state = dealt(3);
    state.current_turn.pending_white_dice.pop();
    assert_eq!(
        violation(&state),
        RuleViolation::PendingWhiteDiceMismatch {
            pending: 1,
            stock: 2
        }
    );
}

#[test]
fn colors_are_unique_and_white_belongs_to_the_neutral_pool() {
    let mut state = dealt(4);
    state.players[3].color = state.players[1].color;
    assert!(matches!(
        violation(&state),
        RuleViolation::DuplicateColor { .. }
    ));

    let mut state = dealt(3);
    state.players[1].color = Color::White;
    assert_eq!(
        violation(&state),
        RuleViolation::NeutralColorTaken { player: 1 }
    );
}

#[test]
fn five_player_table_may_seat_white() {
    let state = dealt(5);
    assert!(state.players.iter().any(|p| p.color == Color::White));
    assert!(validate_game_state(&state));
}

#[test]
fn round_number_stays_within_the_game() {
    let mut state = dealt(2);
    state.round_number = 4;
    assert_eq!(
        violation(&state),
        RuleViolation::RoundOutOfRange { round: 4 }
    );
    state.round_number = -1;
    assert_eq!(
        violation(&state),
        RuleViolation::RoundOutOfRange { round: -1 }
    );
    state.round_number = 3;
    assert!(validate_game_state(&state));
}

#[test]
fn every_casino_holds_at_least_fifty() {
    let mut state = dealt(2);
    let mut bills = std::mem::take(&mut state.casinos[0].bills);
    state.bank.append(&mut bills);
    assert_eq!(
        violation(&state),
        RuleViolation::CasinoUnderfunded {
            casino: 0,
            money: 0
        }
    );
}

#[test]
fn negative_stock_is_rejected_even_when_totals_balance() {
    let mut state = dealt(3);
    state.players[1].stock_dice = -1;
    state.casinos[0].bet_per_player[1] += 9;
    assert_eq!(
        violation(&state),
        RuleViolation::NegativeDiceStock { player: 1 }
    );

    let mut state = dealt(3);
    state.players[2].stock_white_dice = -1;
    state.casinos[0].neutral_bet += 3;
    assert_eq!(
        violation(&state),
        RuleViolation::NegativeDiceStock { player: 2 }
    );
}

#[test]
fn state_between_allocation_and_advance_is_not_a_turn_boundary() {
    let mut engine = GameEngine::new(Some(5));
    let mut state = engine.init_game(2).unwrap();
    let face = state.current_turn.available_faces()[0];
    let allocation = engine.allocate_dices(&mut state, face.value()).unwrap();

    assert!(matches!(
        violation(&state),
        RuleViolation::PendingDiceMismatch { pending: 0, .. }
            | RuleViolation::PendingWhiteDiceMismatch { pending: 0, .. }
    ));
    assert!(allocation.dice + allocation.white_dice > 0);

    engine.advance_to_next_player(&mut state).unwrap();
    assert_eq!(check_game_state(&state), Ok(()));
}
