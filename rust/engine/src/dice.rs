use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Smallest number of seated players.
pub const MIN_PLAYER_COUNT: usize = 2;
/// Largest number of seated players.
pub const MAX_PLAYER_COUNT: usize = 5;
/// One casino per face value.
pub const CASINO_COUNT: usize = 6;
/// Personal dice each player owns for a round.
pub const DICE_COUNT: i32 = 8;
/// Rounds in a full game.
pub const ROUND_COUNT: i32 = 4;
/// Minimum money a casino holds after a round has been dealt.
pub const CASINO_MIN_MONEY_VALUE: u32 = 50;

/// Face value shown by a die. Each face maps to exactly one casino.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DiceValue {
    /// Face 1 (first casino)
    One = 1,
    /// Face 2
    Two,
    /// Face 3
    Three,
    /// Face 4
    Four,
    /// Face 5
    Five,
    /// Face 6 (last casino)
    Six,
}

impl DiceValue {
    pub fn from_u8(v: u8) -> Option<DiceValue> {
        match v {
            1 => Some(DiceValue::One),
            2 => Some(DiceValue::Two),
            3 => Some(DiceValue::Three),
            4 => Some(DiceValue::Four),
            5 => Some(DiceValue::Five),
            6 => Some(DiceValue::Six),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Index of the casino paying out on this face.
    pub fn casino_index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for DiceValue {
    type Error = GameError;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        DiceValue::from_u8(face).ok_or(GameError::InvalidFaceValue { face })
    }
}

impl From<DiceValue> for u8 {
    fn from(face: DiceValue) -> u8 {
        face.value()
    }
}

impl fmt::Display for DiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A money note. Bills of the same denomination are interchangeable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Bill {
    Ten = 10,
    Twenty = 20,
    Thirty = 30,
    Forty = 40,
    Fifty = 50,
    Sixty = 60,
    Seventy = 70,
    Eighty = 80,
    Ninety = 90,
}

impl Bill {
    pub fn from_value(v: u32) -> Option<Bill> {
        all_bills().into_iter().find(|b| b.value() == v)
    }

    pub fn value(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Bill {
    type Error = GameError;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        Bill::from_value(v).ok_or(GameError::InvalidBillValue { value: v })
    }
}

impl From<Bill> for u32 {
    fn from(bill: Bill) -> u32 {
        bill.value()
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.value())
    }
}

/// Dice color owned by a seat. White is reserved for the neutral pool
/// whenever fewer than five players are seated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Black,
    White,
}

/// Colors handed to seats in order.
pub const PLAYER_PALETTE: [Color; MAX_PLAYER_COUNT] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Black,
    Color::White,
];

/// Color of the neutral dice.
pub const NEUTRAL_COLOR: Color = Color::White;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BankEntry {
    pub bill: Bill,
    pub count: usize,
}

/// Notes in the bank when a game starts (54 bills, $2500 in total).
pub const BANK_INIT_STOCK: [BankEntry; 9] = [
    BankEntry { bill: Bill::Ten, count: 6 },
    BankEntry { bill: Bill::Twenty, count: 8 },
    BankEntry { bill: Bill::Thirty, count: 8 },
    BankEntry { bill: Bill::Forty, count: 6 },
    BankEntry { bill: Bill::Fifty, count: 6 },
    BankEntry { bill: Bill::Sixty, count: 5 },
    BankEntry { bill: Bill::Seventy, count: 5 },
    BankEntry { bill: Bill::Eighty, count: 5 },
    BankEntry { bill: Bill::Ninety, count: 5 },
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ExtraWhiteDiceEntry {
    pub player_count: usize,
    pub white_dice_count: i32,
}

/// White dice given to every player, keyed by table size.
pub const EXTRA_WHITE_DICE: [ExtraWhiteDiceEntry; 4] = [
    ExtraWhiteDiceEntry { player_count: 2, white_dice_count: 4 },
    ExtraWhiteDiceEntry { player_count: 3, white_dice_count: 2 },
    ExtraWhiteDiceEntry { player_count: 4, white_dice_count: 2 },
    ExtraWhiteDiceEntry { player_count: 5, white_dice_count: 0 },
];

pub fn extra_white_dice_count(player_count: usize) -> i32 {
    EXTRA_WHITE_DICE
        .iter()
        .find(|e| e.player_count == player_count)
        .map(|e| e.white_dice_count)
        .unwrap_or(0)
}

pub fn initial_stock_count(bill: Bill) -> usize {
    BANK_INIT_STOCK
        .iter()
        .find(|e| e.bill == bill)
        .map(|e| e.count)
        .unwrap_or(0)
}

pub fn all_faces() -> [DiceValue; CASINO_COUNT] {
    [
        DiceValue::One,
        DiceValue::Two,
        DiceValue::Three,
        DiceValue::Four,
        DiceValue::Five,
        DiceValue::Six,
    ]
}

pub fn all_bills() -> [Bill; 9] {
    [
        Bill::Ten,
        Bill::Twenty,
        Bill::Thirty,
        Bill::Forty,
        Bill::Fifty,
        Bill::Sixty,
        Bill::Seventy,
        Bill::Eighty,
        Bill::Ninety,
    ]
}

/// Expand [`BANK_INIT_STOCK`] into an unshuffled bank.
pub fn full_bank() -> Vec<Bill> {
    let mut v = Vec::with_capacity(54);
    for entry in &BANK_INIT_STOCK {
        v.extend(std::iter::repeat(entry.bill).take(entry.count));
    }
    v
}

pub fn money_value(bills: &[Bill]) -> u32 {
    bills.iter().map(|b| b.value()).sum()
}
