use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid player count: {count} (expected 2 to 5)")]
    InvalidPlayerCount { count: usize },
    #[error("Invalid player index: {index} (player count {player_count})")]
    InvalidPlayerIndex { index: usize, player_count: usize },
    #[error("Invalid face value: {face} (expected 1 to 6)")]
    InvalidFaceValue { face: u8 },
    #[error("Invalid bill value: {value} (expected 10 to 90 in steps of 10)")]
    InvalidBillValue { value: u32 },
    #[error("No pending dice show face {face}")]
    NothingAllocated { face: u8 },
    #[error("No player has dice left to roll")]
    NoEligibleNextPlayer,
    #[error("Bank ran out of bills while funding casino {casino}")]
    InsufficientBank { casino: usize },
    #[error("Game is over (round {round} was the last)")]
    GameOver { round: i32 },
}
