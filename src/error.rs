use thiserror::Error;

/// Fatal errors of the board and its tiles. None of them can be recovered
/// from within a round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported number for number tile: {0}")]
    UnsupportedNumber(usize),
    #[error("correct number {correct} is not on a board of {tiles} tiles")]
    CorrectNumberOffBoard { correct: u8, tiles: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Malformed(String),
    #[error("`{0}` must be greater than zero")]
    NotPositive(&'static str),
    #[error("`{0}` must not be negative")]
    Negative(&'static str),
    #[error("board of side {side} cannot fit {columns} tiles with a border of {border}")]
    BoardTooSmall {
        side: i32,
        columns: usize,
        border: i32,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}
