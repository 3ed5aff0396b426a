//! Board error types.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board is full: no empty cell to spawn into")]
    BoardFull,

    #[error("cell index {0} is out of range (board has 16 cells)")]
    IndexOutOfRange(usize),

    #[error("invalid tile value {0}: must be 0 or a power of two >= 2")]
    InvalidTileValue(u32),
}
