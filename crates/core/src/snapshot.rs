//! Snapshot module - a plain, serialisable copy of a game session
//!
//! Renderers and `--dump-json` read the session through a [`GameSnapshot`]
//! rather than borrowing the live board.

use serde::Serialize;

use crate::types::BOARD_SIDE;

/// Plain copy of everything a renderer or observer needs from a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameSnapshot {
    /// Tile values as `board[row][col]`, 0 for empty.
    pub board: [[u32; BOARD_SIDE]; BOARD_SIDE],
    pub score: u64,
    pub best: u64,
    pub moves: u32,
    pub max_tile: u32,
    pub game_over: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Number of empty cells.
    pub fn empty_cells(&self) -> usize {
        self.board.iter().flatten().filter(|&&v| v == 0).count()
    }
}
