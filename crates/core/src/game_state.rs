//! Game state module - a 2048 session wrapped around the board
//!
//! The board only reports points per move. This module owns everything the
//! board deliberately does not: running score, best score, move count and
//! the game-over flag.

use crate::board::Board;
use crate::rng::{SimpleRng, TileRng};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction};

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Points earned by this action.
    pub points: u64,
    /// The grid changed (and a tile was spawned).
    pub changed: bool,
    /// No move is available after this action.
    pub game_over: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u64,
    /// Best score seen in this process; survives restarts.
    best: u64,
    /// Grid-changing moves in the current game.
    moves: u32,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Start a new game drawing tile placements from `rng`.
    pub fn new(rng: Box<dyn TileRng>) -> Self {
        Self::from_board(Board::new(rng))
    }

    /// Start a new, reproducible game.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(Box::new(SimpleRng::new(seed)))
    }

    /// Wrap an existing board (e.g. a test fixture). Game-over is computed from it.
    pub fn from_board(board: Board) -> Self {
        let game_over = !board.available_move();
        Self {
            board,
            score: 0,
            best: 0,
            moves: 0,
            game_over,
            episode_id: 0,
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> MoveResult {
        match action {
            GameAction::Move(dir) => self.slide(dir),
            GameAction::Restart => {
                self.restart();
                MoveResult::default()
            }
        }
    }

    /// Slide toward `dir`. Ignored once the game is over.
    pub fn slide(&mut self, dir: Direction) -> MoveResult {
        if self.game_over {
            return MoveResult {
                points: 0,
                changed: false,
                game_over: true,
            };
        }

        let outcome = self.board.shift_outcome(dir);
        if outcome.moved {
            self.score += outcome.points;
            self.best = self.best.max(self.score);
            self.moves += 1;
            tracing::debug!(
                dir = dir.as_str(),
                points = outcome.points,
                merges = outcome.merges,
                spawned = ?outcome.spawned,
                score = self.score,
                "move applied"
            );
        }

        self.game_over = !self.board.available_move();
        if self.game_over {
            tracing::info!(
                score = self.score,
                moves = self.moves,
                max_tile = self.board.max_tile(),
                episode = self.episode_id,
                "game over"
            );
        }

        MoveResult {
            points: outcome.points,
            changed: outcome.moved,
            game_over: self.game_over,
        }
    }

    /// Begin a new game. Best score is kept.
    pub fn restart(&mut self) {
        self.board.reset();
        self.score = 0;
        self.moves = 0;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        tracing::debug!(episode = self.episode_id, best = self.best, "restart");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for the layout pass, which records tile positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.rows();
        out.score = self.score;
        out.best = self.best;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
