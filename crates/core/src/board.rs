//! Board module - the 4x4 grid and its move rules
//!
//! The board is a 4x4 grid of [`Tile`]s in a flat, row-major array
//! (`index = row * 4 + col`, row 0 at the top). It owns no score: [`Board::shift`]
//! reports the points a single move earned and the caller accumulates them.
//!
//! All randomness (start tiles, spawns) is drawn from the injected [`TileRng`].

use arrayvec::ArrayVec;

use crate::error::BoardError;
use crate::line::{line_cell, line_would_change, resolve_line, LineOutcome, LINE_LEN};
use crate::rng::{SimpleRng, TileRng};
use crate::tile::Tile;
use crate::types::{Direction, Vec2, BOARD_SIDE, CELL_COUNT, SPAWN_VALUE, START_TILES};

/// Everything a single move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Points earned: the sum of all merged tiles' new values.
    pub points: u64,
    pub merges: u32,
    /// Any tile slid or merged.
    pub moved: bool,
    /// Index of the tile spawned after the move, if any.
    pub spawned: Option<usize>,
}

/// The game board - 16 tiles plus the random source used for placement
#[derive(Debug, Clone)]
pub struct Board {
    /// Flat array of tiles, row-major order (row * 4 + col)
    tiles: [Tile; CELL_COUNT],
    rng: Box<dyn TileRng>,
}

impl Board {
    /// Create a board in its start state (two 2-tiles at distinct cells).
    pub fn new(rng: Box<dyn TileRng>) -> Self {
        let mut board = Self::empty(rng);
        board.reset();
        board
    }

    /// Start-state board driven by a seeded [`SimpleRng`].
    pub fn with_seed(seed: u32) -> Self {
        Self::new(Box::new(SimpleRng::new(seed)))
    }

    /// A board with every cell empty. Not a legal game position; used for fixtures.
    pub fn empty(rng: Box<dyn TileRng>) -> Self {
        Self {
            tiles: [Tile::EMPTY; CELL_COUNT],
            rng,
        }
    }

    /// Build a board from row-major values.
    ///
    /// Fails if any value is neither 0 nor a power of two >= 2.
    pub fn from_values(values: [u32; CELL_COUNT], rng: Box<dyn TileRng>) -> Result<Self, BoardError> {
        let mut board = Self::empty(rng);
        for (idx, &value) in values.iter().enumerate() {
            board.try_set_square(idx, Tile::new(value))?;
        }
        Ok(board)
    }

    /// Clear the grid and place the two starting tiles.
    pub fn reset(&mut self) {
        self.clear();
        for _ in 0..START_TILES {
            // Unreachable on a cleared board.
            if let Err(err) = self.add_new_square() {
                tracing::warn!(%err, "no room for a start tile");
            }
        }
        tracing::trace!(values = ?self.values(), "board reset");
    }

    /// Set every tile to empty (positions are kept).
    pub fn clear(&mut self) {
        for tile in &mut self.tiles {
            tile.set_value(0);
        }
    }

    /// Slide toward `dir`, returning the points earned.
    ///
    /// A move that changes the grid spawns one new tile; a move that changes
    /// nothing leaves the board untouched and returns 0.
    pub fn shift(&mut self, dir: Direction) -> u64 {
        self.shift_outcome(dir).points
    }

    /// Like [`Board::shift`], reporting everything the move did.
    pub fn shift_outcome(&mut self, dir: Direction) -> MoveOutcome {
        let mut total = LineOutcome::default();
        for line in 0..BOARD_SIDE {
            let mut cells = self.gather(dir, line);
            let out = resolve_line(&mut cells);
            if out.moved {
                self.scatter(dir, line, &cells);
            }
            total.absorb(out);
        }

        let spawned = if total.moved {
            match self.add_new_square() {
                Ok(idx) => Some(idx),
                Err(err) => {
                    tracing::warn!(%err, ?dir, "no room to spawn after a move");
                    None
                }
            }
        } else {
            None
        };

        MoveOutcome {
            points: total.points,
            merges: total.merges,
            moved: total.moved,
            spawned,
        }
    }

    /// Whether sliding toward `dir` would change anything.
    pub fn can_shift(&self, dir: Direction) -> bool {
        (0..BOARD_SIDE).any(|line| line_would_change(&self.gather(dir, line)))
    }

    /// Legal directions in [`Direction::ALL`] order.
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|dir| self.can_shift(dir))
    }

    /// False only in the terminal state: no direction would change the grid.
    pub fn available_move(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.can_shift(dir))
    }

    /// Spawn a 2 at a uniformly random empty cell, returning its index.
    ///
    /// Draws `r` in `[0, empty_count)` and fills the `r`-th empty cell in
    /// row-major order.
    pub fn add_new_square(&mut self) -> Result<usize, BoardError> {
        let empties = self.empty_indices();
        if empties.is_empty() {
            return Err(BoardError::BoardFull);
        }
        let idx = empties[self.rng.next_below(empties.len())];
        self.tiles[idx].set_value(SPAWN_VALUE);
        Ok(idx)
    }

    /// Overwrite a slot directly, bypassing game rules (for tests and fixtures)
    /// Returns false if out of bounds
    pub fn set_square(&mut self, index: usize, tile: Tile) -> bool {
        match self.tiles.get_mut(index) {
            Some(slot) => {
                slot.set_value(tile.value());
                true
            }
            None => false,
        }
    }

    /// Checked variant of [`Board::set_square`] that also validates the value.
    pub fn try_set_square(&mut self, index: usize, tile: Tile) -> Result<(), BoardError> {
        if !Tile::is_valid_value(tile.value()) {
            return Err(BoardError::InvalidTileValue(tile.value()));
        }
        if self.set_square(index, tile) {
            Ok(())
        } else {
            Err(BoardError::IndexOutOfRange(index))
        }
    }

    /// Tile at `index`, or `None` if out of range.
    pub fn game_square(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Tile at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    pub fn tile(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    /// Record where the renderer drew slot `index`. Returns false if out of range.
    pub fn set_position(&mut self, index: usize, position: Vec2) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) => {
                tile.set_position(position);
                true
            }
            None => false,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Row-major tile values.
    pub fn values(&self) -> [u32; CELL_COUNT] {
        std::array::from_fn(|i| self.tiles[i].value())
    }

    /// Tile values as `rows[row][col]`.
    pub fn rows(&self) -> [[u32; BOARD_SIDE]; BOARD_SIDE] {
        std::array::from_fn(|r| std::array::from_fn(|c| self.tiles[r * BOARD_SIDE + c].value()))
    }

    pub fn empty_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_empty()).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.tiles.iter().map(Tile::value).max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn value_sum(&self) -> u64 {
        self.tiles.iter().map(|t| u64::from(t.value())).sum()
    }

    fn empty_indices(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    fn gather(&self, dir: Direction, line: usize) -> [Tile; LINE_LEN] {
        std::array::from_fn(|pos| self.tiles[line_cell(dir, line, pos)])
    }

    /// Write resolved values back; slot positions are left alone.
    fn scatter(&mut self, dir: Direction, line: usize, cells: &[Tile; LINE_LEN]) {
        for (pos, cell) in cells.iter().enumerate() {
            self.tiles[line_cell(dir, line, pos)].set_value(cell.value());
        }
    }
}

impl PartialEq for Board {
    /// Boards compare by tile contents; the random source is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
