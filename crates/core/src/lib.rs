//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 board engine and the small session layer on top
//! of it. It does no I/O and draws nothing, making it:
//!
//! - **Deterministic**: all randomness comes from an injected [`TileRng`]
//! - **Testable**: scripted random sources pin exact spawn locations
//! - **Portable**: renderers consume plain draw primitives
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, moves, spawning and terminal-state detection
//! - [`line`]: the single slide/merge routine shared by all four directions
//! - [`tile`]: one cell (value + last drawn position) and the merge primitives
//! - [`rng`]: injectable random sources
//! - [`game_state`]: score, best score and game-over tracking around a board
//! - [`snapshot`]: plain copy of a session for renderers and JSON output
//! - [`draw`]: layout of the board into rectangles and text
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; equal neighbours merge once per move
//! - A merge scores the value of the new tile
//! - A move that changes the grid spawns a 2 in a random empty cell
//! - The game is over when no direction changes the grid
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::with_seed(12345);
//! assert_eq!(game.board().empty_count(), 14);
//!
//! // Some direction is always legal on a fresh board.
//! let dir = Direction::ALL
//!     .into_iter()
//!     .find(|&d| game.board().can_shift(d))
//!     .unwrap();
//! let result = game.apply_action(GameAction::Move(dir));
//! assert!(result.changed);
//! assert_eq!(game.moves(), 1);
//! ```

pub mod board;
pub mod draw;
pub mod error;
pub mod game_state;
pub mod line;
pub mod rng;
pub mod snapshot;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome};
pub use draw::{layout_board, tile_at, BoardLayout, Button, Color, DrawList, DrawPrimitive};
pub use error::BoardError;
pub use game_state::{GameState, MoveResult};
pub use rng::{EntropyRng, ScriptedRng, SimpleRng, TileRng};
pub use snapshot::GameSnapshot;
pub use tile::Tile;
