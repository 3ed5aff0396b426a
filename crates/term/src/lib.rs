//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and instead rasterises the core's draw primitives into a simple
//! framebuffer that is flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Treat terminal cells as the layout unit, so hit-testing needs no conversion
//! - Only re-emit cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{rasterize, AnchorY, GameView, ViewHits, Viewport, TILE_H_RANGE, TILE_W_RANGE};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
