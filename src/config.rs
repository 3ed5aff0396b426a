//! Runtime configuration from environment variables and the command line.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI_2048_SEED` | unset | Seed for a reproducible game (entropy when unset) |
//! | `TUI_2048_LOG_PATH` | unset | File to write `tracing` logs to (disabled when unset) |
//! | `TUI_2048_CELL_W` | 8 | Tile width in terminal columns (4..=64) |
//! | `TUI_2048_CELL_H` | 3 | Tile height in terminal rows (1..=32) |
//! | `TUI_2048_TICK_MS` | 16 | Input poll interval |
//!
//! Command-line flags override the environment.

use clap::Parser;

use crate::core::{EntropyRng, SimpleRng, TileRng};
use crate::term::{TILE_H_RANGE, TILE_W_RANGE};
use crate::types::TICK_MS;

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-2048", version, about = "Play 2048 in the terminal")]
pub struct Args {
    /// Seed for a reproducible game (overrides TUI_2048_SEED)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Print the initial game snapshot as JSON and exit
    #[arg(long)]
    pub dump_json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub tile_w: u16,
    pub tile_h: u16,
    pub tick_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            tile_w: 8,
            tile_h: 3,
            tick_ms: TICK_MS,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (lets tests avoid the process environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TUI_2048_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TUI_2048_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let tile_w = lookup("TUI_2048_CELL_W")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(defaults.tile_w)
            .clamp(TILE_W_RANGE.0, TILE_W_RANGE.1);

        let tile_h = lookup("TUI_2048_CELL_H")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(defaults.tile_h)
            .clamp(TILE_H_RANGE.0, TILE_H_RANGE.1);

        let tick_ms = lookup("TUI_2048_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        Self {
            seed,
            log_path,
            tile_w,
            tile_h,
            tick_ms,
        }
    }

    /// Apply command-line overrides.
    pub fn with_args(mut self, args: &Args) -> Self {
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
    }

    /// Seeded LCG when a seed is configured, OS entropy otherwise.
    pub fn tile_rng(&self) -> Box<dyn TileRng> {
        match self.seed {
            Some(seed) => Box::new(SimpleRng::new(seed)),
            None => Box::new(EntropyRng::new()),
        }
    }
}
