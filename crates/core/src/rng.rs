//! RNG module - injectable random sources for tile placement
//!
//! The board never owns a global generator. Every placement draws from a
//! [`TileRng`] handed to it at construction, so games can be:
//!
//! - reproducible ([`SimpleRng`], a seeded LCG),
//! - unpredictable ([`EntropyRng`], `StdRng` seeded from the OS),
//! - fully scripted ([`ScriptedRng`], a fixed replay for tests).

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait TileRng: Debug + Send {
    /// Return a value in `[0, bound)`. `bound` is always non-zero.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Clone into a new box (lets a `Board` be cloned for search branches).
    fn box_clone(&self) -> Box<dyn TileRng>;
}

impl Clone for Box<dyn TileRng> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current generator state (feed back into `new` to replay from here)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileRng for SimpleRng {
    fn next_below(&mut self, bound: usize) -> usize {
        // Multiply-shift keeps the high bits, which are far better
        // distributed than an LCG's low ones. Bias is below bound / 2^32.
        ((u64::from(self.next_u32()) * bound as u64) >> 32) as usize
    }

    fn box_clone(&self) -> Box<dyn TileRng> {
        Box::new(self.clone())
    }
}

/// `StdRng` seeded from operating-system entropy.
#[derive(Debug, Clone)]
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant, still backed by `StdRng`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl TileRng for EntropyRng {
    fn next_below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn box_clone(&self) -> Box<dyn TileRng> {
        Box::new(self.clone())
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each draw is reduced modulo the requested bound, so a script of `[0]`
/// always picks the first empty cell.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    draws: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        let mut draws = draws.into();
        if draws.is_empty() {
            draws.push(0);
        }
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl TileRng for ScriptedRng {
    fn next_below(&mut self, bound: usize) -> usize {
        let raw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        raw % bound
    }

    fn box_clone(&self) -> Box<dyn TileRng> {
        Box::new(self.clone())
    }
}
