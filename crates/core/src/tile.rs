//! Tile module - one cell of the 4x4 grid
//!
//! A tile holds a value (0 = empty, otherwise a power of two) and the
//! position the renderer last drew it at. Tiles are plain `Copy` values;
//! slots never share state.

use crate::types::Vec2;

/// Largest value that can still be doubled without overflow.
const MAX_MERGEABLE: u32 = u32::MAX / 2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tile {
    value: u32,
    /// Last-drawn screen position; written by the layout pass only.
    position: Vec2,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        value: 0,
        position: Vec2::ZERO,
    };

    pub fn new(value: u32) -> Self {
        Self {
            value,
            position: Vec2::ZERO,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// True for empty cells, which slides skip over.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Whether `other` could merge into this tile.
    ///
    /// Pure query: both tiles must be non-empty and hold the same value, and
    /// the doubled value must fit in a `u32`.
    pub fn can_merge(&self, other: &Tile) -> bool {
        !self.is_empty() && self.value == other.value && self.value <= MAX_MERGEABLE
    }

    /// Merge `other` into this tile.
    ///
    /// Doubles this tile, empties `other` and returns the points gained
    /// (the new value). Returns 0 and changes nothing if the tiles cannot merge.
    pub fn merge_from(&mut self, other: &mut Tile) -> u32 {
        if !self.can_merge(other) {
            return 0;
        }
        self.value *= 2;
        other.value = 0;
        self.value
    }

    /// Move this tile's value into `dest`, leaving this tile empty.
    ///
    /// Positions stay with their slots.
    pub(crate) fn slide_into(&mut self, dest: &mut Tile) {
        dest.value = self.value;
        self.value = 0;
    }

    pub(crate) fn set_value(&mut self, value: u32) {
        self.value = value;
    }

    /// 0 (empty) or a power of two no smaller than 2.
    pub fn is_valid_value(value: u32) -> bool {
        value == 0 || (value >= 2 && value.is_power_of_two())
    }
}

impl From<u32> for Tile {
    fn from(value: u32) -> Self {
        Tile::new(value)
    }
}
