//! Line scan - the one slide/merge routine behind every direction
//!
//! A move treats each row (Left/Right) or column (Up/Down) as an independent
//! line of four cells. The board copies a line out in *destination-edge-first*
//! order (position 0 is the slot tiles slide toward), resolves it here, and
//! writes the values back. Direction only changes which flat indices make up a
//! line, never the algorithm.

use crate::tile::Tile;
use crate::types::{Direction, BOARD_SIDE};

pub const LINE_LEN: usize = BOARD_SIDE;

/// Flat index of the cell `pos` steps from `dir`'s destination edge on `line`.
///
/// `line` is a column index for vertical moves and a row index otherwise.
#[inline]
pub fn line_cell(dir: Direction, line: usize, pos: usize) -> usize {
    debug_assert!(line < BOARD_SIDE && pos < LINE_LEN);
    let far = LINE_LEN - 1 - pos;
    match dir {
        Direction::Up => pos * BOARD_SIDE + line,
        Direction::Down => far * BOARD_SIDE + line,
        Direction::Left => line * BOARD_SIDE + pos,
        Direction::Right => line * BOARD_SIDE + far,
    }
}

/// What resolving a line (or a whole board) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineOutcome {
    /// Sum of the values produced by merges.
    pub points: u64,
    pub merges: u32,
    /// Any tile slid or merged.
    pub moved: bool,
}

impl LineOutcome {
    pub fn absorb(&mut self, other: LineOutcome) {
        self.points += other.points;
        self.merges += other.merges;
        self.moved |= other.moved;
    }
}

/// Slide and merge one line in place.
///
/// Sources are visited from the destination edge outward. Each finds the
/// nearest occupied cell toward the edge and either merges into it (once per
/// move per target) or stops right behind it. Position 0 never moves.
pub fn resolve_line(line: &mut [Tile; LINE_LEN]) -> LineOutcome {
    let mut merged = [false; LINE_LEN];
    let mut out = LineOutcome::default();

    for src in 1..LINE_LEN {
        if line[src].is_empty() {
            continue;
        }

        let blocker = (0..src).rev().find(|&k| !line[k].is_empty());
        let (head, tail) = line.split_at_mut(src);
        let source = &mut tail[0];

        match blocker {
            None => {
                source.slide_into(&mut head[0]);
                out.moved = true;
            }
            Some(k) if !merged[k] && head[k].can_merge(source) => {
                out.points += u64::from(head[k].merge_from(source));
                out.merges += 1;
                merged[k] = true;
                out.moved = true;
            }
            Some(k) => {
                // Everything between the blocker and the source is empty.
                if k + 1 != src {
                    debug_assert!(head[k + 1].is_empty());
                    source.slide_into(&mut head[k + 1]);
                    out.moved = true;
                }
            }
        }
    }

    out
}

/// Whether resolving `line` would change it. Never mutates the caller's tiles.
pub fn line_would_change(line: &[Tile; LINE_LEN]) -> bool {
    let mut scratch = *line;
    resolve_line(&mut scratch).moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(values: [u32; 4]) -> [Tile; 4] {
        values.map(Tile::new)
    }

    fn values(line: &[Tile; 4]) -> [u32; 4] {
        [line[0].value(), line[1].value(), line[2].value(), line[3].value()]
    }

    #[test]
    fn line_cell_maps_edge_first() {
        // Up: position 0 is row 0.
        assert_eq!(line_cell(Direction::Up, 2, 0), 2);
        assert_eq!(line_cell(Direction::Up, 2, 3), 14);
        // Down: position 0 is row 3.
        assert_eq!(line_cell(Direction::Down, 1, 0), 13);
        assert_eq!(line_cell(Direction::Down, 1, 3), 1);
        // Left: position 0 is column 0.
        assert_eq!(line_cell(Direction::Left, 3, 0), 12);
        assert_eq!(line_cell(Direction::Left, 3, 2), 14);
        // Right: position 0 is column 3.
        assert_eq!(line_cell(Direction::Right, 0, 0), 3);
        assert_eq!(line_cell(Direction::Right, 0, 3), 0);
    }

    #[test]
    fn every_direction_covers_every_cell_once() {
        for dir in Direction::ALL {
            let mut seen = [0u8; 16];
            for l in 0..4 {
                for p in 0..4 {
                    seen[line_cell(dir, l, p)] += 1;
                }
            }
            assert!(seen.iter().all(|&n| n == 1), "{dir:?}");
        }
    }

    #[test]
    fn slides_to_edge() {
        let mut l = line([0, 0, 0, 8]);
        let out = resolve_line(&mut l);
        assert_eq!(values(&l), [8, 0, 0, 0]);
        assert!(out.moved);
        assert_eq!(out.points, 0);
    }

    #[test]
    fn no_double_merge() {
        let mut l = line([2, 2, 2, 0]);
        let out = resolve_line(&mut l);
        assert_eq!(values(&l), [4, 2, 0, 0]);
        assert_eq!(out.points, 4);
        assert_eq!(out.merges, 1);
    }

    #[test]
    fn merged_target_blocks_later_equal_tile() {
        let mut l = line([0, 2, 2, 4]);
        let out = resolve_line(&mut l);
        assert_eq!(values(&l), [4, 4, 0, 0]);
        assert_eq!(out.points, 4);
    }

    #[test]
    fn two_pairs_merge_independently() {
        let mut l = line([2, 2, 4, 4]);
        let out = resolve_line(&mut l);
        assert_eq!(values(&l), [4, 8, 0, 0]);
        assert_eq!(out.points, 12);
        assert_eq!(out.merges, 2);
    }

    #[test]
    fn four_equal_tiles_make_two_merges() {
        let mut l = line([4, 4, 4, 4]);
        let out = resolve_line(&mut l);
        assert_eq!(values(&l), [8, 8, 0, 0]);
        assert_eq!(out.points, 16);
    }

    #[test]
    fn settled_line_is_unchanged() {
        let mut l = line([2, 4, 8, 16]);
        let out = resolve_line(&mut l);
        assert_eq!(values(&l), [2, 4, 8, 16]);
        assert_eq!(out, LineOutcome::default());
        assert!(!line_would_change(&l));
    }

    #[test]
    fn would_change_does_not_mutate() {
        let l = line([0, 2, 0, 2]);
        assert!(line_would_change(&l));
        assert_eq!(values(&l), [0, 2, 0, 2]);
    }
}
