//! Draw module - the board as a list of backend-neutral primitives
//!
//! The engine never draws. [`layout_board`] turns a board into filled
//! rectangles and centred text in whatever units the caller lays out in
//! (pixels, terminal cells), and records each slot's position on its tile so
//! the UI can hit-test clicks afterwards.
//!
//! Geometry: with `margin` between and around slots, each tile is
//! `(size - 5 * margin) / 4` along each axis.

use crate::board::Board;
use crate::types::{Vec2, BOARD_SIDE};

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

pub const BOARD_BACKGROUND: Color = Color::hex(0xD4B867);
pub const SLOT_BACKGROUND: Color = Color::hex(0xDDC171);

const DARK_TEXT: Color = Color::hex(0x776E65);
const LIGHT_TEXT: Color = Color::hex(0xF9F6F2);

/// Fill colour for a tile value.
pub fn tile_color(value: u32) -> Color {
    match value {
        0 => SLOT_BACKGROUND,
        2 => Color::hex(0xEEE4DA),
        4 => Color::hex(0xEDE0C8),
        8 => Color::hex(0xF2B179),
        16 => Color::hex(0xF59563),
        32 => Color::hex(0xF67C5F),
        64 => Color::hex(0xF65E3B),
        128 => Color::hex(0xEDCF72),
        256 => Color::hex(0xEDCC61),
        512 => Color::hex(0xEDC850),
        1024 => Color::hex(0xEDC53F),
        2048 => Color::hex(0xEDC22E),
        _ => Color::hex(0x3C3A32),
    }
}

/// Text colour that reads on [`tile_color`] for the same value.
pub fn text_color(value: u32) -> Color {
    if value <= 4 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    /// Text centred on `center`.
    Text {
        center: Vec2,
        text: String,
        color: Color,
    },
}

pub type DrawList = Vec<DrawPrimitive>;

/// Where and how large to lay out the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub origin: Vec2,
    pub size: Vec2,
    pub margin: Vec2,
}

impl BoardLayout {
    /// Square board `width` wide with the same margin on both axes.
    pub fn square(origin: Vec2, width: f32, margin: f32) -> Self {
        Self {
            origin,
            size: Vec2::splat(width),
            margin: Vec2::splat(margin),
        }
    }

    /// Smallest layout whose tiles are exactly `tile` large.
    pub fn for_tile_size(origin: Vec2, tile: Vec2, margin: Vec2) -> Self {
        let n = BOARD_SIDE as f32;
        Self {
            origin,
            size: Vec2::new(tile.x * n + margin.x * (n + 1.0), tile.y * n + margin.y * (n + 1.0)),
            margin,
        }
    }

    pub fn tile_size(&self) -> Vec2 {
        let n = BOARD_SIDE as f32;
        Vec2::new(
            (self.size.x - self.margin.x * (n + 1.0)) / n,
            (self.size.y - self.margin.y * (n + 1.0)) / n,
        )
    }

    /// Top-left corner of the slot at `(row, col)`.
    pub fn slot_origin(&self, row: usize, col: usize) -> Vec2 {
        let tile = self.tile_size();
        self.origin
            + self.margin
            + Vec2::new(
                col as f32 * (tile.x + self.margin.x),
                row as f32 * (tile.y + self.margin.y),
            )
    }
}

/// Lay the board out into `out` and record every slot's position.
///
/// Emits the board background, then for each slot its background and, for
/// non-empty tiles, a rect in the value's colour with the value as text.
pub fn layout_board(board: &mut Board, layout: &BoardLayout, out: &mut DrawList) {
    let tile_size = layout.tile_size();
    out.push(DrawPrimitive::Rect {
        origin: layout.origin,
        size: layout.size,
        color: BOARD_BACKGROUND,
    });

    for row in 0..BOARD_SIDE {
        for col in 0..BOARD_SIDE {
            let idx = row * BOARD_SIDE + col;
            let pos = layout.slot_origin(row, col);
            out.push(DrawPrimitive::Rect {
                origin: pos,
                size: tile_size,
                color: SLOT_BACKGROUND,
            });
            board.set_position(idx, pos);

            let value = board.tile(idx).value();
            if value == 0 {
                continue;
            }
            out.push(DrawPrimitive::Rect {
                origin: pos,
                size: tile_size,
                color: tile_color(value),
            });
            out.push(DrawPrimitive::Text {
                center: pos + tile_size * 0.5,
                text: value.to_string(),
                color: text_color(value),
            });
        }
    }
}

fn rect_contains(origin: Vec2, size: Vec2, point: Vec2) -> bool {
    origin.x <= point.x
        && point.x < origin.x + size.x
        && origin.y <= point.y
        && point.y < origin.y + size.y
}

/// Index of the slot under `point`, using positions from the last layout.
pub fn tile_at(board: &Board, point: Vec2, tile_size: Vec2) -> Option<usize> {
    board
        .tiles()
        .iter()
        .position(|t| rect_contains(t.position(), tile_size, point))
}

/// A labelled rectangle that remembers where it was last drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Button {
    origin: Vec2,
    size: Vec2,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(
        &mut self,
        out: &mut DrawList,
        origin: Vec2,
        size: Vec2,
        background: Color,
        color: Color,
        label: &str,
    ) {
        self.origin = origin;
        self.size = size;
        out.push(DrawPrimitive::Rect {
            origin,
            size,
            color: background,
        });
        out.push(DrawPrimitive::Text {
            center: origin + size * 0.5,
            text: label.to_string(),
            color,
        });
    }

    /// Whether `point` falls inside the last drawn rectangle.
    pub fn hit(&self, point: Vec2) -> bool {
        rect_contains(self.origin, self.size, point)
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn board_with(values: [u32; 16]) -> Board {
        Board::from_values(values, Box::new(ScriptedRng::new(vec![0]))).unwrap()
    }

    #[test]
    fn square_layout_geometry() {
        // 450 wide with margin 10 => tiles of (450 - 50) / 4 = 100.
        let layout = BoardLayout::square(Vec2::new(0.0, 0.0), 450.0, 10.0);
        assert_eq!(layout.tile_size(), Vec2::splat(100.0));
        assert_eq!(layout.slot_origin(0, 0), Vec2::new(10.0, 10.0));
        assert_eq!(layout.slot_origin(1, 2), Vec2::new(230.0, 120.0));
    }

    #[test]
    fn for_tile_size_inverts_tile_size() {
        let layout = BoardLayout::for_tile_size(Vec2::ZERO, Vec2::new(8.0, 3.0), Vec2::new(2.0, 1.0));
        assert_eq!(layout.size, Vec2::new(42.0, 17.0));
        assert_eq!(layout.tile_size(), Vec2::new(8.0, 3.0));
    }

    #[test]
    fn layout_emits_one_rect_and_text_per_tile() {
        let mut board = board_with([2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2048]);
        let layout = BoardLayout::square(Vec2::ZERO, 450.0, 10.0);
        let mut out = DrawList::new();
        layout_board(&mut board, &layout, &mut out);

        // background + 16 slots + 2 tiles * (rect + text)
        assert_eq!(out.len(), 1 + 16 + 4);

        let texts: Vec<&str> = out
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["2", "2048"]);

        let last = out.last().unwrap();
        assert_eq!(
            *last,
            DrawPrimitive::Text {
                center: Vec2::new(390.0, 390.0),
                text: "2048".to_string(),
                color: text_color(2048),
            }
        );
    }

    #[test]
    fn layout_records_positions_for_hit_testing() {
        let mut board = board_with([0; 16]);
        let layout = BoardLayout::square(Vec2::new(100.0, 50.0), 450.0, 10.0);
        layout_board(&mut board, &layout, &mut DrawList::new());

        assert_eq!(board.tile(5).position(), Vec2::new(220.0, 170.0));
        let tile = layout.tile_size();
        assert_eq!(tile_at(&board, Vec2::new(225.0, 175.0), tile), Some(5));
        // In the margin between slots.
        assert_eq!(tile_at(&board, Vec2::new(215.0, 175.0), tile), None);
    }

    #[test]
    fn button_hit_is_half_open() {
        let mut button = Button::new();
        button.draw(
            &mut DrawList::new(),
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 5.0),
            SLOT_BACKGROUND,
            DARK_TEXT,
            "NEW GAME",
        );
        assert!(button.hit(Vec2::new(10.0, 10.0)));
        assert!(button.hit(Vec2::new(29.9, 14.9)));
        assert!(!button.hit(Vec2::new(30.0, 10.0)));
        assert!(!button.hit(Vec2::new(10.0, 15.0)));
    }

    #[test]
    fn palette_distinguishes_small_values() {
        assert_ne!(tile_color(2), tile_color(4));
        assert_eq!(text_color(2), DARK_TEXT);
        assert_eq!(text_color(8), LIGHT_TEXT);
        assert_eq!(BOARD_BACKGROUND, Color::rgb(0xD4, 0xB8, 0x67));
    }
}
