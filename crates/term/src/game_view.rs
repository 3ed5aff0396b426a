//! GameView: maps a `core::GameState` into a terminal framebuffer.
//!
//! The board is laid out with `core::draw` in terminal-cell units and the
//! resulting primitives are rasterised: rectangles become filled cells, text is
//! written centred over whatever is underneath. The side panel is drawn
//! straight into the framebuffer. No I/O happens here.

use crate::core::draw::{layout_board, BoardLayout, Button, Color, DrawList, DrawPrimitive};
use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Vec2;

/// Width reserved for the side panel, in columns.
const PANEL_W: u16 = 14;

/// Tile size bounds in cells. The minimum width fits "2048".
pub const TILE_W_RANGE: (u16, u16) = (4, 64);
pub const TILE_H_RANGE: (u16, u16) = (1, 32);

const BUTTON_BG: Color = Color::hex(0x8F7A66);
const BUTTON_FG: Color = Color::hex(0xF9F6F2);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Clickable regions produced by the last render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewHits {
    pub board: BoardLayout,
    /// Absent when the viewport is too narrow for the side panel.
    pub new_game: Option<Button>,
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile size in terminal columns and rows.
    tile_w: u16,
    tile_h: u16,
    /// Gap between and around tiles.
    margin_x: u16,
    margin_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Roughly square tiles given the usual 2:1 glyph aspect ratio.
        Self {
            tile_w: 8,
            tile_h: 3,
            margin_x: 2,
            margin_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Tiles `tile_w` columns by `tile_h` rows, clamped to
    /// [`TILE_W_RANGE`] and [`TILE_H_RANGE`].
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.clamp(TILE_W_RANGE.0, TILE_W_RANGE.1),
            tile_h: tile_h.clamp(TILE_H_RANGE.0, TILE_H_RANGE.1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board size in cells, margins included.
    pub fn board_size(&self) -> (u16, u16) {
        let side = |tile: u16, margin: u16| {
            tile.saturating_mul(4).saturating_add(margin.saturating_mul(5))
        };
        (side(self.tile_w, self.margin_x), side(self.tile_h, self.margin_y))
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Records tile positions on the board (hence `&mut`) and returns the
    /// regions a click can land on.
    pub fn render_into(&self, game: &mut GameState, viewport: Viewport, fb: &mut FrameBuffer) -> ViewHits {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let (board_w, board_h) = self.board_size();
        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(board_h) / 2,
            AnchorY::Top => 0,
        };

        let layout = BoardLayout::for_tile_size(
            Vec2::new(start_x as f32, start_y as f32),
            Vec2::new(self.tile_w as f32, self.tile_h as f32),
            Vec2::new(self.margin_x as f32, self.margin_y as f32),
        );

        let mut list = DrawList::with_capacity(64);
        layout_board(game.board_mut(), &layout, &mut list);

        let panel_x = start_x.saturating_add(board_w).saturating_add(2);
        let has_panel = panel_x < viewport.width && viewport.width - panel_x >= PANEL_W;

        let new_game = if has_panel {
            let y = self.draw_side_panel(fb, game, panel_x, start_y);
            let mut button = Button::new();
            button.draw(
                &mut list,
                Vec2::new(panel_x as f32, y as f32),
                Vec2::new(PANEL_W as f32 - 2.0, 3.0),
                BUTTON_BG,
                BUTTON_FG,
                "NEW GAME",
            );
            Some(button)
        } else {
            None
        };

        rasterize(fb, &list);

        if game.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, board_w, board_h);
        }

        ViewHits {
            board: layout,
            new_game,
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &mut GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    /// Score lines and key help. Returns the row where the button goes.
    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &GameState, x: u16, start_y: u16) -> u16 {
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::default();
        let help = value.dim();

        let mut y = start_y;
        fb.put_str(x, y, "2048", CellStyle::new(Rgb::from(Color::hex(0xEDC22E)), Rgb::new(0, 0, 0)).bold());
        y = y.saturating_add(2);

        for (name, v) in [
            ("SCORE", game.score()),
            ("BEST", game.best()),
            ("MOVES", u64::from(game.moves())),
        ] {
            fb.put_str(x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u64(x, y, v, value);
            y = y.saturating_add(2);
        }

        let button_y = y;
        y = y.saturating_add(4);
        for line in ["arrows move", "r restart", "q quit"] {
            fb.put_str(x, y, line, help);
            y = y.saturating_add(1);
        }
        button_y
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, board_w: u16, board_h: u16) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let text = " GAME OVER ";
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(board_w.saturating_sub(text_w) / 2);
        let y = start_y.saturating_add(board_h / 2);
        fb.put_str(x, y, text, style);
    }
}

/// Rasterise primitives in order; later primitives paint over earlier ones.
pub fn rasterize(fb: &mut FrameBuffer, list: &[DrawPrimitive]) {
    for prim in list {
        match prim {
            DrawPrimitive::Rect { origin, size, color } => {
                let rgb = Rgb::from(*color);
                fb.fill_rect(
                    to_cell(origin.x),
                    to_cell(origin.y),
                    to_cell(size.x),
                    to_cell(size.y),
                    ' ',
                    CellStyle::new(rgb, rgb),
                );
            }
            DrawPrimitive::Text { center, text, color } => {
                let half = text.chars().count() as f32 / 2.0;
                fb.overlay_str(
                    to_cell(center.x - half),
                    to_cell(center.y),
                    text,
                    Rgb::from(*color),
                    true,
                );
            }
        }
    }
}

fn to_cell(v: f32) -> u16 {
    v.floor().clamp(0.0, u16::MAX as f32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_size() {
        assert_eq!(GameView::default().board_size(), (42, 17));
        assert_eq!(GameView::new(1, 0).board_size(), (4 * 4 + 10, 4 + 5));
        assert_eq!(GameView::new(u16::MAX, u16::MAX).board_size(), (4 * 64 + 10, 4 * 32 + 5));
    }

    #[test]
    fn to_cell_floors_and_clamps() {
        assert_eq!(to_cell(3.9), 3);
        assert_eq!(to_cell(-2.0), 0);
    }

    #[test]
    fn rasterize_centres_text_in_rect() {
        let mut fb = FrameBuffer::new(8, 3);
        let list = vec![
            DrawPrimitive::Rect {
                origin: Vec2::ZERO,
                size: Vec2::new(8.0, 3.0),
                color: Color::hex(0xEEE4DA),
            },
            DrawPrimitive::Text {
                center: Vec2::new(4.0, 1.5),
                text: "2048".to_string(),
                color: Color::hex(0x776E65),
            },
        ];
        rasterize(&mut fb, &list);
        assert_eq!(fb.row_text(1), "  2048  ");
        assert_eq!(fb.get(0, 0).unwrap().style.bg, Rgb::new(0xEE, 0xE4, 0xDA));
        assert_eq!(fb.get(3, 1).unwrap().style.bg, Rgb::new(0xEE, 0xE4, 0xDA));
    }
}
