use tui_2048::core::{tile_at, Board, GameState, ScriptedRng};
use tui_2048::input::{handle_mouse_event, Click};
use tui_2048::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_2048::types::GameAction;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

fn state_from(values: [u32; 16]) -> GameState {
    GameState::from_board(Board::from_values(values, Box::new(ScriptedRng::new(vec![0]))).unwrap())
}

fn left_click(column: u16, row: u16) -> Click {
    handle_mouse_event(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
    .unwrap()
}

#[test]
fn term_view_centres_board_and_records_positions() {
    let mut gs = GameState::with_seed(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    // 80x24 viewport, 42x17 board => origin (19, 3).
    let hits = view.render_into(&mut gs, Viewport::new(80, 24), &mut fb);
    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 24);
    assert_eq!(hits.board.tile_size().x, 8.0);
    assert_eq!(hits.board.tile_size().y, 3.0);
    assert_eq!(gs.board().tile(0).position().x, 21.0);
    assert_eq!(gs.board().tile(0).position().y, 4.0);
    assert_eq!(gs.board().tile(15).position().x, 21.0 + 3.0 * 10.0);
    assert_eq!(gs.board().tile(15).position().y, 4.0 + 3.0 * 4.0);
}

#[test]
fn term_view_writes_tile_values() {
    let mut gs = state_from([2048, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]);
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&mut gs, Viewport::new(42, 17));

    // Slot (0, 0) spans columns 2..10, rows 1..4; text sits on the middle row.
    assert!(fb.row_text(2).contains("2048"));
    assert!(fb.row_text(14).trim_end().ends_with('4'));
}

#[test]
fn term_view_click_maps_to_tile() {
    let mut gs = GameState::with_seed(3);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let hits = view.render_into(&mut gs, Viewport::new(42, 17), &mut FrameBuffer::new(0, 0));
    let tile = hits.board.tile_size();

    assert_eq!(tile_at(gs.board(), left_click(2, 1).point(), tile), Some(0));
    assert_eq!(tile_at(gs.board(), left_click(9, 3).point(), tile), Some(0));
    assert_eq!(tile_at(gs.board(), left_click(12, 1).point(), tile), Some(1));
    assert_eq!(tile_at(gs.board(), left_click(32, 13).point(), tile), Some(15));
    // Margins between slots hit nothing.
    assert_eq!(tile_at(gs.board(), left_click(10, 1).point(), tile), None);
    assert_eq!(tile_at(gs.board(), left_click(0, 0).point(), tile), None);
}

#[test]
fn term_view_side_panel_and_new_game_button() {
    let mut gs = state_from([2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    gs.apply_action(GameAction::Move(tui_2048::types::Direction::Left));
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let mut fb = FrameBuffer::new(0, 0);
    let hits = view.render_into(&mut gs, Viewport::new(80, 24), &mut fb);

    // Board is 42 wide at x = 19; panel starts two columns after it.
    let panel_x = 19 + 42 + 2;
    assert!(fb.row_text(0)[panel_x..].starts_with("2048"));
    assert!(fb.row_text(2).contains("SCORE"));
    assert!(fb.row_text(3).contains('4'));
    assert!(fb.row_text(5).contains("BEST"));
    assert!(fb.row_text(8).contains("MOVES"));
    assert!(fb.row_text(9).contains('1'));

    let button = hits.new_game.expect("panel fits in 80 columns");
    assert_eq!(button.origin().x, panel_x as f32);
    assert_eq!(button.origin().y, 11.0);
    assert!(fb.row_text(12).contains("NEW GAME"));
    assert!(button.hit(left_click(panel_x as u16, 11).point()));
    assert!(!button.hit(left_click(panel_x as u16, 14).point()));
}

#[test]
fn term_view_omits_panel_when_narrow() {
    let mut gs = GameState::with_seed(1);
    let hits = GameView::default().render_into(&mut gs, Viewport::new(42, 17), &mut FrameBuffer::new(0, 0));
    assert!(hits.new_game.is_none());
}

#[test]
fn term_view_shows_game_over_overlay() {
    let values = std::array::from_fn(|i| if (i / 4 + i % 4) % 2 == 0 { 2 } else { 4 });
    let mut gs = state_from(values);
    assert!(gs.game_over());

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&mut gs, Viewport::new(42, 17));
    assert!(fb.row_text(8).contains("GAME OVER"));
}

#[test]
fn term_view_rerender_is_stable() {
    let mut gs = GameState::with_seed(9);
    let view = GameView::default();
    let a = view.render(&mut gs, Viewport::new(60, 20));
    let b = view.render(&mut gs, Viewport::new(60, 20));
    assert_eq!(a, b);
}

#[test]
fn term_view_clamps_oversized_tiles() {
    let mut gs = GameState::with_seed(5);
    let view = GameView::new(20_000, 20_000);
    assert_eq!(view.board_size(), (4 * 64 + 10, 4 * 32 + 5));

    let hits = view.render_into(&mut gs, Viewport::new(80, 24), &mut FrameBuffer::new(0, 0));
    assert_eq!(hits.board.tile_size().x, 64.0);
    assert_eq!(hits.board.tile_size().y, 32.0);
    assert!(hits.new_game.is_none());
}
