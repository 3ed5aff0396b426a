use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::types::{Direction, GameAction};

#[test]
fn snapshot_mirrors_game_state() {
    let mut gs = GameState::with_seed(11);
    for step in 0..20 {
        gs.apply_action(GameAction::Move(Direction::ALL[step % 4]));
    }
    let snap = gs.snapshot();
    assert_eq!(snap.board, gs.board().rows());
    assert_eq!(snap.score, gs.score());
    assert_eq!(snap.best, gs.best());
    assert_eq!(snap.moves, gs.moves());
    assert_eq!(snap.max_tile, gs.board().max_tile());
    assert_eq!(snap.game_over, gs.game_over());
    assert_eq!(snap.empty_cells(), gs.board().empty_count());
    assert_eq!(snap.playable(), !gs.game_over());
}

#[test]
fn snapshot_into_overwrites_previous_contents() {
    let mut gs = GameState::with_seed(2);
    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);
    let first = snap;

    gs.restart();
    gs.snapshot_into(&mut snap);
    assert_eq!(snap.episode_id, first.episode_id + 1);
    assert_eq!(snap, gs.snapshot());

    snap.clear();
    assert_eq!(snap, GameSnapshot::default());
}

#[test]
fn snapshot_serializes_to_json() {
    let gs = GameState::with_seed(12345);
    let snap = gs.snapshot();
    let v: serde_json::Value = serde_json::to_value(snap).unwrap();

    let rows = v["board"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    for (r, row) in rows.iter().enumerate() {
        let cells = row.as_array().unwrap();
        assert_eq!(cells.len(), 4);
        for (c, cell) in cells.iter().enumerate() {
            assert_eq!(cell.as_u64(), Some(u64::from(snap.board[r][c])));
        }
    }
    assert_eq!(v["score"], 0);
    assert_eq!(v["best"], 0);
    assert_eq!(v["moves"], 0);
    assert_eq!(v["max_tile"], 2);
    assert_eq!(v["game_over"], false);
    assert_eq!(v["episode_id"], 0);
}
