//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for key and mouse input and the framebuffer renderer from
//! `tui_2048::term`. One key press is one move; the loop only redraws after
//! input or a resize.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::config::{AppConfig, Args};
use tui_2048::core::{tile_at, GameState};
use tui_2048::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_2048::logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, ViewHits, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_env().with_args(&args);

    if args.dump_json {
        let game = GameState::new(config.tile_rng());
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        return Ok(());
    }

    logging::init(config.log_path.as_deref())?;
    tracing::info!(seed = ?config.seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(%err, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameState::new(config.tile_rng());
    let view = GameView::new(config.tile_w, config.tile_h);
    let poll = Duration::from_millis(u64::from(config.tick_ms));

    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;
    let mut hits: Option<ViewHits> = None;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            hits = Some(view.render_into(&mut game, Viewport::new(w, h), &mut fb));
            term.present(&mut fb)?;
            dirty = false;
        }

        if !event::poll(poll)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    tracing::info!(score = game.score(), best = game.best(), "quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let result = game.apply_action(action);
                    dirty = result.changed || action == GameAction::Restart;
                }
            }
            Event::Mouse(mouse) => {
                let (Some(click), Some(hits)) = (handle_mouse_event(mouse), hits.as_ref()) else {
                    continue;
                };
                let point = click.point();
                if hits.new_game.is_some_and(|b| b.hit(point)) {
                    game.apply_action(GameAction::Restart);
                    dirty = true;
                } else if let Some(idx) = tile_at(game.board(), point, hits.board.tile_size()) {
                    tracing::trace!(idx, value = game.board().tile(idx).value(), "tile clicked");
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
