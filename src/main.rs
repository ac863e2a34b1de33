//! Terminal dodge runner (default binary).
//!
//! Turn-based: nothing happens between key presses. Each press is mapped to a
//! game input, applied to the engine, and the resulting frame is drawn.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_dodge::engine::{Flow, Game};
use tui_dodge::input::map_key_event;
use tui_dodge::term::{FrameBuffer, FrameKind, GameView, TerminalRenderer, Viewport};
use tui_dodge::{logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    logging::init(&config)?;

    let mut game = match config.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    info!(seed = ?config.seed, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        tracing::error!(?err, "failed to restore terminal");
    }
    let snap = game.snapshot();
    info!(
        score = snap.score,
        enemies = snap.enemies,
        episode_id = snap.episode_id,
        "quit"
    );
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let kind = if game.game_over() {
            FrameKind::Message
        } else {
            FrameKind::Field
        };
        view.render_into(&game.render(), kind, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(input) = map_key_event(key) {
                    if game.handle_input(input) == Flow::Quit {
                        return Ok(());
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
