//! Terminal gridfall runner (default binary).
//!
//! This is the gameplay entrypoint. It uses crossterm for input and a
//! framebuffer-based renderer, and drives the core session with one update
//! per frame. Input is edge-triggered: each key press event maps to exactly
//! one action in the next frame's batch.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{GameSession, GameSnapshot};
use gridfall::input::{map_key, should_quit};
use gridfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use gridfall::types::{GameAction, FRAME_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut session = GameSession::new(seed);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_frame = Instant::now();
    let mut actions: Vec<GameAction> = Vec::new();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next frame boundary.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Presses only; repeat and release kinds are not actions.
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        actions.push(action);
                    }
                }
            }
        }

        // Frame boundary: advance the session by the measured elapsed time.
        if last_frame.elapsed() >= frame {
            let elapsed = last_frame.elapsed();
            last_frame = Instant::now();
            session.update(elapsed, &actions);
            actions.clear();
        }
    }
}
