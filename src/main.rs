//! Terminal runner (default binary).
//!
//! Fixed-tick driver around the simulation core: collect key presses into
//! the command queue, advance one step per tick (~30 steps/s), render the
//! grid in between. The core never schedules itself; this loop owns the
//! cadence.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_boulders::core::{GameState, DEFAULT_LEVEL};
use tui_boulders::input::{handle_key_event, should_quit};
use tui_boulders::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_boulders::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::load(DEFAULT_LEVEL)?;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render between steps, never during one.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game.grid(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.enqueue(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Step: resolve queued commands, then one gravity pass.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.step();
        }
    }
}
