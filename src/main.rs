//! Terminal Snake runner (default binary).
//!
//! Single-threaded frame loop: render, wait for input until the next tick is
//! due, apply the input, then let the game advance. It uses crossterm for
//! input and the framebuffer renderer from `tui_snake::term`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameSnapshot, GameState, StepOutcome};
use tui_snake::input::{direction_for_key, should_quit};
use tui_snake::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_snake::{logging, AppConfig};

/// Redraw interval while nothing moves (start delay, reset pause).
const STATIC_RENDER_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting on error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut game = GameState::new(config.seed);
    game.start(now_ms());

    let view = GameView::default();
    let mut throttle = RenderThrottle::new(STATIC_RENDER_MS);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        if throttle.should_render(now_ms(), snap.fingerprint(), snap.holding) {
            let viewport = Viewport::from_terminal_size(crossterm::terminal::size());
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let mut timeout = Duration::from_millis(game.time_until_tick(now_ms()));
        while event::poll(timeout).context("poll terminal events")? {
            match event::read().context("read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!(
                            "quit after {} ticks, run {}",
                            game.tick_count(),
                            game.episode_id() + 1
                        );
                        return Ok(());
                    }
                    if let Some(direction) = direction_for_key(key) {
                        game.steer(direction);
                    }
                }
                Event::Resize(w, h) => {
                    log::debug!("terminal resized to {w}x{h}");
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
            // Drain whatever else is queued without waiting.
            timeout = Duration::ZERO;
        }

        // Tick.
        if let Some(StepOutcome::Reset) = game.update(now_ms()) {
            log::debug!("run {} begins after reset pause", game.episode_id() + 1);
        }
    }
}
