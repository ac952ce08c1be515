//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for mouse and keyboard input and the framebuffer renderer
//! from the term crate. Logs go to a file because the game owns the screen.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

use tui_memory::core::{Outcome, Run, RunSnapshot};
use tui_memory::input::{click_point, handle_key_event, should_quit, BoardCursor};
use tui_memory::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer};
use tui_memory::types::{MemoryAction, Viewport, STATIC_RENDER_INTERVAL_MS, TICK_MS};

fn main() -> Result<()> {
    let _logger = init_logging()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Some(Outcome::Completed) => println!("All levels complete!"),
        Some(Outcome::Failed { level, status }) => {
            println!("Game over on level {level} ({status:?}).")
        }
        None => {}
    }
    Ok(())
}

fn init_logging() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(std::env::temp_dir())
                .basename("tui-memory"),
        )
        .format(flexi_logger::opt_format)
        .start()?;
    Ok(handle)
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

/// Returns the run outcome, or `None` if the player quit.
fn run(term: &mut TerminalRenderer) -> Result<Option<Outcome>> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut run = Run::new(seed_from_clock(), viewport, now_ms());

    let view = GameView::new();
    let mut cursor = BoardCursor::new();
    let mut throttle = RenderThrottle::new(STATIC_RENDER_INTERVAL_MS);
    let mut snap = RunSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let now = now_ms();
        run.snapshot_into(now, &mut snap);
        cursor.clamp(snap.round.grid_dimension);
        if throttle.should_render(now, fingerprint(&snap, &cursor), true) {
            view.render_into_with_cursor(&snap, Some(cursor.position()), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if run.is_finished() {
            return Ok(run.outcome());
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit at level {}", run.level());
                        return Ok(None);
                    }
                    match handle_key_event(key) {
                        Some(MemoryAction::Flip) => {
                            let (row, col) = cursor.position();
                            run.select_at(row, col, now_ms());
                        }
                        Some(action) => {
                            cursor.apply(action, snap.round.grid_dimension);
                        }
                        None => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(point) = click_point(mouse) {
                        run.handle_click(point, now_ms());
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    run.set_viewport(viewport);
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            run.tick(now_ms());
        }
    }
}

fn fingerprint(snap: &RunSnapshot, cursor: &BoardCursor) -> u64 {
    let mut hasher = DefaultHasher::new();
    snap.hash(&mut hasher);
    cursor.hash(&mut hasher);
    hasher.finish()
}
