//! Terminal memory game runner (default binary).
//!
//! crossterm delivers key and mouse input; the grid is drawn through the
//! framebuffer renderer. The game clock advances on a fixed timestep so the
//! mismatch delay runs between input events.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use memory_match::core::GameState;
use memory_match::input::{is_card_click, is_dismiss_key, should_quit, InputHandler};
use memory_match::term::{
    view_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, ViewOverlay,
    Viewport,
};
use memory_match::types::{GameAction, TICK_MS};
use memory_match::GameConfig;

/// Redraw at least this often even when nothing changed.
const STATIC_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    init_tracing(config.log_path.as_deref())?;
    info!(
        seed = config.seed,
        mismatch_delay_ms = config.mismatch_delay_ms,
        "starting memory-match"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("game loop failed: {e:#}");
    }
    result
}

/// Logs go to `log_path` only; with no path nothing is written, so the TUI
/// never gets overdrawn.
fn init_tracing(log_path: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(path) = log_path else {
        tracing_subscriber::registry().with(env_filter).init();
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();
    Ok(())
}

fn apply(game: &mut GameState, action: GameAction) {
    let accepted = game.apply_action(action);
    debug!(action = action.as_str(), accepted, "action applied");
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameState::new(config.seed).with_mismatch_delay_ms(config.mismatch_delay_ms);

    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut overlay = ViewOverlay::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        // Render.
        let snap = game.snapshot();
        overlay.cursor = Some(input.cursor());
        let fingerprint = view_fingerprint(&snap, &overlay, viewport);
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint, snap.is_static()) {
            view.render_into_with_overlay(&snap, &overlay, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if overlay.notice.is_some() {
                        // The notice is modal: only dismiss or quit get through.
                        if is_dismiss_key(key) {
                            overlay.notice = None;
                        } else if should_quit(key) {
                            return Ok(());
                        }
                    } else if should_quit(key) {
                        return Ok(());
                    } else if let Some(action) = input.handle_key_press(key) {
                        apply(&mut game, action);
                    }
                }
                Event::Mouse(mouse) if overlay.notice.is_none() && is_card_click(mouse) => {
                    if let Some(id) = view.card_at(viewport, mouse.column, mouse.row) {
                        input.set_cursor(id);
                        apply(&mut game, GameAction::Select(id));
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        if let Some(notice) = game.take_notice() {
            info!(?notice, "showing notice");
            overlay.notice = Some(notice);
        }
    }
}
