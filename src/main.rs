//! Terminal Snake runner (default binary).
//!
//! Single-threaded loop: draw, wait for input until the next step is due,
//! step. Score persistence runs on its own tokio runtime inside the reporter.

use std::env;
use std::fs::File;
use std::sync::Mutex;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_snake::adapter::ScoreReporter;
use tui_snake::core::{GameConfig, GameState};
use tui_snake::engine::{Session, TickClock};
use tui_snake::input::{should_quit, InputHandler};
use tui_snake::term::{
    BellAudio, FrameBuffer, GameView, ProfileView, RenderThrottle, TerminalRenderer, Viewport,
};
use tui_snake::types::GameAction;

// Keep-alive redraw interval while the board is static.
const IDLE_REFRESH_MS: u64 = 250;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    config.validate().context("invalid board configuration")?;
    let seed = seed_from_env();
    info!(
        board_width = config.board_width,
        board_height = config.board_height,
        cell_size = config.cell_size,
        tick_ms = config.tick_ms,
        seed,
        "starting"
    );

    let reporter = ScoreReporter::start_from_env();
    let mut session = Session::new(GameState::with_config(config, seed))
        .with_observer(BellAudio::stdout(flag("SNAKE_SOUND")));
    if let Some(reporter) = &reporter {
        session.add_observer(reporter.sink());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, reporter.as_ref());

    // Always try to restore terminal state.
    let _ = term.exit();

    // The session holds a sink into the reporter; drop it so shutdown can drain.
    drop(session);
    if let Some(reporter) = reporter {
        let profile = reporter.shutdown();
        info!(best = profile.best_score, games = profile.games_played, "bye");
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut Session,
    reporter: Option<&ScoreReporter>,
) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut clock = TickClock::from_millis(session.state().config().tick_ms);
    let mut throttle = RenderThrottle::new(IDLE_REFRESH_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let epoch = Instant::now();

    loop {
        let phase = session.snapshot().phase;
        input.observe_phase(phase);

        // Render.
        let now_ms = epoch.elapsed().as_millis() as u64;
        if throttle.should_render_snapshot(now_ms, session.snapshot()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let profile = reporter.map(|r| {
                let p = r.profile();
                ProfileView {
                    best_score: p.best_score,
                    games_played: p.games_played,
                }
            });
            view.render_into_with_profile(
                session.snapshot(),
                profile.as_ref(),
                Viewport::new(w, h),
                &mut fb,
            );
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next step.
        if event::poll(clock.timeout())? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = input.handle_key(key, phase) {
                        let accepted = session.apply(action);
                        // A (re)started or resumed game gets a full first step.
                        if accepted && action == GameAction::Start {
                            clock.reset_at(Instant::now());
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Step.
        if clock.poll() {
            session.tick();
        }
    }
}

/// Log to `SNAKE_LOG_PATH` when set. The terminal belongs to the game, so
/// there is no stderr fallback.
fn init_logging() -> Result<()> {
    let Some(path) = env::var("SNAKE_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tui_snake=info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("cannot install log subscriber")?;
    Ok(())
}

fn seed_from_env() -> u32 {
    env::var("SNAKE_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
}

fn flag(key: &str) -> bool {
    env::var(key)
        .map(|v| {
            let v = v.trim();
            v == "1" || v.eq_ignore_ascii_case("true")
        })
        .unwrap_or(false)
}
