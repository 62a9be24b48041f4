//! Terminal miner runner (default binary).
//!
//! Polls crossterm for input within a fixed frame budget, advances the session,
//! and rasterises the scene draw list through the framebuffer renderer.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use tui_miner::config::MinerConfig;
use tui_miner::core::{GameSnapshot, GameState, MonotonicClock, Session, TickOutcome};
use tui_miner::input::InputHandler;
use tui_miner::journal::Journal;
use tui_miner::scene::{render_into, DrawList};
use tui_miner::term::{FrameBuffer, SceneView, StatusView, TerminalRenderer, Viewport};
use tui_miner::types::{CELL_COUNT, ROCK_COUNT};

fn main() -> Result<()> {
    let config = MinerConfig::from_env();
    eprintln!(
        "[Miner] seed={} speed={} step={} frame={}ms",
        config.seed,
        config.player_speed,
        config
            .fixed_step_ms
            .map(|ms| format!("fixed {ms}ms"))
            .unwrap_or_else(|| "variable".to_string()),
        config.frame_ms
    );

    let mut journal = match &config.log_path {
        Some(path) => {
            let journal = Journal::open(path)?;
            eprintln!("[Miner] journal -> {}", path.display());
            journal
        }
        None => Journal::disabled(),
    };

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e);
    }

    let result = run(&mut term, &config, &mut journal);

    // Always try to restore terminal state.
    let _ = term.exit();

    let snap = result?;
    if let Some(err) = journal.error() {
        eprintln!("[Miner] journal disabled after write error: {err}");
    }
    eprintln!(
        "[Miner] session over: {}/{} cells visited, {}/{} rocks mined, treasure {}",
        snap.visited_count(),
        CELL_COUNT,
        snap.mined_count(),
        ROCK_COUNT,
        if snap.treasure_found { "found" } else { "not found" }
    );
    Ok(())
}

fn run<W: Write>(
    term: &mut TerminalRenderer,
    config: &MinerConfig,
    journal: &mut Journal<W>,
) -> Result<GameSnapshot> {
    let state = GameState::new(config.seed).with_speed(config.player_speed);
    let mut session = Session::new(state, config.time_step());
    journal.session_start(config, session.state());

    let mut input = InputHandler::new()
        .with_key_release_timeout_ms(config.key_release_timeout_ms)
        .with_release_events(term.reports_key_releases());
    let view = SceneView::default();
    let mut clock = MonotonicClock::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut list = DrawList::new();
    let frame_budget = Duration::from_millis(config.frame_ms as u64);
    let mut frame_start = Instant::now();

    loop {
        // Render.
        render_into(session.state(), &mut list);
        let status = StatusView::from(&session.state().snapshot());
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&list, Some(&status), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb).context("draw frame")?;

        // Input until the frame budget is spent.
        let deadline = frame_start + frame_budget;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    input.handle_key_event(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Update.
        let elapsed_ms = frame_start.elapsed().as_millis().min(u32::MAX as u128) as u32;
        frame_start = Instant::now();
        input.update(elapsed_ms);

        let outcome = session.advance(&input.snapshot(), &mut clock);
        let tick = session.state().ticks();
        for ev in session.take_events() {
            journal.event(tick, &ev);
        }
        if outcome == TickOutcome::Quit {
            break;
        }
    }

    journal.session_end(&session);
    Ok(session.into_state().snapshot())
}

