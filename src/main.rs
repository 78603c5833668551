//! Terminal shadowpile runner.
//!
//! The host owns the clock, the keyboard and the screen: each frame it hands
//! the session at most one decoded key and the measured delta, then realizes
//! the session's draw primitives on the terminal.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use shadowpile::audio::MusicEngine;
use shadowpile::config::Config;
use shadowpile::core::{GameSession, Transition};
use shadowpile::input::{decode, should_quit};
use shadowpile::term::{ParticleField, SceneView, TerminalRenderer, Viewport};
use shadowpile::types::{Phase, TICK_MS};

fn main() -> Result<()> {
    let config = Config::load()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: Config) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut session = GameSession::with_tuning(seed, config.tuning);
    let mut particles = ParticleField::new(seed.wrapping_add(1));
    let mut view = SceneView::default();

    let mut music = MusicEngine::new();
    if config.music {
        if let Some(music) = music.as_mut() {
            music.play();
        }
    }

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut pending_key = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, &particles, Viewport::new(w, h));
        term.draw(fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        stop_music(&mut music);
                        return Ok(());
                    }
                    // A later press within the frame overwrites an earlier
                    // one; input is lossy by design.
                    if let Some(k) = decode(key.code) {
                        pending_key = Some(k);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let dt_ms = last_tick.elapsed().as_millis() as u32;
            last_tick = Instant::now();

            if session.phase() != Phase::Game {
                particles.advance(dt_ms);
            }

            match session.update(pending_key.take(), dt_ms) {
                Transition::ExitRequested => {
                    stop_music(&mut music);
                    return Ok(());
                }
                Transition::EnterGame => {
                    if config.music {
                        if let Some(music) = music.as_mut() {
                            music.rewind();
                        }
                    }
                }
                Transition::EnterCredits
                | Transition::ReturnToMenu { .. }
                | Transition::None => {}
            }
        }
    }
}

fn stop_music(music: &mut Option<MusicEngine>) {
    if let Some(music) = music.as_mut() {
        music.stop();
    }
}
