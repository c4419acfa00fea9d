//! Hoopshot headless demo
//!
//! Runs a short scripted session at the fixed tick rate: a few shots at the
//! hoop on each difficulty, events logged as they happen. Mostly useful as a
//! smoke test and an example of driving the core from a host loop.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;
use hoopshot::consts::*;
use hoopshot::{EventSink, FileScoreStore, Game, GameEvent};

/// Sink that logs every event
struct LogSink;

impl EventSink for LogSink {
    fn notify(&mut self, event: GameEvent) {
        match event {
            GameEvent::Collision => log::debug!("clang! hoop collision"),
            GameEvent::Scored => log::info!("swish! basket made"),
            GameEvent::BallReset => log::debug!("ball back on the spot"),
        }
    }
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("hoopshot demo starting (seed {seed})");

    let store = FileScoreStore::new("highscore.json");
    let mut game = Game::with_collaborators(seed, store, LogSink);

    let tick_interval = Duration::from_secs(1) / TICKS_PER_SECOND;

    for level in ["easy", "medium", "hard"] {
        if game.set_difficulty(level).is_err() {
            continue;
        }
        log::info!("--- shooting on {level} ---");

        for _ in 0..3 {
            shoot_at_hoop(&mut game);

            // Run the shot to rest at the nominal tick rate
            let mut next_tick = Instant::now();
            let mut ticks = 0u32;
            while game.state().ball.in_flight && ticks < 10 * TICKS_PER_SECOND {
                game.on_tick();
                ticks += 1;
                next_tick += tick_interval;
                if let Some(wait) = next_tick.checked_duration_since(Instant::now()) {
                    std::thread::sleep(wait);
                }
            }
            game.reset_ball();
        }
    }

    log::info!(
        "session over: {} baskets, best ever {}",
        game.score(),
        game.best_score()
    );
    game.reset_all();
}

/// Drag from the ball toward a release point that arcs at the rim opening
fn shoot_at_hoop(game: &mut Game<FileScoreStore, LogSink>) {
    let ball = game.state().ball.pos;
    let sensitivity = game.difficulty().profile().aim_sensitivity;

    // Aim well above the rim center so the ball drops through the opening
    let target = Vec2::new((RIM_LEFT_X + RIM_RIGHT_X) / 2.0, RIM_Y - 150.0);
    let release = ball + (target - ball) / sensitivity;

    if !game.on_drag_start(ball) {
        log::warn!("ball not at rest, skipping shot");
        return;
    }

    if let Some(preview) = game.aim_preview(release) {
        log::debug!("aim guide has {} points", preview.count());
    }

    if !game.on_drag_end(release) {
        log::warn!("shot too weak, discarded");
    }
}
