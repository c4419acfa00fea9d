//! Session controller
//!
//! Owns the simulation state and wires the host's timer and gestures into
//! it. The host calls `on_tick` from one fixed-rate timer and the gesture
//! handlers from the same logical thread; `Game` is a plain owned value with
//! no interior locking.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::difficulty::{Difficulty, ParseDifficultyError, Profile};
use crate::events::{EventSink, GameEvent, NullSink};
use crate::highscores::{NullScoreStore, ScoreStore};
use crate::sim::state::GameState;
use crate::sim::tick::tick;
use crate::sim::trajectory::{AimPreview, launch_velocity};

/// The running game session
pub struct Game<S = NullScoreStore, E = NullSink> {
    state: GameState,
    store: S,
    events: E,
    /// Seeded RNG for the launch-error jitter
    rng: Pcg32,
    /// Set while a drag gesture is in progress
    drag_origin: Option<Vec2>,
}

impl Game {
    /// New session on Medium with no persistence and no event hook
    pub fn new(seed: u64) -> Self {
        Self::with_collaborators(seed, NullScoreStore, NullSink)
    }
}

impl<S: ScoreStore, E: EventSink> Game<S, E> {
    /// New session wired to a best-score store and an event sink
    ///
    /// The best score on record seeds the session; an absent or unreadable
    /// record means zero.
    pub fn with_collaborators(seed: u64, mut store: S, events: E) -> Self {
        let best_score = store.load().unwrap_or(0);
        Self {
            state: GameState::new(Difficulty::default(), best_score),
            store,
            events,
            rng: Pcg32::seed_from_u64(seed),
            drag_origin: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.state.best_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    /// Whether a drag gesture is currently armed
    pub fn is_aiming(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Advance the simulation one fixed step and fan out events
    ///
    /// A new best score is persisted the moment it happens, not just at
    /// session end. The store and sink are best-effort collaborators; the
    /// simulation state is final before either is consulted.
    pub fn on_tick(&mut self) {
        let events = tick(&mut self.state);

        if events.collision {
            self.events.notify(GameEvent::Collision);
        }
        if events.scored {
            self.events.notify(GameEvent::Scored);
            if events.new_best {
                self.store.save(self.state.best_score);
            }
        }
    }

    /// Begin aiming if the press landed near the resting ball
    ///
    /// Returns whether the gesture armed.
    pub fn on_drag_start(&mut self, point: Vec2) -> bool {
        if !self.state.ball.in_flight && point.distance(self.state.ball.pos) < DRAG_ARM_RADIUS {
            self.drag_origin = Some(point);
            true
        } else {
            false
        }
    }

    /// Finish the drag gesture and launch if the shot is strong enough
    ///
    /// Returns whether the ball launched. The aim target comes from the drag
    /// displacement scaled by the profile's sensitivity; Hard's launch jitter
    /// perturbs the solved velocity; the speed clamp caps it at max force.
    /// The minimum-speed guard tests the pre-clamp magnitude.
    pub fn on_drag_end(&mut self, point: Vec2) -> bool {
        let Some(origin) = self.drag_origin.take() else {
            return false;
        };

        let profile = self.state.difficulty.profile();
        let target = self.aim_target(origin, point, &profile);
        let mut vel = launch_velocity(self.state.ball.pos, target, FLIGHT_TICKS);

        if profile.launch_error > 0.0 {
            // One draw perturbs both components; vy gets half the jitter
            let jitter = self
                .rng
                .random_range(-profile.launch_error..profile.launch_error);
            vel.x *= 1.0 + jitter;
            vel.y *= 1.0 + jitter * 0.5;
        }

        let speed = vel.length();
        if speed > profile.max_force {
            vel *= profile.max_force / speed;
        }

        if speed > MIN_LAUNCH_SPEED {
            self.state.ball.launch(vel);
            true
        } else {
            false
        }
    }

    /// Predicted trajectory points for the aim guide, if currently aiming
    ///
    /// Uses the unjittered solver velocity; Hard's launch error is a launch
    /// surprise, not a preview wobble.
    pub fn aim_preview(&self, current: Vec2) -> Option<AimPreview> {
        let origin = self.drag_origin?;
        let profile = self.state.difficulty.profile();
        let target = self.aim_target(origin, current, &profile);
        let vel = launch_velocity(self.state.ball.pos, target, FLIGHT_TICKS);
        Some(AimPreview::new(self.state.ball.pos, vel, FLIGHT_TICKS))
    }

    fn aim_target(&self, origin: Vec2, current: Vec2, profile: &Profile) -> Vec2 {
        let drag = current - origin;
        let mut target = self.state.ball.pos + drag * profile.aim_sensitivity;
        if target.y < AIM_CEILING_Y {
            target.y = AIM_CEILING_Y;
        }
        target
    }

    /// Switch difficulty by user-facing label
    ///
    /// Unrecognized labels are rejected with a diagnostic; the current
    /// profile and ball are untouched. A successful switch always resets the
    /// ball so the new restitution applies immediately, mid-air or not.
    pub fn set_difficulty(&mut self, label: &str) -> Result<(), ParseDifficultyError> {
        match label.parse::<Difficulty>() {
            Ok(level) => {
                self.state.difficulty = level;
                self.reset_ball();
                log::info!("difficulty changed to {level}");
                Ok(())
            }
            Err(err) => {
                log::warn!("difficulty unchanged: {err}");
                Err(err)
            }
        }
    }

    /// Return the ball to the launch point and clear the scoring latch
    pub fn reset_ball(&mut self) {
        self.state.reset_ball();
        self.drag_origin = None;
        self.events.notify(GameEvent::BallReset);
    }

    /// Persist the best score if beaten, zero the score, reset the ball
    pub fn reset_all(&mut self) {
        if self.state.score > self.state.best_score {
            self.state.best_score = self.state.score;
            self.store.save(self.state.best_score);
        }
        self.state.score = 0;
        self.reset_ball();
    }
}
