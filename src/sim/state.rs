//! Game state and core simulation types
//!
//! All mutable session state lives here; the tick handler and the gesture
//! handlers both work against one owned `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hoop::Hoop;
use crate::consts::*;
use crate::difficulty::Difficulty;
use crate::launch_point;

/// The ball: position, velocity, and flight state
///
/// Replaced wholesale on every reset so the floor restitution captured at
/// construction never outlives a difficulty change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// While false the ball sits still and integration is a no-op
    pub in_flight: bool,
    /// Floor bounce coefficient, copied from the active profile at reset time
    floor_restitution: f32,
}

impl Ball {
    /// Create a ball at rest at the given position
    pub fn at_rest(pos: Vec2, floor_restitution: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            in_flight: false,
            floor_restitution,
        }
    }

    pub fn floor_restitution(&self) -> f32 {
        self.floor_restitution
    }

    /// Set velocity and take flight
    ///
    /// No magnitude guard here; the gesture layer clamps to the profile's
    /// max force before calling.
    pub fn launch(&mut self, vel: Vec2) {
        self.vel = vel;
        self.in_flight = true;
    }

    /// Advance one tick: gravity, then position, then floor bounce
    ///
    /// Semi-implicit Euler with a fixed per-tick step. When a floor contact
    /// leaves both velocity components below [`REST_THRESHOLD`], the ball
    /// latches to rest with velocity exactly zero.
    pub fn integrate(&mut self, floor_y: f32) {
        if !self.in_flight {
            return;
        }

        self.vel.y += GRAVITY;
        self.pos += self.vel;

        if self.pos.y + BALL_RADIUS >= floor_y {
            self.pos.y = floor_y - BALL_RADIUS;
            self.vel.y *= -self.floor_restitution;

            if self.vel.y.abs() < REST_THRESHOLD && self.vel.x.abs() < REST_THRESHOLD {
                self.in_flight = false;
                self.vel = Vec2::ZERO;
            }
        }
    }

    /// Reflect off the left, top and right court boundaries
    ///
    /// The three checks are independent and may all fire in one tick. Each
    /// clamps position flush to the wall and inverts the offending velocity
    /// component scaled by the difficulty's wall restitution.
    pub fn resolve_wall_collisions(&mut self, width: f32, wall_restitution: f32) {
        if self.pos.x - BALL_RADIUS <= 0.0 {
            self.pos.x = BALL_RADIUS;
            self.vel.x *= -wall_restitution;
        }

        if self.pos.y - BALL_RADIUS <= 0.0 {
            self.pos.y = BALL_RADIUS;
            self.vel.y *= -wall_restitution;
        }

        if self.pos.x + BALL_RADIUS >= width {
            self.pos.x = width - BALL_RADIUS;
            self.vel.x *= -wall_restitution;
        }
    }
}

/// Complete session state owned by the game controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Baskets made this session
    pub score: u32,
    /// Best score ever seen (seeded from the score store at startup)
    pub best_score: u32,
    /// Active difficulty level
    pub difficulty: Difficulty,
    pub ball: Ball,
    pub hoop: Hoop,
}

impl GameState {
    pub fn new(difficulty: Difficulty, best_score: u32) -> Self {
        let floor_restitution = difficulty.profile().wall_restitution;
        Self {
            score: 0,
            best_score,
            difficulty,
            ball: Ball::at_rest(launch_point(), floor_restitution),
            hoop: Hoop::new(),
        }
    }

    /// Ball-only reset: fresh ball at the launch point, scoring latch cleared
    ///
    /// The replacement ball captures the current profile's restitution, so a
    /// difficulty change right before this takes effect immediately.
    pub fn reset_ball(&mut self) {
        let floor_restitution = self.difficulty.profile().wall_restitution;
        self.ball = Ball::at_rest(launch_point(), floor_restitution);
        self.hoop.reset_latch();
    }
}
