//! Hoopshot - a drag-to-shoot basketball arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball kinematics, hoop collisions, scoring)
//! - `difficulty`: Closed set of difficulty profiles and label parsing
//! - `game`: Session controller wiring gestures, ticks and resets together
//! - `highscores`: Best-score persistence (best-effort, never fatal)
//! - `events`: Notification hook for the host's audio/UI layer
//!
//! Rendering, widgets and sound playback are the embedding host's job; the
//! crate only computes state and reports events.

pub mod difficulty;
pub mod events;
pub mod game;
pub mod highscores;
pub mod sim;

pub use difficulty::{Difficulty, ParseDifficultyError, Profile};
pub use events::{EventSink, GameEvent, NullSink};
pub use game::Game;
pub use highscores::{FileScoreStore, NullScoreStore, ScoreStore};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per nominal second)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;
    /// Floor line (the court keeps a 10px skirting below it)
    pub const FLOOR_Y: f32 = COURT_HEIGHT - 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    /// X coordinate of the launch rest point
    pub const BALL_START_X: f32 = 100.0;
    /// Gravitational acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Below this absolute speed on both axes a floor contact stops the ball
    pub const REST_THRESHOLD: f32 = 1.0;

    /// Hoop layout, derived from court dimensions
    pub const BACKBOARD_X: f32 = COURT_WIDTH - 150.0;
    pub const BACKBOARD_TOP_Y: f32 = COURT_HEIGHT - 300.0;
    pub const BACKBOARD_WIDTH: f32 = 10.0;
    pub const BACKBOARD_HEIGHT: f32 = 100.0;
    pub const RIM_WIDTH: f32 = 70.0;
    pub const RIM_HEIGHT: f32 = 5.0;
    pub const RIM_Y: f32 = BACKBOARD_TOP_Y + 80.0;
    pub const RIM_RIGHT_X: f32 = BACKBOARD_X - 1.0;
    pub const RIM_LEFT_X: f32 = RIM_RIGHT_X - RIM_WIDTH;
    /// Restitution for backboard and rim bounces (fixed, not difficulty-driven)
    pub const HOOP_RESTITUTION: f32 = 0.7;

    /// Nominal flight time the launch solver aims for
    pub const FLIGHT_TICKS: u32 = 45;
    /// Aim targets are clamped to stay below this ceiling
    pub const AIM_CEILING_Y: f32 = 50.0;
    /// Launches slower than this are discarded
    pub const MIN_LAUNCH_SPEED: f32 = 1.0;
    /// Drag gestures must start within this distance of the ball center
    pub const DRAG_ARM_RADIUS: f32 = BALL_RADIUS * 2.0;
}

/// The fixed point where the ball rests awaiting a launch
#[inline]
pub fn launch_point() -> Vec2 {
    Vec2::new(consts::BALL_START_X, consts::FLOOR_Y - consts::BALL_RADIUS)
}
