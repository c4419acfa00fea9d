//! Hoop collision surfaces and the scoring latch
//!
//! Two static rectangles (backboard and rim top strip) plus a one-bit
//! detector for the ball passing down through the rim opening.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Ball;
use crate::consts::*;

/// Backboard, rim, and the scoring latch that belongs to them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hoop {
    backboard: Rect,
    rim: Rect,
    /// Armed once the ball has been above the scoring line inside the
    /// rim opening; cleared on score and on every ball reset
    passed_through_top: bool,
}

impl Default for Hoop {
    fn default() -> Self {
        Self::new()
    }
}

impl Hoop {
    /// Geometry derives deterministically from the court constants
    pub fn new() -> Self {
        Self {
            backboard: Rect::new(
                BACKBOARD_X,
                BACKBOARD_TOP_Y,
                BACKBOARD_WIDTH,
                BACKBOARD_HEIGHT,
            ),
            rim: Rect::new(RIM_LEFT_X, RIM_Y, RIM_WIDTH, RIM_HEIGHT),
            passed_through_top: false,
        }
    }

    pub fn backboard(&self) -> &Rect {
        &self.backboard
    }

    pub fn rim(&self) -> &Rect {
        &self.rim
    }

    /// The y line the ball must cross downward to score
    #[inline]
    pub fn scoring_line(&self) -> f32 {
        self.rim.mid_y()
    }

    pub fn is_armed(&self) -> bool {
        self.passed_through_top
    }

    /// Clear the scoring latch (done on every ball reset)
    pub fn reset_latch(&mut self) {
        self.passed_through_top = false;
    }

    /// Resolve ball collisions against the backboard, then the rim
    ///
    /// The order is a behavioral contract: both checks can reposition the
    /// ball within one tick and the rim sees the backboard's result.
    pub fn resolve_collision(&self, ball: &mut Ball) {
        if !ball.in_flight {
            return;
        }

        // Backboard: left face only, and only while closing on it
        if ball.pos.x + BALL_RADIUS > self.backboard.x
            && ball.pos.x < self.backboard.right()
            && ball.pos.y > self.backboard.y
            && ball.pos.y < self.backboard.bottom()
            && ball.vel.x > 0.0
        {
            ball.pos.x = self.backboard.x - BALL_RADIUS;
            ball.vel.x *= -HOOP_RESTITUTION;
        }

        // Rim top strip: lower edge of the ball inside the strip, moving down.
        // vx is damped but not inverted so the ball keeps its travel direction.
        if ball.pos.x + BALL_RADIUS > self.rim.x
            && ball.pos.x - BALL_RADIUS < self.rim.right()
            && ball.pos.y + BALL_RADIUS > self.rim.y
            && ball.pos.y + BALL_RADIUS < self.rim.bottom()
            && ball.vel.y > 0.0
        {
            ball.pos.y = self.rim.y - BALL_RADIUS;
            ball.vel.y *= -HOOP_RESTITUTION;
            ball.vel.x *= HOOP_RESTITUTION;
        }
    }

    /// Run the scoring state machine for this tick
    ///
    /// Arms when the ball center is inside the rim opening above the scoring
    /// line; fires exactly once when, still inside the opening, it crosses
    /// below the line moving downward. Leaving the opening sideways while
    /// armed does NOT clear the latch; the ball may drift back in and still
    /// score.
    pub fn check_score(&mut self, ball: &Ball) -> bool {
        if !ball.in_flight {
            return false;
        }

        let over_opening = ball.pos.x > self.rim.x && ball.pos.x < self.rim.right();
        let line = self.scoring_line();

        if over_opening && ball.pos.y < line {
            self.passed_through_top = true;
        }

        if self.passed_through_top && over_opening && ball.pos.y > line && ball.vel.y > 0.0 {
            self.passed_through_top = false;
            return true;
        }

        false
    }
}
