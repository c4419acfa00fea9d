//! Launch-velocity solver and aim preview
//!
//! Closed-form ballistics used both to turn a drag target into a launch
//! velocity and to trace the dotted aim guide. The solver assumes continuous
//! kinematics while the sim applies gravity once per tick, so an N-tick run
//! lands near, not exactly on, the target. Good enough for aiming.

use glam::Vec2;

use crate::consts::*;

/// Initial velocity that reaches `target` from `from` in `flight_ticks` ticks
///
/// `vx = dx/N`, `vy = dy/N - g*N/2` for per-tick gravity `g`.
pub fn launch_velocity(from: Vec2, target: Vec2, flight_ticks: u32) -> Vec2 {
    let t = flight_ticks as f32;
    let d = target - from;
    Vec2::new(d.x / t, d.y / t - 0.5 * GRAVITY * t)
}

/// Lazy sequence of predicted trajectory points for the aim guide
///
/// Simulates forward with the same gravity-then-move rule as the ball, up to
/// [`FLIGHT_TICKS`] points. The point that reaches the floor line or leaves
/// the court is yielded, then iteration stops. Clone to restart.
#[derive(Debug, Clone)]
pub struct AimPreview {
    pos: Vec2,
    vel: Vec2,
    remaining: u32,
    done: bool,
}

impl AimPreview {
    pub fn new(from: Vec2, vel: Vec2, flight_ticks: u32) -> Self {
        Self {
            pos: from,
            vel,
            remaining: flight_ticks,
            done: false,
        }
    }
}

impl Iterator for AimPreview {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.done || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        self.vel.y += GRAVITY;
        self.pos += self.vel;

        if self.pos.y >= FLOOR_Y - BALL_RADIUS
            || self.pos.x <= 0.0
            || self.pos.x >= COURT_WIDTH
            || self.pos.y <= 0.0
        {
            self.done = true;
        }

        Some(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_closed_form_components() {
        let from = Vec2::new(100.0, 570.0);
        let target = Vec2::new(70.0, 495.0);
        let vel = launch_velocity(from, target, 45);
        assert!((vel.x - (-30.0 / 45.0)).abs() < 1e-5);
        assert!((vel.y - (-75.0 / 45.0 - 0.5 * GRAVITY * 45.0)).abs() < 1e-4);
    }

    /// Simulate N ticks of gravity-then-move and compare against the target.
    /// x lands exactly; y carries the known discrete-time bias of g*N/2.
    fn simulate(from: Vec2, mut vel: Vec2, ticks: u32) -> Vec2 {
        let mut pos = from;
        for _ in 0..ticks {
            vel.y += GRAVITY;
            pos += vel;
        }
        pos
    }

    #[test]
    fn test_simulated_flight_lands_near_target() {
        let from = Vec2::new(100.0, 570.0);
        let target = Vec2::new(614.0, 300.0);
        let n = 45;
        let vel = launch_velocity(from, target, n);
        let landed = simulate(from, vel, n);

        assert!((landed.x - target.x).abs() < 1e-3);
        let bias = 0.5 * GRAVITY * n as f32;
        assert!((landed.y - (target.y + bias)).abs() < 1e-2);
    }

    #[test]
    fn test_preview_is_finite_and_restartable() {
        let from = Vec2::new(100.0, 400.0);
        let vel = launch_velocity(from, Vec2::new(400.0, 150.0), FLIGHT_TICKS);
        let preview = AimPreview::new(from, vel, FLIGHT_TICKS);

        let first: Vec<Vec2> = preview.clone().collect();
        let second: Vec<Vec2> = preview.collect();
        assert!(!first.is_empty());
        assert!(first.len() <= FLIGHT_TICKS as usize);
        assert_eq!(first, second);
    }

    #[test]
    fn test_preview_stops_at_floor() {
        // Aim straight down into the floor
        let from = Vec2::new(400.0, 500.0);
        let preview = AimPreview::new(from, Vec2::new(0.0, 40.0), FLIGHT_TICKS);
        let points: Vec<Vec2> = preview.collect();
        assert!(points.len() < FLIGHT_TICKS as usize);
        let last = points.last().unwrap();
        assert!(last.y >= FLOOR_Y - BALL_RADIUS);
        // Every earlier point stayed above the floor line
        for p in &points[..points.len() - 1] {
            assert!(p.y < FLOOR_Y - BALL_RADIUS);
        }
    }

    #[test]
    fn test_preview_stops_at_side_wall() {
        let from = Vec2::new(780.0, 100.0);
        let preview = AimPreview::new(from, Vec2::new(30.0, 0.0), FLIGHT_TICKS);
        let points: Vec<Vec2> = preview.collect();
        assert_eq!(points.len(), 1);
        assert!(points[0].x >= COURT_WIDTH);
    }

    proptest! {
        /// x displacement is always exact; the y bias is exactly g*N/2
        #[test]
        fn predictor_round_trip(
            x0 in 50.0_f32..750.0,
            y0 in 100.0_f32..550.0,
            x1 in 50.0_f32..750.0,
            y1 in 100.0_f32..550.0,
        ) {
            let n = 45;
            let from = Vec2::new(x0, y0);
            let target = Vec2::new(x1, y1);
            let vel = launch_velocity(from, target, n);
            let landed = simulate(from, vel, n);
            prop_assert!((landed.x - target.x).abs() < 1e-2);
            prop_assert!((landed.y - target.y - 0.5 * GRAVITY * n as f32).abs() < 0.1);
        }
    }
}
