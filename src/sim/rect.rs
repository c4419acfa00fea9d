//! Axis-aligned rectangle geometry for the hoop surfaces
//!
//! The backboard and rim are static rectangles; collision response only ever
//! uses one face of each, so this stays deliberately minimal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left anchored, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Vertical midline y
    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Check if a point lies strictly inside the rectangle
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}
