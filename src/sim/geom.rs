//! Axis-aligned rectangle and circle helpers
//!
//! Screen coordinates: origin top-left, +y points down.

use glam::Vec2;

/// Axis-aligned box, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding square of a circle
    pub fn square_around(center: Vec2, radius: f32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_top_left(&mut self, (x, y): (f32, f32)) {
        self.x = x;
        self.y = y;
    }

    /// Strict overlap test: boxes that only share an edge do not intersect,
    /// and an empty box intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Clamp position so the box lies fully within `[0, width] x [0, height]`
    pub fn clamp_inside(&mut self, width: f32, height: f32) {
        self.x = self.x.clamp(0.0, (width - self.w).max(0.0));
        self.y = self.y.clamp(0.0, (height - self.h).max(0.0));
    }
}

/// Unit vector from `from` toward `to`, or `None` when the points coincide
#[inline]
pub fn unit_toward(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let distance = delta.length();
    if distance == 0.0 {
        return None;
    }
    Some(delta / distance)
}
