//! Gesture recognition: turns raw pointer samples into pan sessions.
//!
//! - [`PanRecognizer`]: activation gating (hold delay, distance, vertical
//!   speed) and begin/update/end events
//! - [`VelocityTracker`]: release velocity over a short trailing window
//! - [`SwipeTracker`]: horizontal swipe-to-change-track
//! - [`Pager`]: horizontally paged track list

mod pager;
mod pan;
mod swipe;
mod velocity;

pub use pager::Pager;
pub use pan::{PanConfig, PanEvent, PanRecognizer};
pub use swipe::SwipeTracker;
pub use velocity::VelocityTracker;

use std::ops::{Add, Sub};

/// A 2D position, translation or velocity in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
