//! Release velocity estimation.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::Vec2;

/// Samples older than this (relative to the newest) are ignored.
const WINDOW: Duration = Duration::from_millis(100);

/// Estimates pointer velocity from the samples of the last 100 ms.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(Instant, Vec2)>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: Vec2, at: Instant) {
        self.samples.push_back((at, position));
        while let Some(&(oldest, _)) = self.samples.front() {
            if at.saturating_duration_since(oldest) > WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Velocity in units per second across the window. Zero with fewer than
    /// two samples or no elapsed time.
    pub fn velocity(&self) -> Vec2 {
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.front(), self.samples.back())
        else {
            return Vec2::ZERO;
        };
        let dt = t1.saturating_duration_since(t0).as_secs_f32();
        if dt <= 0.0 {
            return Vec2::ZERO;
        }
        (p1 - p0).scale(1.0 / dt)
    }
}
