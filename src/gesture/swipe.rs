//! Horizontal swipe-to-change-track.

use crate::player::Direction;

/// Tracks the live horizontal drag of the active track.
///
/// Swiping right past the threshold goes to the previous track; left goes to
/// the next. The offset snaps back to zero on every release.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    translated_x: f32,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            translated_x: 0.0,
            threshold,
        }
    }

    /// Live horizontal offset applied to every track item.
    pub fn translated_x(&self) -> f32 {
        self.translated_x
    }

    pub fn update(&mut self, translation_x: f32) {
        self.translated_x = translation_x;
    }

    /// Finish the swipe, returning where to navigate (if anywhere).
    pub fn release(&mut self) -> Option<Direction> {
        let direction = if self.translated_x > self.threshold {
            Some(Direction::Prev)
        } else if self.translated_x < -self.threshold {
            Some(Direction::Next)
        } else {
            None
        };
        self.translated_x = 0.0;
        direction
    }
}
