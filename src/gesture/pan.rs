//! Pan gesture recognition with activation gating.

use std::time::{Duration, Instant};

use super::{Vec2, VelocityTracker};

/// Activation rules for a pan.
///
/// A pressed pointer is *pending* until the hold delay has passed and then,
/// if any movement criterion is configured, until one of them is met. With
/// no criteria the pan activates as soon as the hold delay is over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanConfig {
    /// Pointer must be held this long first
    pub long_press: Option<Duration>,
    /// Distance from the press point (0 disables)
    pub min_distance: f32,
    /// Absolute vertical speed in units/s (0 disables)
    pub min_velocity_y: f32,
}

impl PanConfig {
    /// Activates on any movement past `min_distance`.
    pub fn distance(min_distance: f32) -> Self {
        Self {
            long_press: None,
            min_distance,
            min_velocity_y: 0.0,
        }
    }

    /// Activates after a hold, once the pointer moves vertically fast enough.
    pub fn long_press(delay: Duration, min_velocity_y: f32) -> Self {
        Self {
            long_press: Some(delay),
            min_distance: 0.0,
            min_velocity_y,
        }
    }
}

/// Events emitted by an active pan. Translations are relative to the press
/// point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanEvent {
    Began,
    Updated { translation: Vec2, velocity: Vec2 },
    Ended { velocity: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pending { origin: Vec2, pressed_at: Instant },
    Active { origin: Vec2 },
}

/// Recognizes one pan at a time.
#[derive(Debug, Clone)]
pub struct PanRecognizer {
    config: PanConfig,
    phase: Phase,
    last: Vec2,
    velocity: VelocityTracker,
}

impl PanRecognizer {
    pub fn new(config: PanConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            last: Vec2::ZERO,
            velocity: VelocityTracker::new(),
        }
    }

    pub fn config(&self) -> PanConfig {
        self.config
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// Translation from the press point to the latest sample.
    pub fn translation(&self) -> Vec2 {
        match self.phase {
            Phase::Idle => Vec2::ZERO,
            Phase::Pending { origin, .. } | Phase::Active { origin } => self.last - origin,
        }
    }

    pub fn press(&mut self, position: Vec2, now: Instant) {
        self.phase = Phase::Pending {
            origin: position,
            pressed_at: now,
        };
        self.last = position;
        self.velocity.clear();
        self.velocity.push(position, now);
    }

    /// Feed a pointer sample.
    pub fn move_to(&mut self, position: Vec2, now: Instant) -> Option<PanEvent> {
        if matches!(self.phase, Phase::Idle) {
            return None;
        }
        self.last = position;
        self.velocity.push(position, now);

        match self.phase {
            Phase::Pending { .. } => self.try_activate(now),
            Phase::Active { origin } => Some(PanEvent::Updated {
                translation: position - origin,
                velocity: self.velocity.velocity(),
            }),
            Phase::Idle => None,
        }
    }

    /// Re-check activation without a new sample, for a pointer held still.
    pub fn tick(&mut self, now: Instant) -> Option<PanEvent> {
        if self.is_pending() {
            self.velocity.push(self.last, now);
            self.try_activate(now)
        } else {
            None
        }
    }

    /// Pointer released. A pan that never activated was a tap and emits
    /// nothing.
    pub fn release(&mut self, now: Instant) -> Option<PanEvent> {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Active { .. } => {
                self.velocity.push(self.last, now);
                Some(PanEvent::Ended {
                    velocity: self.velocity.velocity(),
                })
            }
            _ => None,
        }
    }

    /// Abandon the current pointer without emitting anything.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.velocity.clear();
    }

    fn try_activate(&mut self, now: Instant) -> Option<PanEvent> {
        let Phase::Pending { origin, pressed_at } = self.phase else {
            return None;
        };

        if let Some(delay) = self.config.long_press
            && now.saturating_duration_since(pressed_at) < delay
        {
            return None;
        }

        let by_distance = self.config.min_distance > 0.0;
        let by_velocity = self.config.min_velocity_y > 0.0;
        let moved = (self.last - origin).length();
        let speed_y = self.velocity.velocity().y.abs();

        let activate = match (by_distance, by_velocity) {
            (false, false) => true,
            _ => {
                (by_distance && moved >= self.config.min_distance)
                    || (by_velocity && speed_y >= self.config.min_velocity_y)
            }
        };

        if activate {
            self.phase = Phase::Active { origin };
            tracing::trace!(moved, speed_y, "Pan activated");
            Some(PanEvent::Began)
        } else {
            None
        }
    }
}
