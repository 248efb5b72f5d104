//! Time-based transitions and the animated scalar they drive.

use std::time::{Duration, Instant};

/// Easing curves for [`Timing`] transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out, the default curve for timed transitions.
    #[default]
    InOutQuad,
}

impl Easing {
    /// Map linear progress (0.0 - 1.0) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A transition from one value to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub from: f32,
    pub to: f32,
    pub started_at: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Timing {
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing: Easing::default(),
        }
    }

    /// Linear progress at `now`, 0.0 - 1.0.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Value at `now`. Exactly `to` once the duration has elapsed.
    pub fn sample(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

/// A scalar that is either at rest or mid-transition.
///
/// This is the single authoritative value a state machine owns: the latest
/// write wins, and a direct assignment supersedes any running transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatedValue {
    Idle(f32),
    Animating(Timing),
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        AnimatedValue::Idle(value)
    }

    /// Current value at `now`.
    pub fn get(&self, now: Instant) -> f32 {
        match self {
            AnimatedValue::Idle(v) => *v,
            AnimatedValue::Animating(timing) => timing.sample(now),
        }
    }

    /// Assign directly, cancelling any transition.
    pub fn set(&mut self, value: f32) {
        *self = AnimatedValue::Idle(value);
    }

    /// Start a transition from the live value at `now` towards `target`.
    pub fn animate_to(&mut self, target: f32, duration: Duration, now: Instant) {
        let from = self.get(now);
        *self = AnimatedValue::Animating(Timing::new(from, target, now, duration));
    }

    /// Where the value will come to rest.
    pub fn target(&self) -> f32 {
        match self {
            AnimatedValue::Idle(v) => *v,
            AnimatedValue::Animating(timing) => timing.to,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self, AnimatedValue::Animating(t) if !t.is_finished(now))
    }

    /// Collapse a finished transition to its resting value.
    pub fn settle(&mut self, now: Instant) {
        if let AnimatedValue::Animating(timing) = self
            && timing.is_finished(now)
        {
            *self = AnimatedValue::Idle(timing.to);
        }
    }
}
