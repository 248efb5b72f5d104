//! Playback progress for the thin bar along the bottom of the mini-player.
//!
//! There is no audio engine, so progress is wall-clock time spent in the
//! playing state, capped at the track duration.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTracker {
    duration: Duration,
    /// Time banked before the current playing stretch
    banked: Duration,
    /// Start of the current playing stretch
    resumed_at: Option<Instant>,
}

impl ProgressTracker {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            banked: Duration::ZERO,
            resumed_at: None,
        }
    }

    /// Follow the play/pause flag. Call whenever it may have changed.
    pub fn sync(&mut self, is_playing: bool, now: Instant) {
        match (is_playing, self.resumed_at) {
            (true, None) => self.resumed_at = Some(now),
            (false, Some(since)) => {
                self.banked += now.saturating_duration_since(since);
                self.resumed_at = None;
            }
            _ => {}
        }
    }

    /// Start over for a newly activated track.
    pub fn reset(&mut self, duration: Duration) {
        *self = Self::new(duration);
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        let running = self
            .resumed_at
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or_default();
        (self.banked + running).min(self.duration)
    }

    /// Fraction played, 0.0 - 1.0.
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        self.elapsed(now).as_secs_f32() / self.duration.as_secs_f32()
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        !self.duration.is_zero() && self.elapsed(now) >= self.duration
    }

    /// Horizontal offset of the filled bar inside a track of `width`:
    /// `-width` when nothing has played, `0` when complete.
    pub fn bar_offset(&self, width: f32, now: Instant) -> f32 {
        -width * (1.0 - self.fraction(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_accumulates_only_while_playing() {
        let t0 = Instant::now();
        let mut progress = ProgressTracker::new(Duration::from_secs(10));

        progress.sync(true, t0);
        progress.sync(false, t0 + 2 * SECOND);
        assert_eq!(progress.elapsed(t0 + 5 * SECOND), 2 * SECOND);

        progress.sync(true, t0 + 5 * SECOND);
        assert_eq!(progress.elapsed(t0 + 6 * SECOND), 3 * SECOND);
    }

    #[test]
    fn test_repeated_sync_is_idempotent() {
        let t0 = Instant::now();
        let mut progress = ProgressTracker::new(Duration::from_secs(10));
        progress.sync(true, t0);
        progress.sync(true, t0 + SECOND);
        assert_eq!(progress.elapsed(t0 + 2 * SECOND), 2 * SECOND);
    }

    #[test]
    fn test_caps_at_duration() {
        let t0 = Instant::now();
        let mut progress = ProgressTracker::new(Duration::from_secs(3));
        progress.sync(true, t0);
        assert_eq!(progress.fraction(t0 + 10 * SECOND), 1.0);
        assert!(progress.is_complete(t0 + 3 * SECOND));
    }

    #[test]
    fn test_reset_clears_progress() {
        let t0 = Instant::now();
        let mut progress = ProgressTracker::new(Duration::from_secs(10));
        progress.sync(true, t0);
        progress.reset(Duration::from_secs(20));
        assert_eq!(progress.elapsed(t0 + 5 * SECOND), Duration::ZERO);
    }

    #[test]
    fn test_bar_offset() {
        let t0 = Instant::now();
        let mut progress = ProgressTracker::new(Duration::from_secs(4));
        assert_eq!(progress.bar_offset(400.0, t0), -400.0);
        progress.sync(true, t0);
        assert_eq!(progress.bar_offset(400.0, t0 + Duration::from_secs(1)), -300.0);
    }

    #[test]
    fn test_zero_duration_never_completes() {
        let progress = ProgressTracker::new(Duration::ZERO);
        assert_eq!(progress.fraction(Instant::now()), 0.0);
        assert!(!progress.is_complete(Instant::now()));
    }
}
