//! Draggable sheets that settle on one of two snap points.
//!
//! Two instances drive the player:
//! - [`PanelSheet`]: the mini-player ↔ full-player panel height
//! - [`TabSheet`]: the queue/lyrics/related bottom sheet inside the full player
//!
//! Both share [`SnapSheet`]: a bounded [`AnimatedValue`] plus an optional
//! [`DragSession`]. Dragging writes the value directly; releasing animates it
//! to a snap point. A new drag started mid-transition picks up the live value.

mod panel;
mod tabs;

pub use panel::PanelSheet;
pub use tabs::TabSheet;

use std::time::{Duration, Instant};

use crate::config::GeometryConfig;
use crate::motion::{AnimatedValue, Timing};

/// Screen size the sheets are laid out against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Geometry {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
        }
    }
}

impl From<&GeometryConfig> for Geometry {
    fn from(config: &GeometryConfig) -> Self {
        Self::new(config.screen_width, config.screen_height)
    }
}

/// Which end of the range a sheet settles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapPoint {
    Lower,
    Upper,
}

/// Snap decision on release.
///
/// A flick past `flick_velocity` wins outright: upward (negative) opens,
/// downward closes. Otherwise the sheet opens if it is past `midpoint`.
pub fn snap_decision(value: f32, velocity_y: f32, midpoint: f32, flick_velocity: f32) -> SnapPoint {
    if velocity_y < -flick_velocity {
        SnapPoint::Upper
    } else if velocity_y > flick_velocity {
        SnapPoint::Lower
    } else if value > midpoint {
        SnapPoint::Upper
    } else {
        SnapPoint::Lower
    }
}

/// Per-gesture bookkeeping. Lives from `begin_drag` to `end_drag`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_value: f32,
    pub current_delta: f32,
}

/// A scalar bounded by `[lower, upper]` that can be dragged and snapped.
#[derive(Debug, Clone)]
pub struct SnapSheet {
    value: AnimatedValue,
    lower: f32,
    upper: f32,
    drag: Option<DragSession>,
}

impl SnapSheet {
    /// Create a sheet resting at `initial`. An inverted range collapses to
    /// `lower`.
    pub fn new(initial: f32, lower: f32, upper: f32) -> Self {
        let upper = upper.max(lower);
        Self {
            value: AnimatedValue::new(initial.clamp(lower, upper)),
            lower,
            upper,
            drag: None,
        }
    }

    pub fn lower(&self) -> f32 {
        self.lower
    }

    pub fn upper(&self) -> f32 {
        self.upper
    }

    /// Live value, always inside the bounds.
    pub fn value(&self, now: Instant) -> f32 {
        self.value.get(now).clamp(self.lower, self.upper)
    }

    /// Where the sheet will come to rest.
    pub fn target(&self) -> f32 {
        self.value.target().clamp(self.lower, self.upper)
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.value.is_animating(now)
    }

    pub fn begin_drag(&mut self, now: Instant) {
        let start_value = self.value(now);
        self.value.set(start_value);
        self.drag = Some(DragSession {
            start_value,
            current_delta: 0.0,
        });
    }

    /// Follow the pointer. Negative `delta_y` (upward) grows the value.
    /// Ignored outside a drag.
    pub fn update_drag(&mut self, delta_y: f32) {
        let Some(drag) = self.drag.as_mut() else {
            tracing::trace!(delta_y, "Drag update without an active session");
            return;
        };
        drag.current_delta = delta_y;
        let value = (drag.start_value - delta_y).clamp(self.lower, self.upper);
        self.value.set(value);
    }

    /// Close the drag session and animate to `snap`.
    pub fn end_drag(&mut self, snap: SnapPoint, duration: Duration, now: Instant) -> f32 {
        self.drag = None;
        self.snap_to(snap, duration, now)
    }

    /// Animate to one of the snap points, returning the target.
    pub fn snap_to(&mut self, snap: SnapPoint, duration: Duration, now: Instant) -> f32 {
        let target = match snap {
            SnapPoint::Lower => self.lower,
            SnapPoint::Upper => self.upper,
        };
        let live = self.value(now);
        self.value.set(live);
        self.value.animate_to(target, duration, now);
        target
    }

    /// Replace the bounds, keeping the value inside them.
    ///
    /// A sheet resting on (or heading for) the old upper bound follows it to
    /// the new one; anything else is clamped. A degenerate range has no
    /// upper snap point to follow, so a sheet leaving one stays at lower. A
    /// running transition keeps its remaining time.
    pub fn set_bounds(&mut self, lower: f32, upper: f32, now: Instant) {
        let upper = upper.max(lower);
        let was_upper = self.upper > self.lower && self.value.target() >= self.upper;
        let live = self.value(now);

        self.lower = lower;
        self.upper = upper;

        let target = if was_upper {
            upper
        } else {
            self.value.target().clamp(lower, upper)
        };

        match self.value {
            AnimatedValue::Animating(timing) if !timing.is_finished(now) => {
                let elapsed = now.saturating_duration_since(timing.started_at);
                let remaining = timing.duration.saturating_sub(elapsed);
                self.value = AnimatedValue::Animating(Timing::new(
                    live.clamp(lower, upper),
                    target,
                    now,
                    remaining,
                ));
            }
            _ if self.drag.is_some() => self.value.set(live.clamp(lower, upper)),
            _ => self.value.set(target),
        }

        if let Some(drag) = self.drag.as_mut() {
            drag.start_value = drag.start_value.clamp(lower, upper);
        }
    }

    /// Collapse a finished transition to its resting value.
    pub fn settle(&mut self, now: Instant) {
        self.value.settle(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAP: Duration = Duration::from_millis(400);

    #[test]
    fn test_snap_decision_flicks_win() {
        assert_eq!(snap_decision(81.0, -201.0, 400.0, 200.0), SnapPoint::Upper);
        assert_eq!(snap_decision(799.0, 201.0, 400.0, 200.0), SnapPoint::Lower);
    }

    #[test]
    fn test_snap_decision_midpoint_without_flick() {
        assert_eq!(snap_decision(580.0, 0.0, 400.0, 200.0), SnapPoint::Upper);
        assert_eq!(snap_decision(400.0, 0.0, 400.0, 200.0), SnapPoint::Lower);
        assert_eq!(snap_decision(300.0, -200.0, 400.0, 200.0), SnapPoint::Lower);
        assert_eq!(snap_decision(500.0, 200.0, 400.0, 200.0), SnapPoint::Upper);
    }

    #[test]
    fn test_drag_is_relative_to_start() {
        let t0 = Instant::now();
        let mut sheet = SnapSheet::new(100.0, 80.0, 800.0);
        sheet.begin_drag(t0);
        sheet.update_drag(-50.0);
        sheet.update_drag(-120.0);
        assert_eq!(sheet.value(t0), 220.0);
        assert_eq!(sheet.drag().unwrap().current_delta, -120.0);
    }

    #[test]
    fn test_update_without_session_is_ignored() {
        let t0 = Instant::now();
        let mut sheet = SnapSheet::new(100.0, 80.0, 800.0);
        sheet.update_drag(-300.0);
        assert_eq!(sheet.value(t0), 100.0);
    }

    #[test]
    fn test_begin_drag_supersedes_transition() {
        let t0 = Instant::now();
        let mut sheet = SnapSheet::new(80.0, 80.0, 800.0);
        sheet.snap_to(SnapPoint::Upper, SNAP, t0);

        let mid = t0 + Duration::from_millis(200);
        let live = sheet.value(mid);
        sheet.begin_drag(mid);

        assert!(!sheet.is_animating(mid));
        assert_eq!(sheet.drag().unwrap().start_value, live);
        assert_eq!(sheet.value(mid + Duration::from_secs(1)), live);
    }

    #[test]
    fn test_shrinking_bounds_follows_upper() {
        let t0 = Instant::now();
        let mut sheet = SnapSheet::new(800.0, 80.0, 800.0);
        sheet.set_bounds(80.0, 600.0, t0);
        assert_eq!(sheet.value(t0), 600.0);
        sheet.set_bounds(80.0, 900.0, t0);
        assert_eq!(sheet.value(t0), 900.0);
    }

    #[test]
    fn test_set_bounds_clamps_resting_value() {
        let t0 = Instant::now();
        let mut sheet = SnapSheet::new(500.0, 80.0, 800.0);
        sheet.set_bounds(80.0, 400.0, t0);
        assert_eq!(sheet.value(t0), 400.0);
    }

    #[test]
    fn test_set_bounds_keeps_transition_running() {
        let t0 = Instant::now();
        let mut sheet = SnapSheet::new(80.0, 80.0, 800.0);
        sheet.snap_to(SnapPoint::Upper, SNAP, t0);

        let mid = t0 + Duration::from_millis(100);
        sheet.set_bounds(80.0, 700.0, mid);

        assert!(sheet.is_animating(mid));
        assert_eq!(sheet.target(), 700.0);
        assert_eq!(sheet.value(t0 + SNAP), 700.0);
    }

    #[test]
    fn test_widening_degenerate_range_stays_at_lower() {
        let t0 = Instant::now();
        let mut sheet = SnapSheet::new(64.0, 64.0, 64.0);
        sheet.set_bounds(64.0, 620.0, t0);
        assert_eq!(sheet.value(t0), 64.0);
        assert_eq!(sheet.target(), 64.0);
        assert!(!sheet.is_animating(t0));
    }

    #[test]
    fn test_inverted_bounds_collapse_to_lower() {
        let sheet = SnapSheet::new(64.0, 64.0, 10.0);
        assert_eq!(sheet.upper(), 64.0);
        assert_eq!(sheet.value(Instant::now()), 64.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Dragging never leaves the bounds
        #[test]
        fn drag_stays_in_bounds(
            start in 80.0f32..800.0,
            deltas in prop::collection::vec(-2000.0f32..2000.0, 1..20),
        ) {
            let t0 = Instant::now();
            let mut sheet = SnapSheet::new(start, 80.0, 800.0);
            sheet.begin_drag(t0);
            for delta in deltas {
                sheet.update_drag(delta);
                let v = sheet.value(t0);
                prop_assert!((80.0..=800.0).contains(&v));
            }
        }

        /// Snap transitions stay in bounds at every instant
        #[test]
        fn transition_stays_in_bounds(
            delta in -1000.0f32..1000.0,
            velocity in -1000.0f32..1000.0,
            sample_ms in 0u64..600,
        ) {
            let t0 = Instant::now();
            let mut sheet = SnapSheet::new(80.0, 80.0, 800.0);
            sheet.begin_drag(t0);
            sheet.update_drag(delta);
            let snap = snap_decision(sheet.value(t0), velocity, 400.0, 200.0);
            sheet.end_drag(snap, Duration::from_millis(400), t0);

            let v = sheet.value(t0 + Duration::from_millis(sample_ms));
            prop_assert!((80.0..=800.0).contains(&v));
        }
    }
}
