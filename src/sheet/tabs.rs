//! The queue/lyrics/related bottom sheet of the full-screen player.

use std::time::{Duration, Instant};

use super::{SnapPoint, SnapSheet, snap_decision};
use crate::config::MotionConfig;

/// Tab-sheet state machine.
///
/// Bounded by `[tab_min_height, safe_area - tab_max_inset]`. The safe area
/// comes from a layout measurement; until it is known the sheet cannot open.
///
/// The release midpoint is computed from `safe_area - tab_snap_inset`, which
/// by default sits 10 units off the clamp bound. The two insets are
/// configured separately.
#[derive(Debug, Clone)]
pub struct TabSheet {
    sheet: SnapSheet,
    safe_area: Option<f32>,
    max_inset: f32,
    snap_inset: f32,
    flick_velocity: f32,
    snap_duration: Duration,
}

impl TabSheet {
    pub fn new(motion: &MotionConfig) -> Self {
        let min = motion.tab_min_height;
        Self {
            sheet: SnapSheet::new(min, min, min),
            safe_area: None,
            max_inset: motion.tab_max_inset,
            snap_inset: motion.tab_snap_inset,
            flick_velocity: motion.flick_velocity,
            snap_duration: motion.tab_snap(),
        }
    }

    /// Record the measured safe-area height and re-bound the sheet.
    pub fn measure_safe_area(&mut self, height: f32, now: Instant) {
        if self.safe_area == Some(height) {
            return;
        }
        self.safe_area = Some(height);
        let lower = self.sheet.lower();
        let upper = height - self.max_inset;
        if upper < lower {
            tracing::warn!(
                height,
                "Safe area too small for the bottom sheet, keeping it closed"
            );
        }
        self.sheet.set_bounds(lower, upper, now);
        tracing::debug!(height, upper = self.sheet.upper(), "Safe area measured");
    }

    pub fn safe_area(&self) -> Option<f32> {
        self.safe_area
    }

    pub fn min_height(&self) -> f32 {
        self.sheet.lower()
    }

    pub fn max_height(&self) -> f32 {
        self.sheet.upper()
    }

    /// Release midpoint, half of `safe_area - tab_snap_inset`.
    pub fn midpoint(&self) -> f32 {
        match self.safe_area {
            Some(height) => (height - self.snap_inset) / 2.0,
            None => self.sheet.lower(),
        }
    }

    pub fn height(&self, now: Instant) -> f32 {
        self.sheet.value(now)
    }

    pub fn target(&self) -> f32 {
        self.sheet.target()
    }

    pub fn is_open(&self, now: Instant) -> bool {
        self.height(now) > self.min_height()
    }

    pub fn is_dragging(&self) -> bool {
        self.sheet.is_dragging()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.sheet.is_animating(now)
    }

    pub fn begin_drag(&mut self, now: Instant) {
        self.sheet.begin_drag(now);
    }

    pub fn update_drag(&mut self, delta_y: f32) {
        self.sheet.update_drag(delta_y);
    }

    pub fn end_drag(&mut self, velocity_y: f32, now: Instant) -> SnapPoint {
        let height = self.height(now);
        let snap = snap_decision(height, velocity_y, self.midpoint(), self.flick_velocity);
        let target = self.sheet.end_drag(snap, self.snap_duration, now);
        tracing::debug!(height, velocity_y, target, "Tab sheet drag ended");
        snap
    }

    /// Open the sheet fully.
    pub fn expand(&mut self, now: Instant) {
        self.sheet.snap_to(SnapPoint::Upper, self.snap_duration, now);
    }

    /// Close the sheet back to the tab strip.
    pub fn collapse(&mut self, now: Instant) {
        self.sheet.snap_to(SnapPoint::Lower, self.snap_duration, now);
    }

    pub fn settle(&mut self, now: Instant) {
        self.sheet.settle(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(safe_area: f32) -> (TabSheet, Instant) {
        let t0 = Instant::now();
        let mut tabs = TabSheet::new(&MotionConfig::default());
        tabs.measure_safe_area(safe_area, t0);
        (tabs, t0)
    }

    #[test]
    fn test_unmeasured_sheet_cannot_open() {
        let t0 = Instant::now();
        let mut tabs = TabSheet::new(&MotionConfig::default());
        assert_eq!(tabs.safe_area(), None);
        tabs.expand(t0);
        assert_eq!(tabs.height(t0 + Duration::from_secs(1)), 64.0);

        tabs.begin_drag(t0);
        tabs.update_drag(-400.0);
        assert_eq!(tabs.height(t0), 64.0);
    }

    #[test]
    fn test_first_measurement_leaves_sheet_closed() {
        let (tabs, t0) = measured(700.0);
        assert_eq!(tabs.max_height(), 620.0);
        assert_eq!(tabs.height(t0), 64.0);
        assert_eq!(tabs.target(), 64.0);
        assert!(!tabs.is_open(t0));
    }

    #[test]
    fn test_growing_from_tiny_safe_area_stays_closed() {
        let (mut tabs, t0) = measured(100.0);
        tabs.measure_safe_area(700.0, t0);
        assert_eq!(tabs.max_height(), 620.0);
        assert_eq!(tabs.height(t0), 64.0);
    }

    #[test]
    fn test_expand_to_safe_area_minus_inset() {
        let (mut tabs, t0) = measured(700.0);
        assert_eq!(tabs.height(t0), 64.0);
        tabs.expand(t0);
        assert_eq!(tabs.target(), 620.0);
        assert_eq!(tabs.height(t0 + Duration::from_millis(300)), 620.0);
    }

    #[test]
    fn test_drag_clamps_to_bounds() {
        let (mut tabs, t0) = measured(700.0);
        tabs.begin_drag(t0);
        tabs.update_drag(-1000.0);
        assert_eq!(tabs.height(t0), 620.0);
        tabs.update_drag(1000.0);
        assert_eq!(tabs.height(t0), 64.0);
    }

    #[test]
    fn test_release_uses_snap_inset_midpoint() {
        let (mut tabs, t0) = measured(700.0);
        assert_eq!(tabs.midpoint(), 315.0);

        tabs.begin_drag(t0);
        tabs.update_drag(-252.0);
        assert_eq!(tabs.height(t0), 316.0);
        assert_eq!(tabs.end_drag(0.0, t0), SnapPoint::Upper);

        let t1 = t0 + Duration::from_millis(300);
        tabs.begin_drag(t1);
        tabs.update_drag(305.0);
        assert_eq!(tabs.height(t1), 315.0);
        assert_eq!(tabs.end_drag(0.0, t1), SnapPoint::Lower);
    }

    #[test]
    fn test_flick_closes() {
        let (mut tabs, t0) = measured(700.0);
        tabs.begin_drag(t0);
        tabs.update_drag(-500.0);
        assert_eq!(tabs.end_drag(500.0, t0), SnapPoint::Lower);
    }

    #[test]
    fn test_collapse_after_expand() {
        let (mut tabs, t0) = measured(700.0);
        tabs.expand(t0);
        let t1 = t0 + Duration::from_millis(300);
        assert!(tabs.is_open(t1));
        tabs.collapse(t1);
        assert_eq!(tabs.height(t1 + Duration::from_millis(300)), 64.0);
    }

    #[test]
    fn test_tiny_safe_area_keeps_sheet_closed() {
        let (mut tabs, t0) = measured(100.0);
        assert_eq!(tabs.max_height(), 64.0);
        tabs.expand(t0);
        assert_eq!(tabs.height(t0 + Duration::from_secs(1)), 64.0);
    }

    #[test]
    fn test_remeasure_follows_open_sheet() {
        let (mut tabs, t0) = measured(700.0);
        tabs.expand(t0);
        let t1 = t0 + Duration::from_millis(300);
        tabs.settle(t1);
        tabs.measure_safe_area(600.0, t1);
        assert_eq!(tabs.height(t1), 520.0);
    }
}
