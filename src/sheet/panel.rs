//! The player panel: a single height between the docked mini-player and
//! the full-screen player.

use std::time::{Duration, Instant};

use super::{Geometry, SnapPoint, SnapSheet, snap_decision};
use crate::config::MotionConfig;

/// Height state machine for the player panel.
///
/// The height is bounded by `[collapsed_height, screen_height]`. It is only
/// written by a drag update or by a transition to one of those two ends.
#[derive(Debug, Clone)]
pub struct PanelSheet {
    sheet: SnapSheet,
    geometry: Geometry,
    flick_velocity: f32,
    drag_snap: Duration,
    tap_snap: Duration,
}

impl PanelSheet {
    /// A collapsed panel for the given screen.
    pub fn new(geometry: Geometry, motion: &MotionConfig) -> Self {
        let collapsed = motion.collapsed_height;
        Self {
            sheet: SnapSheet::new(collapsed, collapsed, geometry.screen_height),
            geometry,
            flick_velocity: motion.flick_velocity,
            drag_snap: motion.drag_snap(),
            tap_snap: motion.tap_snap(),
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn collapsed(&self) -> f32 {
        self.sheet.lower()
    }

    pub fn fullscreen(&self) -> f32 {
        self.sheet.upper()
    }

    /// Midpoint used when a release is not a flick.
    pub fn midpoint(&self) -> f32 {
        self.geometry.screen_height / 2.0
    }

    pub fn height(&self, now: Instant) -> f32 {
        self.sheet.value(now)
    }

    pub fn target(&self) -> f32 {
        self.sheet.target()
    }

    /// True only when the panel sits exactly at full screen.
    pub fn is_fullscreen(&self, now: Instant) -> bool {
        self.height(now) >= self.fullscreen()
    }

    pub fn is_dragging(&self) -> bool {
        self.sheet.is_dragging()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.sheet.is_animating(now)
    }

    pub fn begin_drag(&mut self, now: Instant) {
        self.sheet.begin_drag(now);
        tracing::trace!(start = self.sheet.value(now), "Panel drag began");
    }

    pub fn update_drag(&mut self, delta_y: f32) {
        self.sheet.update_drag(delta_y);
    }

    /// Release the panel and animate it to the chosen snap point.
    pub fn end_drag(&mut self, velocity_y: f32, now: Instant) -> SnapPoint {
        let height = self.height(now);
        let snap = snap_decision(height, velocity_y, self.midpoint(), self.flick_velocity);
        let target = self.sheet.end_drag(snap, self.drag_snap, now);
        tracing::debug!(height, velocity_y, target, "Panel drag ended");
        snap
    }

    /// Collapse to the mini-player.
    pub fn reset(&mut self, now: Instant) {
        self.sheet.snap_to(SnapPoint::Lower, self.tap_snap, now);
        tracing::debug!("Panel collapsing");
    }

    /// Open the full-screen player.
    pub fn expand(&mut self, now: Instant) {
        self.sheet.snap_to(SnapPoint::Upper, self.tap_snap, now);
        tracing::debug!("Panel expanding");
    }

    /// Follow a window resize.
    pub fn set_geometry(&mut self, geometry: Geometry, now: Instant) {
        if geometry == self.geometry {
            return;
        }
        self.geometry = geometry;
        self.sheet
            .set_bounds(self.sheet.lower(), geometry.screen_height, now);
        tracing::debug!(
            width = geometry.screen_width,
            height = geometry.screen_height,
            "Panel geometry changed"
        );
    }

    pub fn settle(&mut self, now: Instant) {
        self.sheet.settle(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(screen_height: f32) -> PanelSheet {
        PanelSheet::new(Geometry::new(400.0, screen_height), &MotionConfig::default())
    }

    fn after(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn test_starts_collapsed() {
        let p = panel(800.0);
        let t0 = Instant::now();
        assert_eq!(p.height(t0), 80.0);
        assert!(!p.is_fullscreen(t0));
    }

    #[test]
    fn test_drag_up_500_on_800_screen() {
        let t0 = Instant::now();
        let mut p = panel(800.0);
        p.begin_drag(t0);
        p.update_drag(-500.0);
        assert_eq!(p.height(t0), 580.0);
    }

    #[test]
    fn test_drag_clamps_at_fullscreen() {
        let t0 = Instant::now();
        let mut p = panel(800.0);
        p.begin_drag(t0);
        p.update_drag(-5000.0);
        assert_eq!(p.height(t0), 800.0);
        p.update_drag(5000.0);
        assert_eq!(p.height(t0), 80.0);
    }

    #[test]
    fn test_release_past_midpoint_expands() {
        let t0 = Instant::now();
        let mut p = panel(800.0);
        p.begin_drag(t0);
        p.update_drag(-500.0);

        assert_eq!(p.end_drag(0.0, t0), SnapPoint::Upper);
        assert!(!p.is_dragging());
        assert_eq!(p.height(after(t0, 400)), 800.0);
        assert!(p.is_fullscreen(after(t0, 400)));
    }

    #[test]
    fn test_downward_flick_collapses_from_high() {
        let t0 = Instant::now();
        let mut p = panel(800.0);
        p.begin_drag(t0);
        p.update_drag(-650.0);

        assert_eq!(p.end_drag(250.0, t0), SnapPoint::Lower);
        assert_eq!(p.height(after(t0, 400)), 80.0);
    }

    #[test]
    fn test_upward_flick_expands_from_low() {
        let t0 = Instant::now();
        let mut p = panel(800.0);
        p.begin_drag(t0);
        p.update_drag(-20.0);
        assert_eq!(p.end_drag(-600.0, t0), SnapPoint::Upper);
        assert_eq!(p.target(), 800.0);
    }

    #[test]
    fn test_tap_transitions_take_longer() {
        let t0 = Instant::now();
        let mut p = panel(800.0);
        p.expand(t0);
        assert!(p.is_animating(after(t0, 500)));
        assert_eq!(p.height(after(t0, 600)), 800.0);

        p.reset(after(t0, 600));
        assert_eq!(p.height(after(t0, 1200)), 80.0);
    }

    #[test]
    fn test_resize_follows_fullscreen() {
        let t0 = Instant::now();
        let mut p = panel(800.0);
        p.expand(t0);
        p.settle(after(t0, 600));

        p.set_geometry(Geometry::new(400.0, 640.0), after(t0, 700));
        assert_eq!(p.height(after(t0, 700)), 640.0);
        assert!(p.is_fullscreen(after(t0, 700)));
        assert_eq!(p.midpoint(), 320.0);
    }

    #[test]
    fn test_resize_keeps_collapsed_panel() {
        let t0 = Instant::now();
        let mut p = panel(800.0);
        p.set_geometry(Geometry::new(400.0, 600.0), t0);
        assert_eq!(p.height(t0), 80.0);
    }
}
