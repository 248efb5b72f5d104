//! One player instance: store, sheets, swipe/pager state and progress.
//!
//! [`PlayerSession`] is what both the GUI and the `simulate` command drive.
//! Every operation takes the current `Instant` so a script can run on a
//! virtual clock.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::{AppearanceConfig, Config};
use crate::gesture::{Pager, SwipeTracker};
use crate::model::Track;
use crate::player::{Direction, PlayerStore, ProgressTracker, Queue, TrackChange};
use crate::sheet::{Geometry, PanelSheet, SnapPoint, TabSheet};
use crate::style::{PlayerStyles, PlayerVariant, StyleInputs, derive_styles};

/// Plain values describing a session at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub panel_height: f32,
    pub tab_height: f32,
    pub active_index: Option<usize>,
    pub is_playing: bool,
    pub translated_x: f32,
    pub scroll_x: f32,
    pub progress: f32,
}

#[derive(Debug, Clone)]
pub struct PlayerSession {
    store: PlayerStore,
    panel: PanelSheet,
    tabs: TabSheet,
    swipe: SwipeTracker,
    pager: Pager,
    progress: ProgressTracker,
    variant: PlayerVariant,
    appearance: AppearanceConfig,
}

impl PlayerSession {
    pub fn new(queue: Queue, config: &Config) -> Self {
        let geometry = Geometry::from(&config.geometry);
        let store = PlayerStore::new(queue);
        let progress = ProgressTracker::new(track_duration(store.active_track()));

        tracing::debug!(
            tracks = store.queue().len(),
            variant = %config.appearance.variant,
            "Player session created"
        );

        Self {
            store,
            panel: PanelSheet::new(geometry, &config.motion),
            tabs: TabSheet::new(&config.motion),
            swipe: SwipeTracker::new(config.motion.swipe_threshold),
            pager: Pager::new(geometry.screen_width),
            progress,
            variant: config.appearance.variant,
            appearance: config.appearance.clone(),
        }
    }

    pub fn store(&self) -> &PlayerStore {
        &self.store
    }

    pub fn panel(&self) -> &PanelSheet {
        &self.panel
    }

    pub fn tabs(&self) -> &TabSheet {
        &self.tabs
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn geometry(&self) -> Geometry {
        self.panel.geometry()
    }

    pub fn variant(&self) -> PlayerVariant {
        self.variant
    }

    pub fn set_variant(&mut self, variant: PlayerVariant) {
        self.variant = variant;
    }

    pub fn active_track(&self) -> Option<&Track> {
        self.store.active_track()
    }

    // ------------------------------------------------------------------
    // Panel
    // ------------------------------------------------------------------

    pub fn begin_panel_drag(&mut self, now: Instant) {
        self.panel.begin_drag(now);
    }

    pub fn update_panel_drag(&mut self, delta_y: f32) {
        self.panel.update_drag(delta_y);
    }

    pub fn end_panel_drag(&mut self, velocity_y: f32, now: Instant) -> SnapPoint {
        let snap = self.panel.end_drag(velocity_y, now);
        if snap == SnapPoint::Lower {
            self.tabs.collapse(now);
        }
        snap
    }

    pub fn expand_panel(&mut self, now: Instant) {
        self.panel.expand(now);
    }

    /// Collapse to the mini-player, closing the bottom sheet with it.
    pub fn collapse_panel(&mut self, now: Instant) {
        self.panel.reset(now);
        self.tabs.collapse(now);
    }

    // ------------------------------------------------------------------
    // Bottom sheet
    // ------------------------------------------------------------------

    pub fn measure_safe_area(&mut self, height: f32, now: Instant) {
        self.tabs.measure_safe_area(height, now);
    }

    pub fn begin_tab_drag(&mut self, now: Instant) {
        self.tabs.begin_drag(now);
    }

    pub fn update_tab_drag(&mut self, delta_y: f32) {
        self.tabs.update_drag(delta_y);
    }

    pub fn end_tab_drag(&mut self, velocity_y: f32, now: Instant) -> SnapPoint {
        self.tabs.end_drag(velocity_y, now)
    }

    pub fn expand_tabs(&mut self, now: Instant) {
        self.tabs.expand(now);
    }

    pub fn collapse_tabs(&mut self, now: Instant) {
        self.tabs.collapse(now);
    }

    // ------------------------------------------------------------------
    // Playback and track navigation
    // ------------------------------------------------------------------

    pub fn toggle_play(&mut self, now: Instant) {
        self.store.toggle_play();
        self.progress.sync(self.store.is_playing(), now);
    }

    pub fn set_playing(&mut self, playing: bool, now: Instant) {
        self.store.set_is_playing(playing);
        self.progress.sync(self.store.is_playing(), now);
    }

    pub fn navigate(&mut self, direction: Direction, now: Instant) -> Option<TrackChange> {
        let change = self.store.navigate_track(direction);
        self.after_navigation(change, now)
    }

    pub fn jump_to(&mut self, index: usize, now: Instant) -> Option<TrackChange> {
        let change = self.store.jump_to(index);
        self.after_navigation(change, now)
    }

    /// Live horizontal drag of the active track.
    pub fn update_swipe(&mut self, translation_x: f32) {
        self.swipe.update(translation_x);
    }

    /// Horizontal drag released: maybe change track, and always pause.
    pub fn end_swipe(&mut self, now: Instant) -> Option<TrackChange> {
        let change = self
            .swipe
            .release()
            .and_then(|direction| self.navigate(direction, now));
        self.set_playing(false, now);
        change
    }

    /// Free scroll of the paged track list.
    pub fn scroll_to(&mut self, offset: f32) {
        self.pager.scroll_to(offset);
    }

    /// Track list came to rest: step towards the page in view.
    pub fn settle_scroll(&mut self, now: Instant) -> Option<TrackChange> {
        let current = self.store.active_index()?;
        let change = self
            .pager
            .settle(current)
            .and_then(|direction| self.navigate(direction, now));
        if let Some(index) = self.store.active_index() {
            self.pager.show_page(index);
        }
        change
    }

    fn after_navigation(&mut self, change: Option<TrackChange>, now: Instant) -> Option<TrackChange> {
        let change = change?;
        self.progress
            .reset(track_duration(self.store.active_track()));
        self.progress.sync(self.store.is_playing(), now);
        self.pager.show_page(change.to);
        Some(change)
    }

    // ------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------

    /// Follow a window resize.
    pub fn set_geometry(&mut self, geometry: Geometry, now: Instant) {
        self.panel.set_geometry(geometry, now);
        let index = self.store.active_index().unwrap_or(0);
        self.pager.set_page_width(geometry.screen_width, index);
    }

    /// Per-frame housekeeping: collapse finished transitions.
    pub fn tick(&mut self, now: Instant) {
        self.panel.settle(now);
        self.tabs.settle(now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.panel.is_animating(now) || self.tabs.is_animating(now)
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn style_inputs(&self, now: Instant) -> StyleInputs {
        let geometry = self.geometry();
        StyleInputs {
            geometry,
            panel_height: self.panel.height(now),
            tab_height: self.tabs.height(now),
            safe_area: self.tabs.safe_area().unwrap_or(geometry.screen_height),
            translated_x: self.swipe.translated_x(),
            scroll_x: self.pager.offset(),
            track_count: self.store.queue().len(),
            track_index: self.store.active_index(),
            variant: self.variant,
            accent: self.active_track().and_then(|t| t.accent_color),
            base_color: self.appearance.base_color,
            sheet_backdrop: self.appearance.sheet_backdrop,
        }
    }

    pub fn styles(&self, now: Instant) -> PlayerStyles {
        derive_styles(&self.style_inputs(now))
    }

    pub fn snapshot(&self, now: Instant) -> SessionSnapshot {
        SessionSnapshot {
            panel_height: self.panel.height(now),
            tab_height: self.tabs.height(now),
            active_index: self.store.active_index(),
            is_playing: self.store.is_playing(),
            translated_x: self.swipe.translated_x(),
            scroll_x: self.pager.offset(),
            progress: self.progress.fraction(now),
        }
    }
}

fn track_duration(track: Option<&Track>) -> Duration {
    Duration::from_secs(track.map(|t| u64::from(t.duration)).unwrap_or(0))
}
