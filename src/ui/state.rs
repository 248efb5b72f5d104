//! Application state types for the tunesheet UI.

use std::time::Instant;

use crate::config::{Config, MotionConfig};
use crate::gesture::{PanConfig, PanRecognizer, Vec2};
use crate::session::PlayerSession;

/// Movement before a horizontal drag takes over.
const HORIZONTAL_SLOP: f32 = 10.0;
/// Movement before a bottom-sheet drag takes over.
const SHEET_SLOP: f32 = 4.0;

/// Which state machine the current pointer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Vertical drag of the whole player
    Panel,
    /// Horizontal drag of the mini-player track
    Swipe,
    /// Horizontal scroll of the full-player track list
    Scroll,
    /// Vertical drag of the bottom sheet
    Tabs,
}

/// One pointer, offered to every recognizer that could claim it.
#[derive(Debug, Clone)]
pub struct PointerState {
    pub panel: PanRecognizer,
    pub horizontal: PanRecognizer,
    pub tabs: PanRecognizer,
    /// Set once a recognizer has claimed the pointer
    pub route: Option<Route>,
    pub pressed_at: Option<Vec2>,
    /// Pager offset when a scroll began
    pub scroll_origin: f32,
}

impl PointerState {
    pub fn new(motion: &MotionConfig) -> Self {
        Self {
            panel: PanRecognizer::new(PanConfig::long_press(
                motion.long_press(),
                motion.min_velocity_y,
            )),
            horizontal: PanRecognizer::new(PanConfig::distance(HORIZONTAL_SLOP)),
            tabs: PanRecognizer::new(PanConfig::distance(SHEET_SLOP)),
            route: None,
            pressed_at: None,
            scroll_origin: 0.0,
        }
    }

    /// A pointer is down.
    pub fn is_tracking(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Drop the current pointer without emitting anything.
    pub fn reset(&mut self) {
        self.panel.cancel();
        self.horizontal.cancel();
        self.tabs.cancel();
        self.route = None;
        self.pressed_at = None;
    }
}

/// State of the running application.
pub struct AppState {
    pub session: PlayerSession,
    pub config: Config,
    pub pointer: PointerState,
    /// Clock reading the current frame is drawn at
    pub now: Instant,
    /// Last status line (config saves)
    pub status: Option<String>,
}

impl AppState {
    pub fn new(session: PlayerSession, config: Config, now: Instant) -> Self {
        let pointer = PointerState::new(&config.motion);
        Self {
            session,
            config,
            pointer,
            now,
            status: None,
        }
    }
}
