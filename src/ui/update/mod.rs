//! Update handlers for application messages.
//!
//! - `gesture`: pointer routing into the sheet and swipe state machines
//! - `player`: playback, track navigation and tap transitions
//! - `keyboard`: shortcuts

mod gesture;
mod keyboard;
mod player;

use iced::{Size, Task};
use std::time::Instant;

use crate::config;
use crate::sheet::Geometry;

use super::messages::Message;
use super::state::AppState;

// Re-export all handler functions
pub use gesture::{handle_pointer, tick as tick_pointer};
pub use keyboard::handle_keyboard;
pub use player::handle_player;

/// Follow a window resize: the window is both the screen and the safe area.
pub fn handle_resize(s: &mut AppState, size: Size, now: Instant) -> Task<Message> {
    if size.width <= 0.0 || size.height <= 0.0 {
        return Task::none();
    }
    tracing::debug!(width = size.width, height = size.height, "Window resized");
    s.session
        .set_geometry(Geometry::new(size.width, size.height), now);
    s.session.measure_safe_area(size.height, now);
    Task::none()
}

/// Switch between the classic and docked players and persist the choice.
pub fn handle_toggle_variant(s: &mut AppState) -> Task<Message> {
    let variant = s.session.variant().toggled();
    s.session.set_variant(variant);
    s.config.appearance.variant = variant;
    tracing::info!(%variant, "Player variant switched");

    Task::perform(config::save_async(s.config.clone()), |result| {
        Message::ConfigSaved(result.map_err(|e| e.to_string()))
    })
}

pub fn handle_config_saved(s: &mut AppState, result: Result<std::path::PathBuf, String>) {
    match result {
        Ok(path) => {
            s.status = Some(format!("Saved {}", path.display()));
        }
        Err(e) => {
            tracing::warn!("Failed to save config: {}", e);
            s.status = Some(format!("Config not saved: {}", e));
        }
    }
}
