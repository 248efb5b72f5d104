//! Keyboard shortcut handling.
//!
//! Maps keyboard events to player actions.

use iced::Task;
use iced::keyboard::{self, key};

use super::super::messages::Message;
use super::super::state::AppState;

/// Handle keyboard shortcuts.
///
/// Returns a Task if the key triggered an action, or Task::none() if unhandled.
pub fn handle_keyboard(
    s: &AppState,
    key: keyboard::Key,
    modifiers: keyboard::Modifiers,
) -> Task<Message> {
    if !modifiers.is_empty() {
        return Task::none();
    }

    let fullscreen = s.session.panel().is_fullscreen(s.now);
    let sheet_open = s.session.tabs().is_open(s.now);

    match key.as_ref() {
        // Space: Play/Pause toggle
        keyboard::Key::Named(key::Named::Space) => {
            tracing::debug!(target: "ui::keyboard", "Space pressed - toggling playback");
            Task::done(Message::TogglePlay)
        }

        keyboard::Key::Named(key::Named::ArrowLeft) => {
            tracing::debug!(target: "ui::keyboard", "Left pressed - previous track");
            Task::done(Message::Previous)
        }

        keyboard::Key::Named(key::Named::ArrowRight) => {
            tracing::debug!(target: "ui::keyboard", "Right pressed - next track");
            Task::done(Message::Next)
        }

        // Up: open the player, then the sheet
        keyboard::Key::Named(key::Named::ArrowUp) => {
            if fullscreen {
                tracing::debug!(target: "ui::keyboard", "Up pressed - opening sheet");
                Task::done(Message::ExpandTabs)
            } else {
                tracing::debug!(target: "ui::keyboard", "Up pressed - expanding player");
                Task::done(Message::ExpandPanel)
            }
        }

        // Down: close the sheet, then the player
        keyboard::Key::Named(key::Named::ArrowDown) => {
            if sheet_open {
                tracing::debug!(target: "ui::keyboard", "Down pressed - closing sheet");
                Task::done(Message::CollapseTabs)
            } else {
                tracing::debug!(target: "ui::keyboard", "Down pressed - collapsing player");
                Task::done(Message::CollapsePanel)
            }
        }

        keyboard::Key::Named(key::Named::Escape) => Task::done(Message::CollapsePanel),

        keyboard::Key::Character("v") => {
            tracing::debug!(target: "ui::keyboard", "V pressed - switching player variant");
            Task::done(Message::ToggleVariant)
        }

        _ => Task::none(),
    }
}
