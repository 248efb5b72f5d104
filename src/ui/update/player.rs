//! Discrete player actions: playback, track navigation and the tap-driven
//! sheet transitions.

use iced::Task;
use std::time::Instant;

use crate::player::Direction;

use super::super::messages::Message;
use super::super::state::AppState;

/// Handle player-related messages.
pub fn handle_player(s: &mut AppState, msg: Message, now: Instant) -> Task<Message> {
    let session = &mut s.session;
    match msg {
        Message::TogglePlay => session.toggle_play(now),
        Message::Next => {
            session.navigate(Direction::Next, now);
        }
        Message::Previous => {
            session.navigate(Direction::Prev, now);
        }
        Message::ExpandPanel => session.expand_panel(now),
        Message::CollapsePanel => session.collapse_panel(now),
        Message::ExpandTabs => {
            if session.panel().is_fullscreen(now) {
                session.expand_tabs(now);
            }
        }
        Message::CollapseTabs => session.collapse_tabs(now),
        _ => {}
    }
    Task::none()
}
