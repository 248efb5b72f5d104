//! View rendering for the player window.
//!
//! The whole window is one canvas: the player regions move and fade every
//! frame, and their geometry comes straight from the derived styles.

mod player;

use iced::widget::Canvas;
use iced::{Element, Length};

use super::messages::Message;
use super::state::AppState;

pub use player::PlayerCanvas;

pub fn main_view(s: &AppState) -> Element<'_, Message> {
    Canvas::new(PlayerCanvas::new(&s.session, s.now, s.status.as_deref()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
