//! UI module for tunesheet.

mod layout;
mod messages;
mod state;
pub mod theme;
mod update;
mod views;

use iced::{Element, Size, Subscription, Task, event, keyboard, time, window};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::model::dummy_tracks;
use crate::player::Queue;
use crate::session::PlayerSession;

pub use messages::Message;
use state::AppState;

pub struct Tunesheet {
    state: AppState,
}

impl Tunesheet {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let now = Instant::now();
        let mut session = PlayerSession::new(Queue::new(dummy_tracks()), &config);
        session.measure_safe_area(config.geometry.screen_height, now);
        tracing::debug!(
            width = config.geometry.screen_width,
            height = config.geometry.screen_height,
            "UI started"
        );

        (
            Self {
                state: AppState::new(session, config, now),
            },
            Task::none(),
        )
    }

    /// Initial window size, from the configured screen geometry.
    pub fn window_size(config: &Config) -> Size {
        Size::new(config.geometry.screen_width, config.geometry.screen_height)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let s = &self.state;
        let mut subscriptions = vec![
            keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers))),
            event::listen_with(|event, _status, _window| match event {
                iced::Event::Window(window::Event::Resized(size)) => {
                    Some(Message::WindowResized(size))
                }
                _ => None,
            }),
        ];

        // Frames only while something moves: a transition, the progress
        // bar, or a held pointer waiting on its long-press gate.
        let busy = s.session.is_animating(s.now)
            || s.session.store().is_playing()
            || s.pointer.is_tracking();
        if busy {
            subscriptions.push(time::every(Duration::from_millis(16)).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn view(&self) -> Element<'_, Message> {
        views::main_view(&self.state)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if !matches!(message, Message::Tick(_) | Message::Pointer(_)) {
            tracing::trace!(target: "ui::update", message = ?message, "Update received");
        }

        let now = Instant::now();
        let s = &mut self.state;
        s.now = now;

        match message {
            Message::Tick(_) => {
                update::tick_pointer(s, now);
                s.session.tick(now);
                Task::none()
            }
            Message::Pointer(event) => update::handle_pointer(s, event, now),
            Message::WindowResized(size) => update::handle_resize(s, size, now),
            Message::KeyPressed(key, modifiers) => update::handle_keyboard(s, key, modifiers),
            Message::ToggleVariant => update::handle_toggle_variant(s),
            Message::ConfigSaved(result) => {
                update::handle_config_saved(s, result);
                Task::none()
            }
            Message::TogglePlay
            | Message::Next
            | Message::Previous
            | Message::ExpandPanel
            | Message::CollapsePanel
            | Message::ExpandTabs
            | Message::CollapseTabs => update::handle_player(s, message, now),
        }
    }
}
