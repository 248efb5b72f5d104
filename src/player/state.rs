//! Player state store: which track is active and whether it is playing.

use serde::{Deserialize, Serialize};

use super::queue::Queue;
use crate::model::Track;

/// Track navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

/// Snapshot of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlayerState {
    /// Index into the queue; `None` only when the queue is empty
    pub active_index: Option<usize>,
    pub is_playing: bool,
}

/// A change of active track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackChange {
    pub from: usize,
    pub to: usize,
}

/// Owns the queue and the playback flags.
///
/// Every change of active track pauses playback. The rule lives in
/// [`PlayerStore::on_track_changed`] and runs for every path that moves
/// the index.
#[derive(Debug, Clone)]
pub struct PlayerStore {
    queue: Queue,
    state: PlayerState,
}

impl PlayerStore {
    pub fn new(queue: Queue) -> Self {
        let active_index = if queue.is_empty() { None } else { Some(0) };
        if active_index.is_none() {
            tracing::warn!("Player created with an empty queue, no track loaded");
        }
        Self {
            queue,
            state: PlayerState {
                active_index,
                is_playing: false,
            },
        }
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index
    }

    pub fn active_track(&self) -> Option<&Track> {
        self.state.active_index.and_then(|i| self.queue.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Flip play/pause. Nothing to play without a track.
    pub fn toggle_play(&mut self) {
        if self.state.active_index.is_some() {
            self.state.is_playing = !self.state.is_playing;
        }
    }

    /// Imperative override used by gesture handlers.
    pub fn set_is_playing(&mut self, playing: bool) {
        self.state.is_playing = playing && self.state.active_index.is_some();
    }

    /// Move one track in `direction`. Past either end of the queue this is
    /// a silent no-op.
    pub fn navigate_track(&mut self, direction: Direction) -> Option<TrackChange> {
        let current = self.state.active_index?;
        let target = match direction {
            Direction::Prev => current.checked_sub(1)?,
            Direction::Next => current + 1,
        };
        self.set_active(target)
    }

    /// Make the track at `index` active. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> Option<TrackChange> {
        self.set_active(index)
    }

    fn set_active(&mut self, index: usize) -> Option<TrackChange> {
        let from = self.state.active_index?;
        if index >= self.queue.len() || index == from {
            return None;
        }
        self.state.active_index = Some(index);
        let change = TrackChange { from, to: index };
        self.on_track_changed(change);
        Some(change)
    }

    fn on_track_changed(&mut self, change: TrackChange) {
        tracing::debug!(from = change.from, to = change.to, "Active track changed");
        if self.state.is_playing {
            self.state.is_playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dummy_tracks;

    fn store_of(n: usize) -> PlayerStore {
        PlayerStore::new(Queue::new(dummy_tracks().into_iter().take(n).collect()))
    }

    #[test]
    fn test_starts_paused_on_first_track() {
        let store = store_of(3);
        assert_eq!(store.active_index(), Some(0));
        assert!(!store.is_playing());
        assert_eq!(store.active_track().unwrap().id, dummy_tracks()[0].id);
    }

    #[test]
    fn test_next_pauses_playback() {
        let mut store = store_of(3);
        store.set_is_playing(true);

        let change = store.navigate_track(Direction::Next);

        assert_eq!(change, Some(TrackChange { from: 0, to: 1 }));
        assert_eq!(store.active_index(), Some(1));
        assert!(!store.is_playing());
    }

    #[test]
    fn test_prev_at_start_is_noop() {
        let mut store = store_of(3);
        store.set_is_playing(true);
        assert_eq!(store.navigate_track(Direction::Prev), None);
        assert_eq!(store.active_index(), Some(0));
        assert!(store.is_playing());
    }

    #[test]
    fn test_next_at_end_is_noop() {
        let mut store = store_of(3);
        store.navigate_track(Direction::Next);
        store.navigate_track(Direction::Next);
        assert_eq!(store.active_index(), Some(2));
        assert_eq!(store.navigate_track(Direction::Next), None);
        assert_eq!(store.active_index(), Some(2));
    }

    #[test]
    fn test_toggle_play() {
        let mut store = store_of(2);
        store.toggle_play();
        assert!(store.is_playing());
        store.toggle_play();
        assert!(!store.is_playing());
    }

    #[test]
    fn test_jump_to_pauses_and_ignores_out_of_range() {
        let mut store = store_of(3);
        store.set_is_playing(true);
        assert_eq!(store.jump_to(7), None);
        assert!(store.is_playing());
        assert_eq!(store.jump_to(2), Some(TrackChange { from: 0, to: 2 }));
        assert!(!store.is_playing());
        assert_eq!(store.jump_to(2), None);
    }

    #[test]
    fn test_empty_queue_has_no_track_loaded() {
        let mut store = PlayerStore::new(Queue::default());
        assert_eq!(store.active_index(), None);
        assert!(store.active_track().is_none());

        store.toggle_play();
        store.set_is_playing(true);
        assert!(!store.is_playing());
        assert_eq!(store.navigate_track(Direction::Next), None);
        assert_eq!(store.jump_to(0), None);
    }
}
