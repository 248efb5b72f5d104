//! Play queue.

use crate::error::{Error, Result};
use crate::model::Track;

/// The playback queue. Insertion order is playback order and the contents
/// are fixed for the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Queue {
    tracks: Vec<Track>,
}

impl Queue {
    /// Create a queue. An empty queue is allowed and leaves the player with
    /// no track loaded.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Build a queue that must hold at least one track.
    pub fn non_empty(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(Error::EmptyQueue);
        }
        Ok(Self { tracks })
    }

    /// Check if queue is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Get queue length.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Get all tracks in playback order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Position of the track with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }
}
