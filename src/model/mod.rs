//! Core data models for the player.
//!
//! Defines [`Track`] and [`Artist`]. Tracks are immutable once loaded; the
//! player only ever changes which one is active.

mod catalog;

pub use catalog::dummy_tracks;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::motion::Rgba;

/// A performing artist credited on a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

impl Artist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Credited artists, in billing order
    // SmallVec: almost every track has one or two artists
    pub artists: SmallVec<[Artist; 2]>,
    /// Cover image reference (URL or asset path)
    pub cover_image: String,
    /// Duration in seconds
    pub duration: u32,
    /// Accent colour sampled from the cover art
    pub accent_color: Option<Rgba>,
    pub lyrics: Option<String>,
    /// Audio reference (never decoded here)
    pub audio: String,
    pub likes: u64,
    pub video: Option<String>,
}

impl Track {
    /// Artist names joined with the bullet separator used in the player.
    pub fn artist_line(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(" • ")
    }

    pub fn has_lyrics(&self) -> bool {
        self.lyrics.as_deref().is_some_and(|l| !l.trim().is_empty())
    }
}
