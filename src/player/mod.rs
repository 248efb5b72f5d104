//! Player state: the queue, the active track, play/pause and progress.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 PlayerStore                  │
//! │   queue, active index, play/pause flag       │
//! │   every index change pauses playback         │
//! └──────────────────────┬───────────────────────┘
//!                        │ TrackChange
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │               ProgressTracker                │
//! │   wall-clock time spent playing              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Nothing here decodes or outputs audio.

mod progress;
mod queue;
mod state;

pub use progress::ProgressTracker;
pub use queue::Queue;
pub use state::{Direction, PlayerState, PlayerStore, TrackChange};
