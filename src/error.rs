//! Application-wide error types.
//!
//! The player core is total over clamped domains and never fails; errors
//! only arise at the edges: reading config and gesture scripts, parsing
//! colours, and callers that insist on a non-empty queue. Library modules
//! use `thiserror`, while CLI/main uses `anyhow`.
//!
//! # Example
//!
//! ```ignore
//! use tunesheet::error::{Error, Result, ResultExt};
//!
//! fn load_script(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_context("reading gesture script")
//! }
//! ```

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Gesture script could not be parsed
    #[error("Script error in {path}: {message}")]
    Script { path: PathBuf, message: String },

    /// Colour string not in a recognised format
    #[error("Invalid colour: {0:?}")]
    InvalidColor(String),

    /// A queue was required to hold at least one track
    #[error("Queue is empty")]
    EmptyQueue,

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a script error.
    pub fn script(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Script {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}
