//! Command-line interface for tunesheet.
//!
//! Inspect derived styles, replay gesture scripts and manage the config
//! file without launching the GUI.

mod commands;

pub use commands::{Cli, Commands, run_command};
