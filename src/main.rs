//! Tunesheet - a music player's mini-player / full-player sheet.
//!
//! Runs as an iced window when started without a subcommand. The CLI
//! commands drive the same player session headlessly: derive region styles,
//! replay gesture scripts, list the queue.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod gesture;
pub mod model;
pub mod motion;
pub mod player;
pub mod script;
pub mod session;
pub mod sheet;
pub mod style;
pub mod ui;

use clap::Parser;
use iced::application;
use iced::window;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use ui::Tunesheet;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("tunesheet=info".parse()?))
        .init();

    let config = config::load();

    // Try to run a CLI command
    if cli::run_command(&args, &config)? {
        // A command was executed, exit normally
        return Ok(());
    }

    // No command specified, launch the GUI
    let size = Tunesheet::window_size(&config);
    application("Tunesheet", Tunesheet::update, Tunesheet::view)
        .subscription(Tunesheet::subscription)
        .theme(|_| iced::Theme::Dark)
        .window(window::Settings {
            size,
            min_size: Some(iced::Size::new(240.0, 400.0)),
            ..Default::default()
        })
        .run_with(move || Tunesheet::new(config))
        .map_err(|e| anyhow::anyhow!("GUI Error: {}", e))
}
