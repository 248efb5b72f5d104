//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `styles`: derive region styles for given sheet heights
//! - `simulate`: replay a gesture script
//! - `queue`: list the dummy queue
//! - `init_config`: write the default config file

mod init_config;
mod queue;
mod simulate;
mod styles;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::style::PlayerVariant;

pub use init_config::cmd_init_config;
pub use queue::cmd_queue;
pub use simulate::cmd_simulate;
pub use styles::{StylesArgs, cmd_styles};

/// Tunesheet CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Print every region's style for the given sheet state as JSON
    Styles {
        /// Panel height
        #[arg(long, default_value = "80")]
        panel: f32,
        /// Bottom-sheet height
        #[arg(long, default_value = "64")]
        tab: f32,
        /// Measured safe-area height (defaults to the screen height)
        #[arg(long)]
        safe_area: Option<f32>,
        /// Player layout variant (defaults to the configured one)
        #[arg(long, value_enum)]
        variant: Option<PlayerVariant>,
        /// Active track index
        #[arg(long, default_value = "0")]
        index: usize,
        /// Horizontal swipe offset
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        swipe: f32,
    },
    /// Replay a TOML gesture script on a virtual clock
    Simulate {
        /// Path to the script
        script: PathBuf,
        /// Print region styles after every step
        #[arg(long)]
        styles: bool,
    },
    /// List the queue
    Queue,
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was specified
/// (meaning the GUI should launch).
pub fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    match &cli.command {
        Some(Commands::Styles {
            panel,
            tab,
            safe_area,
            variant,
            index,
            swipe,
        }) => {
            let args = StylesArgs {
                panel: *panel,
                tab: *tab,
                safe_area: *safe_area,
                variant: *variant,
                index: *index,
                swipe: *swipe,
            };
            cmd_styles(config, &args)?;
            Ok(true)
        }
        Some(Commands::Simulate { script, styles }) => {
            cmd_simulate(config, script, *styles)?;
            Ok(true)
        }
        Some(Commands::Queue) => {
            cmd_queue()?;
            Ok(true)
        }
        Some(Commands::InitConfig { force }) => {
            let rt = Runtime::new()?;
            cmd_init_config(&rt, *force)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
