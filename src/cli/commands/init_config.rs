//! `init-config`: write the default configuration file.

use tokio::runtime::Runtime;

use crate::config::{self, Config};

pub fn cmd_init_config(rt: &Runtime, force: bool) -> anyhow::Result<()> {
    let path = config::config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite.");
        return Ok(());
    }

    let written = rt.block_on(config::save_async(Config::default()))?;
    println!("Wrote default config to {}", written.display());
    Ok(())
}
