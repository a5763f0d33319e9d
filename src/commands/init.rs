//! Write a commented default config file.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use werkstatt_core::config::WorkshopConfig;

pub fn run() -> Result<()> {
    let path = WorkshopConfig::config_path()?;

    if path.exists() {
        bail!("Config already exists at {}", path.display());
    }

    WorkshopConfig::create_default_config(&path)?;
    println!("{}", format!("  Created {}", path.display()).green());

    Ok(())
}
