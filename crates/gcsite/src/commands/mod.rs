//! CLI subcommands.

pub mod check;
pub mod config;
pub mod init;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;
use gcsite_config::SiteConfig;

/// Load and validate the site config.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    let config = SiteConfig::load(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    config.validate()?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Year used for copyright lines.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
