//! Write a default site config.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gcsite_config::DEFAULT_CONFIG;

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'gcsite check' to validate it.");

    Ok(())
}
