//! Validate the site config, its links and optionally its assets.

use std::path::Path;

use anyhow::{Context, Result};
use gcsite_theme::{check_assets, AssetIndex, FeatureList};

use super::load_config;

/// Run the check command.
pub fn run(config_path: &Path, static_dir: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let features = FeatureList::for_set(config.homepage.features);

    let links = config.check_links();
    let broken_links = links.broken.len();
    links.enforce(config.on_broken_links)?;

    let mut missing_assets = 0;
    if let Some(dir) = static_dir {
        let index = AssetIndex::scan(dir)
            .with_context(|| format!("Failed to index {}", dir.display()))?;
        let report = check_assets(&config, &features, &index);
        missing_assets = report.broken.len();
        report.enforce(config.on_broken_links)?;
    }

    tracing::info!(
        "Checked '{}': {} navbar items, {} footer columns, {} broken links, {} missing assets",
        config.title,
        config.theme.navbar.items.len(),
        config.theme.footer.links.len(),
        broken_links,
        missing_assets
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcsite_config::DEFAULT_CONFIG;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_config_passes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, DEFAULT_CONFIG).unwrap();

        assert!(run(&path, None).is_ok());
    }

    #[test]
    fn broken_link_fails_with_throw() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(
            &path,
            DEFAULT_CONFIG.replace("to = \"/blog\", label", "to = \"blog\", label"),
        )
        .unwrap();

        let err = run(&path, None).unwrap_err();

        assert!(err.to_string().contains("broken link"));
    }

    #[test]
    fn missing_assets_fail_with_throw() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, DEFAULT_CONFIG).unwrap();
        let static_dir = temp.path().join("static");
        fs::create_dir_all(&static_dir).unwrap();

        assert!(run(&path, Some(&static_dir)).is_err());
    }

    #[test]
    fn invalid_config_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(
            &path,
            DEFAULT_CONFIG.replace("base_url = \"/Dotnet_GC/\"", "base_url = \"Dotnet_GC\""),
        )
        .unwrap();

        let err = run(&path, None).unwrap_err();

        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn unknown_feature_set_fails_at_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(
            &path,
            DEFAULT_CONFIG.replace("features = \"gc-overview\"", "features = \"bogus\""),
        )
        .unwrap();

        let err = run(&path, None).unwrap_err();

        assert!(format!("{:#}", err).contains("bogus"));
    }
}
