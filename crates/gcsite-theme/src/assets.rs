//! Feature section stylesheet and static asset checks.

use std::collections::BTreeSet;
use std::path::Path;

use walkdir::WalkDir;

use gcsite_config::{LinkReport, SiteConfig};

use crate::features::FeatureList;
use crate::templates::RenderError;

/// Stylesheet for the feature section.
///
/// Minified with lightningcss when `minify` is set.
pub fn feature_stylesheet(minify: bool) -> Result<String, RenderError> {
    if !minify {
        return Ok(FEATURES_CSS.to_string());
    }

    use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

    let mut stylesheet = StyleSheet::parse(FEATURES_CSS, ParserOptions::default())
        .map_err(|e| RenderError::Stylesheet(format!("CSS parse error: {}", e)))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| RenderError::Stylesheet(format!("CSS minify error: {}", e)))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| RenderError::Stylesheet(format!("CSS print error: {}", e)))?;

    Ok(minified.code)
}

/// Files available under a static asset directory, as `/`-separated relative paths.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    files: BTreeSet<String>,
}

impl AssetIndex {
    /// Walk a static directory and record every file in it.
    pub fn scan(static_dir: &Path) -> Result<Self, RenderError> {
        if !static_dir.is_dir() {
            return Err(RenderError::Assets(format!(
                "Static directory not found: {}",
                static_dir.display()
            )));
        }

        let mut files = BTreeSet::new();

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(static_dir) {
                let key = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                files.insert(key);
            }
        }

        tracing::debug!("Indexed {} static assets in {}", files.len(), static_dir.display());

        Ok(Self { files })
    }

    pub fn contains(&self, asset: &str) -> bool {
        self.files.contains(asset.trim_start_matches('/'))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Report every referenced asset (favicon, logo, social card, feature icons) missing from the index.
pub fn check_assets(config: &SiteConfig, features: &FeatureList, index: &AssetIndex) -> LinkReport {
    let mut report = LinkReport::default();

    let mut referenced = vec![("favicon".to_string(), config.favicon.as_str())];
    if let Some(logo) = &config.theme.navbar.logo {
        referenced.push(("theme.navbar.logo.src".to_string(), logo.src.as_str()));
    }
    if let Some(image) = &config.theme.image {
        referenced.push(("theme.image".to_string(), image.as_str()));
    }
    for (i, feature) in features.iter().enumerate() {
        referenced.push((format!("features[{}].icon", i), feature.icon.as_str()));
    }

    for (location, asset) in referenced {
        if !index.contains(asset) {
            report.push(location, asset, "is missing from the static directory");
        }
    }

    report
}

const FEATURES_CSS: &str = r#".features {
  display: flex;
  align-items: center;
  padding: 2rem 0;
  width: 100%;
}

.featureSvg {
  height: 200px;
  width: 200px;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use gcsite_config::DEFAULT_CONFIG;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn minified_stylesheet_is_shorter() {
        let full = feature_stylesheet(false).unwrap();
        let minified = feature_stylesheet(true).unwrap();

        assert!(minified.len() < full.len());
        assert!(minified.contains(".featureSvg"));
    }

    #[test]
    fn indexes_nested_files() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("img")).unwrap();
        fs::write(temp.path().join("img/logo.svg"), "<svg/>").unwrap();

        let index = AssetIndex::scan(temp.path()).unwrap();

        assert_eq!(index.len(), 1);
        assert!(index.contains("img/logo.svg"));
        assert!(index.contains("/img/logo.svg"));
        assert!(!index.contains("img"));
    }

    #[test]
    fn scan_fails_on_missing_directory() {
        let temp = tempdir().unwrap();

        let result = AssetIndex::scan(&temp.path().join("static"));

        assert!(matches!(result, Err(RenderError::Assets(_))));
    }

    #[test]
    fn reports_missing_icons() {
        let temp = tempdir().unwrap();
        let img = temp.path().join("img");
        fs::create_dir_all(&img).unwrap();
        for file in [
            "favicon.ico",
            "logo.svg",
            "docusaurus-social-card.jpg",
            "dotnet_bot_presenting.svg",
            "my-dotnet-bot-mod.svg",
        ] {
            fs::write(img.join(file), "").unwrap();
        }

        let config = SiteConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        let index = AssetIndex::scan(temp.path()).unwrap();

        let report = check_assets(&config, &FeatureList::gc_overview(), &index);

        assert_eq!(report.broken.len(), 1);
        assert_eq!(report.broken[0].location, "features[2].icon");
        assert_eq!(report.broken[0].target, "img/dotnet-bot_builder.svg");
    }
}
