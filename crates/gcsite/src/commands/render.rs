//! Render homepage fragments.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gcsite_config::FeatureSet;
use gcsite_theme::{feature_stylesheet, FeatureList, TemplateEngine};

use super::{current_year, load_config};

/// Run the render command.
pub fn run(
    config_path: &Path,
    output: &Path,
    features: Option<&str>,
    minify: bool,
) -> Result<()> {
    let config = load_config(config_path)?;

    let set = match features {
        Some(name) => name.parse::<FeatureSet>()?,
        None => config.homepage.features,
    };
    let features = FeatureList::for_set(set);

    let engine = TemplateEngine::new();
    let fragments = [
        (
            "features.html",
            engine.render_features(&features, &config)?,
        ),
        ("navbar.html", engine.render_navbar(&config)?),
        ("footer.html", engine.render_footer(&config, current_year())?),
        ("features.css", feature_stylesheet(minify)?),
    ];

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    for (name, content) in fragments {
        let path = output.join(name);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
    }

    tracing::info!(
        "Rendered {} feature cards ({}) to {}",
        features.len(),
        set,
        output.display()
    );

    Ok(())
}
