//! Print the resolved site config.

use std::path::Path;

use anyhow::{Context, Result};

use super::{current_year, load_config};
use crate::Format;

/// Run the config command.
pub fn run(config_path: &Path, format: Format) -> Result<()> {
    let config = load_config(config_path)?;
    println!("{}", render(&config, format, current_year())?);
    Ok(())
}

fn render(config: &gcsite_config::SiteConfig, format: Format, year: i32) -> Result<String> {
    match format {
        Format::Json => {
            let value = config.to_generator_json(year)?;
            serde_json::to_string_pretty(&value).context("Failed to serialize config as JSON")
        }
        Format::Toml => toml::to_string_pretty(config).context("Failed to serialize config as TOML"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcsite_config::{SiteConfig, DEFAULT_CONFIG};

    #[test]
    fn json_uses_generator_keys() {
        let config = SiteConfig::from_toml_str(DEFAULT_CONFIG).unwrap();

        let json = render(&config, Format::Json, 2024).unwrap();

        assert!(json.contains("\"baseUrl\": \"/Dotnet_GC/\""));
        assert!(json.contains("\"themeConfig\""));
    }

    #[test]
    fn toml_output_parses_back() {
        let config = SiteConfig::from_toml_str(DEFAULT_CONFIG).unwrap();

        let toml = render(&config, Format::Toml, 2024).unwrap();

        assert_eq!(SiteConfig::from_toml_str(&toml).unwrap(), config);
    }
}
