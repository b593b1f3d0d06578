//! The site configuration record.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::link::{FooterColumn, LinkTarget, NavbarItem};
use crate::report::ReportingSeverity;

/// Static description of the site: metadata, navigation, footer and theming.
///
/// Built once from a config file and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, used for `<title>` and meta tags
    pub title: String,

    /// Short description shown under the title
    #[serde(default)]
    pub tagline: String,

    /// Favicon asset path
    #[serde(default = "default_favicon")]
    pub favicon: String,

    /// Production origin, e.g. `https://egonzalezt.github.io`
    pub url: String,

    /// Path prefix applied to every internal route
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// GitHub organization or user name
    pub organization_name: String,

    /// GitHub repository name
    pub project_name: String,

    /// How broken internal links are reported
    #[serde(default = "default_on_broken_links")]
    pub on_broken_links: ReportingSeverity,

    /// How broken markdown links are reported
    #[serde(default = "default_on_broken_markdown_links")]
    pub on_broken_markdown_links: ReportingSeverity,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub presets: PresetsConfig,

    #[serde(default)]
    pub homepage: HomepageConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Locale settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Locale built by default
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Every supported locale
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            locales: default_locales(),
        }
    }
}

/// Options for the docs and blog content plugins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetsConfig {
    #[serde(default)]
    pub docs: ContentPreset,

    #[serde(default)]
    pub blog: ContentPreset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPreset {
    /// Target of the "Edit this page" link (derived from the repository when unset)
    #[serde(default)]
    pub edit_url: Option<String>,
}

/// Homepage options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageConfig {
    /// Built-in feature set rendered on the homepage
    #[serde(default)]
    pub features: FeatureSet,
}

/// Named built-in feature lists, selectable from the config or the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureSet {
    #[default]
    GcOverview,
    LearningPath,
}

impl FeatureSet {
    pub const ALL: [FeatureSet; 2] = [FeatureSet::GcOverview, FeatureSet::LearningPath];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GcOverview => "gc-overview",
            Self::LearningPath => "learning-path",
        }
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|set| set.name() == s)
            .ok_or_else(|| ConfigError::UnknownFeatureSet(s.to_string()))
    }
}

/// Theme options: social card, navbar, footer and syntax highlighting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Social card image
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub navbar: NavbarConfig,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub prism: PrismConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarConfig {
    /// Brand text next to the logo
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub logo: Option<Logo>,

    /// Items in declaration order
    #[serde(default)]
    pub items: Vec<NavbarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub alt: String,
    pub src: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

impl FooterStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(default)]
    pub style: FooterStyle,

    /// Link columns in display order
    #[serde(default)]
    pub links: Vec<FooterColumn>,

    /// Copyright line; `{year}` is replaced with the build year
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Syntax highlighting themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrismConfig {
    /// Light mode theme
    #[serde(default = "default_light_theme")]
    pub theme: String,

    /// Dark mode theme
    #[serde(default = "default_dark_theme")]
    pub dark_theme: String,

    /// Extra grammars to load on top of the defaults
    #[serde(default)]
    pub additional_languages: Vec<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: default_light_theme(),
            dark_theme: default_dark_theme(),
            additional_languages: Vec::new(),
        }
    }
}

fn default_favicon() -> String {
    "img/favicon.ico".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_on_broken_links() -> ReportingSeverity {
    ReportingSeverity::Throw
}
fn default_on_broken_markdown_links() -> ReportingSeverity {
    ReportingSeverity::Warn
}
fn default_locale() -> String {
    "en".to_string()
}
fn default_locales() -> Vec<String> {
    vec!["en".to_string()]
}
fn default_light_theme() -> String {
    "github".to_string()
}
fn default_dark_theme() -> String {
    "dracula".to_string()
}

impl SiteConfig {
    /// Parse a TOML configuration.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse {
            format: "TOML",
            message: e.to_string(),
        })
    }

    /// Parse a YAML configuration.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
            format: "YAML",
            message: e.to_string(),
        })
    }

    /// Load a configuration file, picking the format from its extension.
    ///
    /// The result is not validated; call [`SiteConfig::validate`] before use.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            other => return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string())),
        };

        tracing::debug!("Loaded site config '{}' from {}", config.title, path.display());

        Ok(config)
    }

    /// Resolve a link target to the href emitted in markup.
    ///
    /// Internal routes are joined onto the base URL with a single slash.
    pub fn resolve(&self, target: &LinkTarget) -> String {
        match target {
            LinkTarget::To(route) => join_route(&self.base_url, route),
            LinkTarget::Href(href) => href.clone(),
        }
    }

    /// Resolve an asset path (icon, logo) against the base URL.
    pub fn asset_url(&self, asset: &str) -> String {
        join_route(&self.base_url, asset)
    }

    /// `https://github.com/{organization}/{project}`
    pub fn repository_url(&self) -> String {
        format!(
            "https://github.com/{}/{}",
            self.organization_name, self.project_name
        )
    }

    /// "Edit this page" target for docs.
    pub fn docs_edit_url(&self) -> String {
        self.presets
            .docs
            .edit_url
            .clone()
            .unwrap_or_else(|| self.default_edit_url())
    }

    /// "Edit this page" target for blog posts.
    pub fn blog_edit_url(&self) -> String {
        self.presets
            .blog
            .edit_url
            .clone()
            .unwrap_or_else(|| self.default_edit_url())
    }

    fn default_edit_url(&self) -> String {
        format!("{}/tree/main/", self.repository_url())
    }

    /// Copyright line for the given year, if one is configured.
    pub fn copyright(&self, year: i32) -> Option<String> {
        self.theme
            .footer
            .copyright
            .as_ref()
            .map(|line| line.replace("{year}", &year.to_string()))
    }
}

/// Join a route onto a base path with exactly one separating slash.
fn join_route(base: &str, route: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        route.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_CONFIG;
    use crate::link::Position;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn default_config() -> SiteConfig {
        SiteConfig::from_toml_str(DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn parses_default_config() {
        let config = default_config();

        assert_eq!(config.title, "Profiling Blog");
        assert_eq!(config.tagline, "Learn about .NET Profiling");
        assert_eq!(config.base_url, "/Dotnet_GC/");
        assert_eq!(config.on_broken_links, ReportingSeverity::Throw);
        assert_eq!(config.on_broken_markdown_links, ReportingSeverity::Warn);
        assert_eq!(config.i18n.locales, vec!["en".to_string()]);
        assert_eq!(config.theme.navbar.items.len(), 3);
        assert_eq!(config.theme.navbar.items[2].position, Position::Right);
        assert_eq!(config.theme.footer.links.len(), 2);
        assert_eq!(config.theme.prism.additional_languages, vec!["csharp"]);
    }

    #[test]
    fn resolves_internal_routes_against_base_url() {
        let config = default_config();

        assert_eq!(
            config.resolve(&LinkTarget::To("/docs/intro".to_string())),
            "/Dotnet_GC/docs/intro"
        );
        assert_eq!(config.resolve(&LinkTarget::To("/".to_string())), "/Dotnet_GC/");
        assert_eq!(
            config.resolve(&LinkTarget::Href("https://example.com/x".to_string())),
            "https://example.com/x"
        );
    }

    #[test]
    fn resolves_with_root_base_url() {
        let mut config = default_config();
        config.base_url = "/".to_string();

        assert_eq!(config.resolve(&LinkTarget::To("/blog".to_string())), "/blog");
        assert_eq!(config.asset_url("img/logo.svg"), "/img/logo.svg");
    }

    #[test]
    fn derives_edit_urls_from_repository() {
        let config = default_config();

        assert_eq!(
            config.docs_edit_url(),
            "https://github.com/egonzalezt/Dotnet_GC/tree/main/"
        );
        assert_eq!(config.blog_edit_url(), config.docs_edit_url());
    }

    #[test]
    fn explicit_edit_url_wins() {
        let mut config = default_config();
        config.presets.blog.edit_url = Some("https://example.com/edit/".to_string());

        assert_eq!(config.blog_edit_url(), "https://example.com/edit/");
        assert!(config.docs_edit_url().starts_with("https://github.com/"));
    }

    #[test]
    fn substitutes_copyright_year() {
        let config = default_config();

        let line = config.copyright(2024).unwrap();

        assert!(line.contains("2024"));
        assert!(!line.contains("{year}"));
    }

    #[test]
    fn yaml_and_toml_load_the_same_config() {
        let yaml = r#"
title: Profiling Blog
url: https://egonzalezt.github.io
base_url: /Dotnet_GC/
organization_name: egonzalezt
project_name: Dotnet_GC
theme:
  navbar:
    items:
      - label: Docs
        to: /docs/intro
        position: left
"#;
        let toml = r#"
title = "Profiling Blog"
url = "https://egonzalezt.github.io"
base_url = "/Dotnet_GC/"
organization_name = "egonzalezt"
project_name = "Dotnet_GC"

[[theme.navbar.items]]
label = "Docs"
to = "/docs/intro"
position = "left"
"#;

        assert_eq!(
            SiteConfig::from_yaml_str(yaml).unwrap(),
            SiteConfig::from_toml_str(toml).unwrap()
        );
    }

    #[test]
    fn load_picks_format_from_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, DEFAULT_CONFIG).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.project_name, "Dotnet_GC");

        let other = temp.path().join("site.ini");
        fs::write(&other, DEFAULT_CONFIG).unwrap();
        assert!(matches!(
            SiteConfig::load(&other),
            Err(ConfigError::UnsupportedFormat(ext)) if ext == "ini"
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = tempdir().unwrap();

        let result = SiteConfig::load(&temp.path().join("missing.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn parse_error_names_format() {
        let result = SiteConfig::from_toml_str("title = ");

        assert!(matches!(result, Err(ConfigError::Parse { format: "TOML", .. })));
    }

    #[test]
    fn rejects_unknown_feature_set_at_load() {
        let source = DEFAULT_CONFIG.replace(
            "features = \"gc-overview\"",
            "features = \"bogus\"",
        );

        let result = SiteConfig::from_toml_str(&source);

        assert!(matches!(result, Err(ConfigError::Parse { format: "TOML", .. })));
    }

    #[test]
    fn parses_feature_set_names() {
        assert_eq!(default_config().homepage.features, FeatureSet::GcOverview);
        assert_eq!(
            "learning-path".parse::<FeatureSet>().unwrap(),
            FeatureSet::LearningPath
        );
        assert!(matches!(
            "gc".parse::<FeatureSet>(),
            Err(ConfigError::UnknownFeatureSet(name)) if name == "gc"
        ));
        for set in FeatureSet::ALL {
            assert_eq!(set.name().parse::<FeatureSet>().unwrap(), set);
        }
    }
}
