//! Site configuration for the .NET profiling blog.
//!
//! This crate provides the `SiteConfig` data model handed to the site generator,
//! loading from TOML or YAML, validation of navigation and URLs, and a broken-link
//! check that honors the configured reporting severity.

pub mod defaults;
pub mod error;
pub mod generator;
pub mod link;
pub mod report;
pub mod site;
pub mod validate;

pub use defaults::DEFAULT_CONFIG;
pub use error::ConfigError;
pub use link::{FooterColumn, LinkItem, LinkTarget, NavbarItem, Position};
pub use report::{BrokenLink, LinkReport, ReportingSeverity};
pub use site::{
    ContentPreset, FeatureSet, FooterConfig, FooterStyle, HomepageConfig, I18nConfig, Logo, NavbarConfig,
    PresetsConfig, PrismConfig, SiteConfig, ThemeConfig,
};
pub use validate::ValidationError;
