//! Errors raised while loading or checking a site configuration.

use std::path::PathBuf;

use crate::report::BrokenLink;
use crate::validate::ValidationError;

/// Errors that can occur when loading or checking a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("Unsupported config format '{0}' (expected .toml, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Invalid site configuration:\n{}", bullet_list(.0))]
    Invalid(Vec<ValidationError>),

    #[error("Found {} broken link(s):\n{}", .0.len(), bullet_list(.0))]
    BrokenLinks(Vec<BrokenLink>),

    #[error("Unknown feature set '{0}' (expected gc-overview or learning-path)")]
    UnknownFeatureSet(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}

fn bullet_list<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
