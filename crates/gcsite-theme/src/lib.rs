//! Presentational fragments for the .NET profiling blog.
//!
//! Renders the homepage feature cards, the navbar and the footer with minijinja,
//! and produces the feature section stylesheet.

pub mod assets;
pub mod features;
pub mod templates;

pub use assets::{check_assets, feature_stylesheet, AssetIndex};
pub use features::{FeatureList, FeatureRecord, IconRef, Markup};
pub use templates::{RenderError, TemplateEngine};
