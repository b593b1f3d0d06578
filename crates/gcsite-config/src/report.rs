//! Broken-link detection for navbar and footer targets.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::link::LinkTarget;
use crate::site::SiteConfig;

/// How a finding is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingSeverity {
    Ignore,
    Log,
    Warn,
    Throw,
}

/// A link target that cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Where the link is declared, e.g. `theme.footer.links[0].items[1]`
    pub location: String,
    /// The raw target
    pub target: String,
    /// Why it is considered broken
    pub reason: &'static str,
}

impl std::fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: '{}' {}", self.location, self.target, self.reason)
    }
}

/// Findings of a link check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    pub broken: Vec<BrokenLink>,
}

impl LinkReport {
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }

    pub fn push(&mut self, location: String, target: &str, reason: &'static str) {
        self.broken.push(BrokenLink {
            location,
            target: target.to_string(),
            reason,
        });
    }

    /// Report the findings with the given severity.
    ///
    /// `throw` turns any finding into an error; the other levels only log.
    pub fn enforce(self, severity: ReportingSeverity) -> Result<(), ConfigError> {
        if self.is_clean() {
            return Ok(());
        }

        match severity {
            ReportingSeverity::Ignore => {}
            ReportingSeverity::Log => {
                for link in &self.broken {
                    tracing::info!("Broken link {}", link);
                }
            }
            ReportingSeverity::Warn => {
                for link in &self.broken {
                    tracing::warn!("Broken link {}", link);
                }
            }
            ReportingSeverity::Throw => return Err(ConfigError::BrokenLinks(self.broken)),
        }

        Ok(())
    }
}

impl SiteConfig {
    /// Check every navbar and footer target for structural problems.
    pub fn check_links(&self) -> LinkReport {
        let mut report = LinkReport::default();

        for (i, item) in self.theme.navbar.items.iter().enumerate() {
            check_target(
                &mut report,
                format!("theme.navbar.items[{}]", i),
                &item.target,
            );
        }

        for (c, column) in self.theme.footer.links.iter().enumerate() {
            for (i, item) in column.items.iter().enumerate() {
                check_target(
                    &mut report,
                    format!("theme.footer.links[{}].items[{}]", c, i),
                    &item.target,
                );
            }
        }

        report
    }
}

fn check_target(report: &mut LinkReport, location: String, target: &LinkTarget) {
    let problem = match target {
        LinkTarget::To(route) => route_problem(route),
        LinkTarget::Href(href) => href_problem(href),
    };

    if let Some(reason) = problem {
        report.push(location, target.as_str(), reason);
    }
}

fn route_problem(route: &str) -> Option<&'static str> {
    if route.is_empty() {
        Some("is empty")
    } else if route.contains("://") {
        Some("is an absolute URL; use `href` for external links")
    } else if !route.starts_with('/') {
        Some("is not an absolute route (missing leading '/')")
    } else if route.split('/').any(|segment| segment == "..") {
        Some("escapes the site root")
    } else if route.chars().any(char::is_whitespace) {
        Some("contains whitespace")
    } else {
        None
    }
}

fn href_problem(href: &str) -> Option<&'static str> {
    match url::Url::parse(href) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https" | "mailto") => None,
        Ok(_) => Some("uses an unsupported scheme"),
        Err(_) => Some("is not an absolute URL"),
    }
}
