//! Structural validation of a loaded configuration.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;
use crate::link::LinkTarget;
use crate::site::SiteConfig;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyField(String),
    InvalidBaseUrl {
        value: String,
        reason: &'static str,
    },
    InvalidUrl {
        field: String,
        value: String,
        reason: String,
    },
    NoLocales,
    InvalidLocale(String),
    DefaultLocaleMissing(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "Field '{}' must not be empty", field),
            Self::InvalidBaseUrl { value, reason } => {
                write!(f, "Invalid base_url '{}': {}", value, reason)
            }
            Self::InvalidUrl {
                field,
                value,
                reason,
            } => write!(f, "Invalid URL for '{}' ('{}'): {}", field, value, reason),
            Self::NoLocales => write!(f, "i18n.locales must list at least one locale"),
            Self::InvalidLocale(tag) => write!(f, "Invalid locale tag '{}'", tag),
            Self::DefaultLocaleMissing(tag) => {
                write!(f, "Default locale '{}' is not listed in i18n.locales", tag)
            }
        }
    }
}

impl SiteConfig {
    /// Validate the configuration, collecting every violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// All rule violations, in declaration order.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        require(&mut errors, "title", &self.title);
        require(&mut errors, "organization_name", &self.organization_name);
        require(&mut errors, "project_name", &self.project_name);

        if let Some(reason) = base_url_problem(&self.base_url) {
            errors.push(ValidationError::InvalidBaseUrl {
                value: self.base_url.clone(),
                reason,
            });
        }

        if let Err(reason) = check_origin(&self.url) {
            errors.push(ValidationError::InvalidUrl {
                field: "url".to_string(),
                value: self.url.clone(),
                reason,
            });
        }

        self.validate_locales(&mut errors);

        for (field, edit_url) in [
            ("presets.docs.edit_url", &self.presets.docs.edit_url),
            ("presets.blog.edit_url", &self.presets.blog.edit_url),
        ] {
            if let Some(value) = edit_url {
                if let Err(reason) = check_absolute(value) {
                    errors.push(ValidationError::InvalidUrl {
                        field: field.to_string(),
                        value: value.clone(),
                        reason,
                    });
                }
            }
        }

        for (i, item) in self.theme.navbar.items.iter().enumerate() {
            let path = format!("theme.navbar.items[{}]", i);
            require(&mut errors, &format!("{}.label", path), &item.label);
            require_target(&mut errors, &path, &item.target);
        }

        for (c, column) in self.theme.footer.links.iter().enumerate() {
            let column_path = format!("theme.footer.links[{}]", c);
            require(&mut errors, &format!("{}.title", column_path), &column.title);

            for (i, item) in column.items.iter().enumerate() {
                let path = format!("{}.items[{}]", column_path, i);
                require(&mut errors, &format!("{}.label", path), &item.label);
                require_target(&mut errors, &path, &item.target);
            }
        }

        errors
    }

    fn validate_locales(&self, errors: &mut Vec<ValidationError>) {
        if self.i18n.locales.is_empty() {
            errors.push(ValidationError::NoLocales);
        }

        for tag in &self.i18n.locales {
            if !is_locale_tag(tag) {
                errors.push(ValidationError::InvalidLocale(tag.clone()));
            }
        }

        if !self.i18n.locales.contains(&self.i18n.default_locale) {
            errors.push(ValidationError::DefaultLocaleMissing(
                self.i18n.default_locale.clone(),
            ));
        }
    }
}

fn require(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::EmptyField(field.to_string()));
    }
}

fn require_target(errors: &mut Vec<ValidationError>, path: &str, target: &LinkTarget) {
    require(errors, &format!("{}.{}", path, target.key()), target.as_str());
}

fn base_url_problem(base_url: &str) -> Option<&'static str> {
    if base_url.is_empty() {
        Some("must not be empty")
    } else if !base_url.starts_with('/') {
        Some("must start with '/'")
    } else if !base_url.ends_with('/') {
        Some("must end with '/'")
    } else if base_url.contains("//") {
        Some("must not contain empty path segments")
    } else if base_url.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else {
        None
    }
}

fn check_absolute(value: &str) -> Result<url::Url, String> {
    let parsed = url::Url::parse(value).map_err(|e| e.to_string())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", parsed.scheme()));
    }
    Ok(parsed)
}

/// The site origin: an http(s) URL without path, query or fragment.
fn check_origin(value: &str) -> Result<(), String> {
    let parsed = check_absolute(value)?;
    if parsed.path() != "/" {
        return Err("must not include a path; use base_url instead".to_string());
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err("must not include a query or fragment".to_string());
    }
    Ok(())
}

// Language subtag followed by optional script/region/variant subtags
static LOCALE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("Invalid locale regex")
});

fn is_locale_tag(tag: &str) -> bool {
    LOCALE_RE.is_match(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_CONFIG;
    use crate::link::{FooterColumn, LinkItem};

    fn default_config() -> SiteConfig {
        SiteConfig::from_toml_str(DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(default_config().validate().is_ok());
    }

    #[test]
    fn reports_each_base_url_violation() {
        let cases = [
            ("", "must not be empty"),
            ("Dotnet_GC/", "must start with '/'"),
            ("/Dotnet_GC", "must end with '/'"),
            ("/Dotnet//GC/", "must not contain empty path segments"),
            ("/Dotnet GC/", "must not contain whitespace"),
        ];

        for (value, expected) in cases {
            let mut config = default_config();
            config.base_url = value.to_string();

            let errors = config.validation_errors();

            assert_eq!(
                errors,
                vec![ValidationError::InvalidBaseUrl {
                    value: value.to_string(),
                    reason: expected,
                }],
                "base_url {:?}",
                value
            );
        }
    }

    #[test]
    fn collects_empty_labels_and_targets() {
        let mut config = default_config();
        config.theme.navbar.items[0].label = String::new();
        config.theme.footer.links.push(FooterColumn {
            title: " ".to_string(),
            items: vec![LinkItem {
                label: "Nowhere".to_string(),
                target: LinkTarget::Href(String::new()),
            }],
        });

        let errors = config.validation_errors();

        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyField("theme.navbar.items[0].label".to_string()),
                ValidationError::EmptyField("theme.footer.links[2].title".to_string()),
                ValidationError::EmptyField("theme.footer.links[2].items[0].href".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_origin_with_path() {
        let mut config = default_config();
        config.url = "https://egonzalezt.github.io/Dotnet_GC".to_string();

        let errors = config.validation_errors();

        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidUrl { field, .. }] if field == "url"
        ));
    }

    #[test]
    fn checks_locales() {
        let mut config = default_config();
        config.i18n.default_locale = "zh-Hans".to_string();
        config.i18n.locales = vec!["en".to_string(), "not a tag".to_string()];

        let errors = config.validation_errors();

        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidLocale("not a tag".to_string()),
                ValidationError::DefaultLocaleMissing("zh-Hans".to_string()),
            ]
        );
    }

    #[test]
    fn accepts_region_and_script_subtags() {
        assert!(is_locale_tag("en"));
        assert!(is_locale_tag("zh-Hans"));
        assert!(is_locale_tag("pt-BR"));
        assert!(!is_locale_tag("e"));
        assert!(!is_locale_tag("en_US"));
        assert!(!is_locale_tag("en-"));
    }

    #[test]
    fn rejects_relative_edit_url() {
        let mut config = default_config();
        config.presets.docs.edit_url = Some("tree/main/".to_string());

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("presets.docs.edit_url"));
    }
}
