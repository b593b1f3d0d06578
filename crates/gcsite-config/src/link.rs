//! Navigation link items shared by the navbar and the footer.

use serde::{Deserialize, Serialize};

/// Where a link points.
///
/// Internal routes (`to`) are resolved against the site's base URL; external
/// links (`href`) are used verbatim. Exactly one of the two keys must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "RawTarget")]
pub enum LinkTarget {
    /// Internal route, e.g. `/docs/intro`
    To(String),
    /// External URL, e.g. `https://github.com/...`
    Href(String),
}

impl LinkTarget {
    /// The raw target string, unresolved.
    pub fn as_str(&self) -> &str {
        match self {
            Self::To(route) => route,
            Self::Href(href) => href,
        }
    }

    /// Whether this target leaves the site.
    pub fn is_external(&self) -> bool {
        matches!(self, Self::Href(_))
    }

    /// Key used by the site generator for this kind of target.
    pub fn key(&self) -> &'static str {
        match self {
            Self::To(_) => "to",
            Self::Href(_) => "href",
        }
    }
}

/// Both target keys as written in the config file.
#[derive(Deserialize)]
struct RawTarget {
    to: Option<String>,
    href: Option<String>,
}

impl TryFrom<RawTarget> for LinkTarget {
    type Error = String;

    fn try_from(raw: RawTarget) -> Result<Self, Self::Error> {
        match (raw.to, raw.href) {
            (Some(route), None) => Ok(Self::To(route)),
            (None, Some(href)) => Ok(Self::Href(href)),
            (Some(route), Some(href)) => Err(format!(
                "link sets both `to` ('{}') and `href` ('{}'); use exactly one",
                route, href
            )),
            (None, None) => Err("link needs either `to` or `href`".to_string()),
        }
    }
}

/// Side of the navbar an item is placed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A top navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarItem {
    /// Display label
    pub label: String,

    /// Link target (`to` or `href`)
    #[serde(flatten)]
    pub target: LinkTarget,

    /// Navbar side
    #[serde(default)]
    pub position: Position,
}

/// A footer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Display label
    pub label: String,

    /// Link target (`to` or `href`)
    #[serde(flatten)]
    pub target: LinkTarget,
}

/// A titled group of footer links, rendered as one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    /// Column heading
    pub title: String,

    /// Links in display order
    #[serde(default)]
    pub items: Vec<LinkItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Items {
        items: Vec<NavbarItem>,
    }

    #[test]
    fn deserializes_internal_and_external_targets() {
        let Items { items } = toml::from_str(
            r#"
items = [
  { to = "/blog", label = "Blog", position = "left" },
  { href = "https://github.com/egonzalezt/Dotnet_GC", label = "GitHub", position = "right" },
]
"#,
        )
        .unwrap();

        assert_eq!(items[0].target, LinkTarget::To("/blog".to_string()));
        assert_eq!(items[0].position, Position::Left);
        assert!(items[1].target.is_external());
        assert_eq!(items[1].position, Position::Right);
    }

    #[test]
    fn position_defaults_to_left() {
        let item: NavbarItem = toml::from_str("label = \"Docs\"\nto = \"/docs/intro\"").unwrap();

        assert_eq!(item.position, Position::Left);
        assert_eq!(item.target.key(), "to");
    }

    #[test]
    fn rejects_item_without_target() {
        let result = toml::from_str::<LinkItem>("label = \"Docs\"");

        assert!(result.is_err());
    }

    #[test]
    fn rejects_item_with_both_targets() {
        let toml_err =
            toml::from_str::<LinkItem>("label = \"X\"\nto = \"/a\"\nhref = \"https://b\"")
                .unwrap_err();
        let yaml_err = serde_yaml::from_str::<NavbarItem>("label: X\nto: /a\nhref: https://b\n")
            .unwrap_err();

        assert!(toml_err.to_string().contains("both `to`"), "{}", toml_err);
        assert!(yaml_err.to_string().contains("both `to`"), "{}", yaml_err);
    }

    #[test]
    fn serializes_single_target_key() {
        let item = LinkItem {
            label: "GitHub".to_string(),
            target: LinkTarget::Href("https://github.com/egonzalezt/Dotnet_GC".to_string()),
        };

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["href"], "https://github.com/egonzalezt/Dotnet_GC");
        assert!(value.get("to").is_none());
    }
}
