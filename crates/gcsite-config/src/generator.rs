//! Export of the configuration in the shape the site generator consumes.

use serde_json::{json, Value};

use crate::error::ConfigError;
use crate::link::LinkTarget;
use crate::report::ReportingSeverity;
use crate::site::SiteConfig;

impl SiteConfig {
    /// Serialize to the generator's camelCase configuration object.
    ///
    /// Derived values (edit URLs, copyright year) are filled in; link targets
    /// stay unresolved since the generator applies `baseUrl` itself.
    pub fn to_generator_json(&self, year: i32) -> Result<Value, ConfigError> {
        let severity = |s: ReportingSeverity| {
            serde_json::to_value(s).map_err(|e| ConfigError::Serialize(e.to_string()))
        };

        let navbar_items: Vec<Value> = self
            .theme
            .navbar
            .items
            .iter()
            .map(|item| {
                let mut value = link_json(&item.label, &item.target);
                value["position"] = json!(item.position.as_str());
                value
            })
            .collect();

        let footer_links: Vec<Value> = self
            .theme
            .footer
            .links
            .iter()
            .map(|column| {
                let items: Vec<Value> = column
                    .items
                    .iter()
                    .map(|item| link_json(&item.label, &item.target))
                    .collect();
                json!({ "title": column.title, "items": items })
            })
            .collect();

        let mut navbar = json!({ "items": navbar_items });
        if let Some(title) = &self.theme.navbar.title {
            navbar["title"] = json!(title);
        }
        if let Some(logo) = &self.theme.navbar.logo {
            navbar["logo"] = json!({ "alt": logo.alt, "src": logo.src });
        }

        let mut footer = json!({
            "style": self.theme.footer.style.as_str(),
            "links": footer_links,
        });
        if let Some(copyright) = self.copyright(year) {
            footer["copyright"] = json!(copyright);
        }

        let mut theme_config = json!({
            "navbar": navbar,
            "footer": footer,
            "prism": {
                "theme": self.theme.prism.theme,
                "darkTheme": self.theme.prism.dark_theme,
                "additionalLanguages": self.theme.prism.additional_languages,
            },
        });
        if let Some(image) = &self.theme.image {
            theme_config["image"] = json!(image);
        }

        Ok(json!({
            "title": self.title,
            "tagline": self.tagline,
            "favicon": self.favicon,
            "url": self.url,
            "baseUrl": self.base_url,
            "organizationName": self.organization_name,
            "projectName": self.project_name,
            "onBrokenLinks": severity(self.on_broken_links)?,
            "onBrokenMarkdownLinks": severity(self.on_broken_markdown_links)?,
            "i18n": {
                "defaultLocale": self.i18n.default_locale,
                "locales": self.i18n.locales,
            },
            "presets": [[
                "classic",
                {
                    "docs": { "editUrl": self.docs_edit_url() },
                    "blog": { "editUrl": self.blog_edit_url() },
                },
            ]],
            "themeConfig": theme_config,
        }))
    }
}

fn link_json(label: &str, target: &LinkTarget) -> Value {
    let mut value = json!({ "label": label });
    value[target.key()] = json!(target.as_str());
    value
}
