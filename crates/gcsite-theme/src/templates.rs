//! Template engine for rendering site fragments.

use minijinja::{context, Environment};
use serde::Serialize;

use gcsite_config::{LinkTarget, NavbarItem, Position, SiteConfig};

use crate::features::FeatureList;

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to process stylesheet: {0}")]
    Stylesheet(String),

    #[error("Failed to scan assets: {0}")]
    Assets(String),
}

impl From<minijinja::Error> for RenderError {
    fn from(e: minijinja::Error) -> Self {
        Self::Template(e.to_string())
    }
}

/// A feature card ready for the template.
#[derive(Debug, Clone, Serialize)]
struct FeatureCard<'a> {
    title: &'a str,
    icon: String,
    description: &'a str,
}

/// A resolved link.
#[derive(Debug, Clone, Serialize)]
struct LinkView<'a> {
    label: &'a str,
    href: String,
    external: bool,
}

#[derive(Debug, Clone, Serialize)]
struct ColumnView<'a> {
    title: &'a str,
    items: Vec<LinkView<'a>>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("macros.html", MACROS_TEMPLATE)
            .expect("Failed to add macros template");
        env.add_template("features.html", FEATURES_TEMPLATE)
            .expect("Failed to add features template");
        env.add_template("navbar.html", NAVBAR_TEMPLATE)
            .expect("Failed to add navbar template");
        env.add_template("footer.html", FOOTER_TEMPLATE)
            .expect("Failed to add footer template");

        Self { env }
    }

    /// Render the homepage feature section, one card per record in list order.
    ///
    /// Icons are resolved against the site's base URL.
    pub fn render_features(
        &self,
        features: &FeatureList,
        config: &SiteConfig,
    ) -> Result<String, RenderError> {
        let cards: Vec<FeatureCard> = features
            .iter()
            .map(|feature| FeatureCard {
                title: &feature.title,
                icon: config.asset_url(feature.icon.as_str()),
                description: feature.description.as_str(),
            })
            .collect();

        let tmpl = self.env.get_template("features.html")?;
        Ok(tmpl.render(context! { features => cards })?)
    }

    /// Render the top navigation: brand, then left items, then right items.
    pub fn render_navbar(&self, config: &SiteConfig) -> Result<String, RenderError> {
        let navbar = &config.theme.navbar;
        let (left, right): (Vec<&NavbarItem>, Vec<&NavbarItem>) = navbar
            .items
            .iter()
            .partition(|item| item.position == Position::Left);

        let logo = navbar.logo.as_ref().map(|logo| {
            context! {
                alt => &logo.alt,
                src => config.asset_url(&logo.src),
            }
        });

        let tmpl = self.env.get_template("navbar.html")?;
        Ok(tmpl.render(context! {
            home => config.resolve(&LinkTarget::To("/".to_string())),
            title => &navbar.title,
            logo => logo,
            left => nav_links(config, &left),
            right => nav_links(config, &right),
        })?)
    }

    /// Render the footer columns and copyright line.
    pub fn render_footer(&self, config: &SiteConfig, year: i32) -> Result<String, RenderError> {
        let columns: Vec<ColumnView> = config
            .theme
            .footer
            .links
            .iter()
            .map(|column| ColumnView {
                title: &column.title,
                items: column
                    .items
                    .iter()
                    .map(|item| link_view(config, &item.label, &item.target))
                    .collect(),
            })
            .collect();

        let tmpl = self.env.get_template("footer.html")?;
        Ok(tmpl.render(context! {
            style => config.theme.footer.style.as_str(),
            columns => columns,
            copyright => config.copyright(year),
        })?)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn link_view<'a>(config: &SiteConfig, label: &'a str, target: &LinkTarget) -> LinkView<'a> {
    LinkView {
        label,
        href: config.resolve(target),
        external: target.is_external(),
    }
}

fn nav_links<'a>(config: &SiteConfig, items: &[&'a NavbarItem]) -> Vec<LinkView<'a>> {
    items
        .iter()
        .map(|item| link_view(config, &item.label, &item.target))
        .collect()
}

const MACROS_TEMPLATE: &str = r##"{% macro link(item, class) -%}
<a class="{{ class }}" href="{{ item.href }}"{% if item.external %} target="_blank" rel="noopener noreferrer"{% endif %}>{{ item.label }}</a>
{%- endmacro %}"##;

const FEATURES_TEMPLATE: &str = r##"<section class="features">
  <div class="container">
    <div class="row">
    {%- for feature in features %}
      <div class="col col--4">
        <div class="text--center">
          <img class="featureSvg" src="{{ feature.icon }}" alt="" role="img">
        </div>
        <div class="text--center padding-horiz--md">
          <h3>{{ feature.title }}</h3>
          <p>{{ feature.description | safe }}</p>
        </div>
      </div>
    {%- endfor %}
    </div>
  </div>
</section>"##;

const NAVBAR_TEMPLATE: &str = r##"{% import "macros.html" as m %}<nav class="navbar">
  <div class="navbar__inner">
    <div class="navbar__items">
      <a class="navbar__brand" href="{{ home }}">
        {%- if logo %}<img class="navbar__logo" src="{{ logo.src }}" alt="{{ logo.alt }}">{% endif %}
        {%- if title %}<b class="navbar__title">{{ title }}</b>{% endif -%}
      </a>
      {%- for item in left %}
      {{ m.link(item, "navbar__item navbar__link") }}
      {%- endfor %}
    </div>
    <div class="navbar__items navbar__items--right">
      {%- for item in right %}
      {{ m.link(item, "navbar__item navbar__link") }}
      {%- endfor %}
    </div>
  </div>
</nav>"##;

const FOOTER_TEMPLATE: &str = r##"{% import "macros.html" as m %}<footer class="footer footer--{{ style }}">
  <div class="container">
    <div class="row footer__links">
    {%- for column in columns %}
      <div class="col footer__col">
        <div class="footer__title">{{ column.title }}</div>
        <ul class="footer__items">
        {%- for item in column.items %}
          <li class="footer__item">{{ m.link(item, "footer__link-item") }}</li>
        {%- endfor %}
        </ul>
      </div>
    {%- endfor %}
    </div>
    {%- if copyright %}
    <div class="footer__copyright">{{ copyright }}</div>
    {%- endif %}
  </div>
</footer>"##;
