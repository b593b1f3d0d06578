//! The configuration shipped with `gcsite init`.

/// Site configuration of the .NET profiling blog.
pub const DEFAULT_CONFIG: &str = r#"# gcsite configuration

title = "Profiling Blog"
tagline = "Learn about .NET Profiling"
favicon = "img/favicon.ico"

# Production origin and the path the site is served under
url = "https://egonzalezt.github.io"
base_url = "/Dotnet_GC/"

# Used to build GitHub links
organization_name = "egonzalezt"
project_name = "Dotnet_GC"

# ignore | log | warn | throw
on_broken_links = "throw"
on_broken_markdown_links = "warn"

[i18n]
default_locale = "en"
locales = ["en"]

# edit_url defaults to https://github.com/<organization_name>/<project_name>/tree/main/
[presets.docs]
[presets.blog]

[homepage]
# gc-overview | learning-path
features = "gc-overview"

[theme]
image = "img/docusaurus-social-card.jpg"

[theme.navbar]
title = "Profiling Blog"
logo = { alt = "Profiling Blog Logo", src = "img/logo.svg" }
items = [
  { to = "/docs/intro", label = "Docs", position = "left" },
  { to = "/blog", label = "Blog", position = "left" },
  { href = "https://github.com/egonzalezt/Dotnet_GC", label = "GitHub", position = "right" },
]

[theme.footer]
style = "dark"
copyright = "Copyright © {year} egonzalezt. Built with gcsite."

[[theme.footer.links]]
title = "Docs"
items = [
  { label = "GC DOCS", to = "/docs/intro" },
  { label = "Garbage Collector (GC)", to = "/docs/category/garbage-collector-gc" },
  { label = "OS Memory", to = "/docs/category/os-memory" },
  { label = "Performance", to = "/docs/category/performance" },
]

[[theme.footer.links]]
title = "More"
items = [
  { label = "Blog", to = "/blog" },
  { label = "GitHub", href = "https://github.com/egonzalezt/Dotnet_GC" },
]

[theme.prism]
theme = "github"
dark_theme = "dracula"
additional_languages = ["csharp"]
"#;
