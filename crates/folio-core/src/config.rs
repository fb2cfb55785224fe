//! Site configuration management.

use std::{fmt, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Typography theme settings.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, shown in the layout heading.
    pub title: String,

    /// Absolute URL the site is published under (e.g., "https://example.com").
    #[serde(default)]
    pub base_url: String,

    /// Path prefix the site is mounted at (e.g., "/blog"). Empty for the root.
    #[serde(default)]
    pub base_path: String,

    /// Language code for the `lang` attribute.
    #[serde(default = "default_language")]
    pub language: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,

    /// Header navigation entries, in display order.
    #[serde(default)]
    pub menu_links: Vec<NavigationLink>,
}

/// One entry of the header navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    /// Link text.
    pub name: String,

    /// Target path.
    pub link: String,
}

impl NavigationLink {
    /// Create a navigation link.
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// Environment the site is built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local authoring: typography CSS is injected inline into every page.
    #[default]
    Development,
    /// Published build: typography CSS is written once as a stylesheet.
    Production,
}

impl Environment {
    /// Whether this is a production build.
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Target environment.
    #[serde(default)]
    pub environment: Environment,

    /// Whether to publish drafts.
    #[serde(default)]
    pub drafts: bool,

    /// Syntax highlighting theme name.
    #[serde(default = "default_syntax_theme")]
    pub syntax_theme: String,
}

/// Typography theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Name of the base theme preset.
    #[serde(default = "default_base_theme")]
    pub base: String,

    /// Extra selector overrides, merged after the built-in override table.
    #[serde(default)]
    pub overrides: IndexMap<String, IndexMap<String, String>>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_syntax_theme() -> String {
    "base16-ocean.dark".to_string()
}

fn default_base_theme() -> String {
    "wordpress-2016".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            environment: Environment::default(),
            drafts: false,
            syntax_theme: default_syntax_theme(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            base: default_base_theme(),
            overrides: IndexMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            CoreError::Toml(source) => CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                source,
            ),
            other => other,
        })?;

        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `FOLIO__SECTION__KEY` environment variables
    /// override file values.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if !self.site.base_path.is_empty() && !self.site.base_path.starts_with('/') {
            return Err(CoreError::config("site.base_path must start with '/'"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        for link in &self.site.menu_links {
            if link.name.trim().is_empty() {
                tracing::warn!(link = %link.link, "menu link has an empty name");
            }
        }

        Ok(())
    }

    /// The site root path, i.e. the base path followed by a slash.
    pub fn root_path(&self) -> String {
        format!("{}/", self.site.base_path.trim_end_matches('/'))
    }

    /// Prefix a site-relative path with the base path.
    pub fn path_for(&self, path: &str) -> String {
        let base = self.site.base_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        format!("{base}{}", self.path_for(path))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r##"
[site]
title = "Sam's Blog"
base_url = "https://samueleshun.com"
author = "Sam Eshun"

[[site.menu_links]]
name = "About"
link = "/about"

[[site.menu_links]]
name = "Blog"
link = "/"

[build]
output_dir = "dist"
environment = "production"
drafts = true

[theme]
base = "wordpress-2016"

[theme.overrides."a.anchor"]
box-shadow = "none"
"##
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Sam's Blog");
        assert_eq!(config.site.author.as_deref(), Some("Sam Eshun"));
        assert_eq!(
            config.site.menu_links,
            vec![
                NavigationLink::new("About", "/about"),
                NavigationLink::new("Blog", "/"),
            ]
        );
        assert_eq!(config.build.output_dir, "dist");
        assert_eq!(config.build.environment, Environment::Production);
        assert!(config.build.drafts);
        assert_eq!(config.theme.base, "wordpress-2016");
        assert_eq!(
            config.theme.overrides["a.anchor"]["box-shadow"].as_str(),
            "none"
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml(
            r#"
[site]
title = "Minimal Site"
"#,
        )
        .expect("parse config");

        assert!(config.site.menu_links.is_empty());
        assert_eq!(config.site.language, "en");
        assert_eq!(config.build.output_dir, "public");
        assert_eq!(config.build.environment, Environment::Development);
        assert!(!config.build.drafts);
        assert_eq!(config.build.syntax_theme, "base16-ocean.dark");
        assert_eq!(config.theme.base, "wordpress-2016");
        assert!(config.theme.overrides.is_empty());
    }

    #[test]
    fn test_menu_link_order_preserved() {
        let config = Config::from_toml(
            r#"
[site]
title = "Ordered"
menu_links = [
    { name = "Zeta", link = "/z" },
    { name = "Alpha", link = "/a" },
    { name = "Zeta", link = "/z" },
]
"#,
        )
        .expect("parse config");

        let names: Vec<_> = config
            .site
            .menu_links
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_theme_overrides_keep_insertion_order() {
        let config = Config::from_toml(
            r#"
[site]
title = "Themed"

[theme.overrides."h2"]
color = "red"

[theme.overrides."blockquote"]
opacity = "0.5"
"#,
        )
        .expect("parse config");

        let selectors: Vec<_> = config.theme.overrides.keys().map(String::as_str).collect();
        assert_eq!(selectors, vec!["h2", "blockquote"]);
    }

    #[test]
    fn test_root_and_paths() {
        let mut config = Config::from_toml("[site]\ntitle = \"T\"").expect("parse");
        assert_eq!(config.root_path(), "/");
        assert_eq!(config.path_for("/about"), "/about");

        config.site.base_path = "/blog".to_string();
        config.site.base_url = "https://example.com".to_string();
        assert_eq!(config.root_path(), "/blog/");
        assert_eq!(config.path_for("about"), "/blog/about");
        assert_eq!(config.url_for("/hello/"), "https://example.com/blog/hello/");
    }

    #[test]
    fn test_config_validation_empty_title() {
        let result = Config::from_toml("[site]\ntitle = \"  \"");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_relative_base_path() {
        let result = Config::from_toml("[site]\ntitle = \"T\"\nbase_path = \"blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_unknown_environment() {
        let result = Config::from_toml(
            r#"
[site]
title = "T"

[build]
environment = "staging"
"#,
        );
        assert!(matches!(result, Err(CoreError::Toml(_))));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
        let config_path = dir.join("config.toml");
        std::fs::write(&config_path, content).expect("write config");
        config_path
    }

    #[test]
    fn test_load_with_env_accepts_non_string_overrides() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = write_config(
            dir.path(),
            r#"
[site]
title = "Layered"

[theme.overrides."blockquote"]
opacity = 0.6
"#,
        );

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.site.title, "Layered");
        assert_eq!(config.theme.overrides["blockquote"]["opacity"], "0.6");
    }

    #[test]
    fn test_load_with_env_applies_environment_overrides() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = write_config(
            dir.path(),
            "[site]\ntitle = \"Env\"\nauthor = \"File Author\"\n",
        );

        // SAFETY: no other test in this crate touches this variable.
        unsafe { std::env::set_var("FOLIO__SITE__AUTHOR", "Env Author") };
        let config = Config::load_with_env(&config_path);
        unsafe { std::env::remove_var("FOLIO__SITE__AUTHOR") };

        let config = config.expect("load config");
        assert_eq!(config.site.author.as_deref(), Some("Env Author"));
        assert_eq!(config.site.title, "Env");
    }

    #[test]
    fn test_load_with_env_validates() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = write_config(dir.path(), "[site]\ntitle = \"\"\n");
        assert!(Config::load_with_env(&config_path).is_err());
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }
}
