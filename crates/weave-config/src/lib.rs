//! Configuration management for weave.
//!
//! Parses `weave.toml` files with serde and provides auto-discovery of the
//! config file in parent directories. CLI settings can be applied during load
//! via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `output.dir`
//!
//! ## Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//! name = "Example"
//! description = "Notes and articles"
//! language = "en-us"
//! time_zone = "+02:00"
//!
//! [feed]
//! max_items = 10
//!
//! [[pages]]
//! path = "posts/first"
//! title = "First post"
//! published = "2024-01-02T10:00:00Z"
//! change_frequency = "monthly"
//! priority = 0.8
//! ```

mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use weave_date::DateError;
use weave_sitemap::ChangeFrequency;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override pretty-print indentation.
    pub indent: Option<usize>,
    /// Override the site URL.
    pub site_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "weave.toml";

/// Largest accepted indentation width.
const MAX_INDENT: usize = 16;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide metadata.
    pub site: SiteConfig,
    /// Rendering options.
    pub render: RenderConfig,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// RSS feed generation.
    pub feed: FeedConfig,
    /// Sitemap generation.
    pub sitemap: SitemapConfig,
    /// Pages of the site.
    pub pages: Vec<PageConfig>,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute base URL, e.g. `https://example.com`.
    pub url: String,
    /// Site name, used as the feed title.
    pub name: String,
    /// Site description, used as the feed description.
    pub description: String,
    /// Language code, e.g. `en-us`.
    pub language: Option<String>,
    /// UTC offset applied to every rendered date (`Z`, `UTC`, `+HH:MM`).
    pub time_zone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: String::new(),
            description: String::new(),
            language: None,
            time_zone: "UTC".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parsed `time_zone`.
    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        Ok(weave_date::parse_utc_offset(&self.time_zone)?)
    }

    /// Absolute URL of a site-relative path.
    ///
    /// Exactly one `/` separates the base URL from the path.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{base}/")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// Rendering options.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level. Compact output when unset.
    pub indent: Option<usize>,
}

/// Raw output configuration as parsed from TOML (paths as strings).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory generated files are written to.
    pub dir: PathBuf,
}

/// RSS feed generation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Whether the feed is generated.
    pub enabled: bool,
    /// File name (and site path) of the feed.
    pub path: String,
    /// Maximum number of items, newest first.
    pub max_items: usize,
    /// Minutes readers may cache the feed.
    pub ttl: Option<u32>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "feed.rss".to_owned(),
            max_items: 20,
            ttl: None,
        }
    }
}

/// Sitemap generation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Whether the sitemap is generated.
    pub enabled: bool,
    /// File name of the sitemap.
    pub path: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "sitemap.xml".to_owned(),
        }
    }
}

/// A page of the site.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Site-relative path, e.g. `posts/first`.
    pub path: String,
    /// Page title.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Publication time (RFC 3339 string).
    pub published: DateTime<FixedOffset>,
    /// Last modification time (RFC 3339 string).
    pub modified: Option<DateTime<FixedOffset>>,
    /// Expected change frequency.
    pub change_frequency: Option<ChangeFrequency>,
    /// Sitemap priority in `0.0..=1.0`.
    pub priority: Option<f64>,
    /// Whether the page is listed in the feed.
    #[serde(default = "default_in_feed")]
    pub in_feed: bool,
    /// HTML body embedded in the feed item.
    pub content: Option<String>,
}

impl PageConfig {
    /// Last modification time, falling back to the publication time.
    #[must_use]
    pub fn last_modified(&self) -> DateTime<FixedOffset> {
        self.modified.unwrap_or(self.published)
    }
}

fn default_in_feed() -> bool {
    true
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Unparsable `site.time_zone`.
    #[error("Configuration error in site.time_zone: {0}")]
    TimeZone(#[from] DateError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `weave.toml` in the current directory and its parents.
    ///
    /// CLI settings are applied after loading and path resolution, and the
    /// result is validated afterwards so overrides are checked too.
    ///
    /// # Errors
    ///
    /// Returns error if no config file is found, parsing fails or the
    /// resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => Self::discover_config().ok_or_else(|| {
                ConfigError::NotFound(
                    std::env::current_dir()
                        .unwrap_or_default()
                        .join(CONFIG_FILENAME),
                )
            })?,
        };

        let mut config = Self::load_from_file(&path)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        tracing::info!(
            path = %path.display(),
            pages = config.pages.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
        if let Some(indent) = settings.indent {
            self.render.indent = Some(indent);
        }
        if let Some(site_url) = &settings.site_url {
            self.site.url.clone_from(site_url);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered configuration file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            render: RenderConfig::default(),
            output: OutputConfigRaw::default(),
            feed: FeedConfig::default(),
            sitemap: SitemapConfig::default(),
            pages: Vec::new(),
            output_resolved: OutputConfig {
                dir: base.join("public"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails, or
    /// `ConfigError::TimeZone` if `site.time_zone` cannot be parsed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_render()?;
        self.validate_outputs()?;
        self.validate_pages()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.url, "site.url")?;
        require_http_url(&self.site.url, "site.url")?;
        require_non_empty(&self.site.name, "site.name")?;
        self.site.utc_offset()?;
        Ok(())
    }

    /// Validate render configuration.
    fn validate_render(&self) -> Result<(), ConfigError> {
        if let Some(indent) = self.render.indent
            && indent > MAX_INDENT
        {
            return Err(ConfigError::Validation(format!(
                "render.indent cannot exceed {MAX_INDENT}"
            )));
        }
        Ok(())
    }

    /// Validate feed and sitemap configuration.
    fn validate_outputs(&self) -> Result<(), ConfigError> {
        if self.feed.enabled {
            require_non_empty(&self.feed.path, "feed.path")?;
            if self.feed.max_items == 0 {
                return Err(ConfigError::Validation(
                    "feed.max_items must be greater than 0".to_owned(),
                ));
            }
        }
        if self.sitemap.enabled {
            require_non_empty(&self.sitemap.path, "sitemap.path")?;
        }
        if self.feed.enabled && self.sitemap.enabled && self.feed.path == self.sitemap.path {
            return Err(ConfigError::Validation(
                "feed.path and sitemap.path must differ".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validate pages.
    fn validate_pages(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, page) in self.pages.iter().enumerate() {
            require_non_empty(&page.title, &format!("pages[{index}].title"))?;
            if !seen.insert(page.path.trim_matches('/')) {
                return Err(ConfigError::Validation(format!(
                    "pages[{index}].path {:?} is listed more than once",
                    page.path
                )));
            }
            if let Some(priority) = page.priority
                && !(0.0..=1.0).contains(&priority)
            {
                return Err(ConfigError::Validation(format!(
                    "pages[{index}].priority must be between 0.0 and 1.0"
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.url = expand::expand_env(&self.site.url, "site.url")?;

        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_resolved = OutputConfig {
            dir: config_dir.join(self.output.dir.as_deref().unwrap_or("public")),
        };
    }

    /// Render indentation, if pretty-printing is enabled.
    #[must_use]
    pub fn indent(&self) -> Option<usize> {
        self.render.indent
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MINIMAL: &str = r#"
[site]
url = "https://example.com"
name = "Example"
"#;

    fn minimal_config() -> Config {
        let mut config: Config = toml::from_str(MINIMAL).unwrap();
        config.resolve_paths(Path::new("/project"));
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.output_resolved.dir, PathBuf::from("/test/public"));
        assert_eq!(config.site.time_zone, "UTC");
        assert!(config.feed.enabled);
        assert_eq!(config.feed.path, "feed.rss");
        assert_eq!(config.feed.max_items, 20);
        assert!(config.sitemap.enabled);
        assert_eq!(config.sitemap.path, "sitemap.xml");
        assert!(config.pages.is_empty());
        assert_eq!(config.indent(), None);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = minimal_config();
        assert_eq!(config.site.url, "https://example.com");
        assert_eq!(config.site.name, "Example");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[site]
url = "https://example.com/blog/"
name = "Blog"
description = "Posts"
language = "en-us"
time_zone = "+02:00"

[render]
indent = 2

[output]
dir = "dist"

[feed]
path = "rss.xml"
max_items = 5
ttl = 60

[sitemap]
enabled = false

[[pages]]
path = "posts/one"
title = "One"
description = "First"
published = "2024-01-02T10:00:00Z"
modified = "2024-02-01T08:30:00+01:00"
change_frequency = "monthly"
priority = 0.7
content = "<p>Hello</p>"

[[pages]]
path = "about"
title = "About"
published = "2023-06-01T00:00:00Z"
in_feed = false
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.site.language.as_deref(), Some("en-us"));
        assert_eq!(config.site.utc_offset().unwrap().local_minus_utc(), 7200);
        assert_eq!(config.indent(), Some(2));
        assert_eq!(config.output_resolved.dir, PathBuf::from("/project/dist"));
        assert_eq!(config.feed.path, "rss.xml");
        assert_eq!(config.feed.max_items, 5);
        assert_eq!(config.feed.ttl, Some(60));
        assert!(!config.sitemap.enabled);

        let one = &config.pages[0];
        assert_eq!(one.change_frequency, Some(ChangeFrequency::Monthly));
        assert_eq!(one.priority, Some(0.7));
        assert!(one.in_feed);
        assert_eq!(
            one.last_modified().to_rfc3339(),
            "2024-02-01T08:30:00+01:00"
        );

        let about = &config.pages[1];
        assert!(!about.in_feed);
        assert_eq!(about.last_modified(), about.published);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_absolute_url_joins_with_single_slash() {
        let mut site = SiteConfig {
            url: "https://example.com".to_owned(),
            ..SiteConfig::default()
        };
        assert_eq!(site.absolute_url("posts/a"), "https://example.com/posts/a");
        assert_eq!(site.absolute_url("/posts/a"), "https://example.com/posts/a");
        assert_eq!(site.absolute_url(""), "https://example.com/");
        site.url = "https://example.com/blog/".to_owned();
        assert_eq!(site.absolute_url("/a"), "https://example.com/blog/a");
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = minimal_config();
        let overrides = CliSettings {
            output_dir: Some(PathBuf::from("/out")),
            indent: Some(4),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.output_resolved.dir, PathBuf::from("/out"));
        assert_eq!(config.indent(), Some(4));
        assert_eq!(config.site.url, "https://example.com"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = minimal_config();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.output_resolved.dir, PathBuf::from("/project/public"));
        assert_eq!(config.indent(), None);
    }

    #[test]
    fn test_expand_env_vars_site_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("WEAVE_TEST_CONFIG_URL", "https://env.example.com");
        }

        let toml = r#"
[site]
url = "${WEAVE_TEST_CONFIG_URL}"
name = "Env"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        assert_eq!(config.site.url, "https://env.example.com");

        unsafe {
            std::env::remove_var("WEAVE_TEST_CONFIG_URL");
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, MINIMAL).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.output_resolved.dir, dir.path().join("public"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/weave.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, MINIMAL).unwrap();

        let overrides = CliSettings {
            site_url: Some("ftp://example.com".to_owned()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(err.to_string().contains("site.url"));
    }

    #[test]
    fn test_load_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site\nurl = 1").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    fn page(path: &str) -> PageConfig {
        PageConfig {
            path: path.to_owned(),
            title: "Title".to_owned(),
            description: String::new(),
            published: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap(),
            modified: None,
            change_frequency: None,
            priority: None,
            in_feed: true,
            content: None,
        }
    }

    #[test]
    fn test_validate_default_config_requires_site_url() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_validation_error(&config, &["site.url", "empty"]);
    }

    #[test]
    fn test_validate_site_url_scheme() {
        let mut config = minimal_config();
        config.site.url = "example.com".to_owned();
        assert_validation_error(&config, &["site.url", "http"]);
    }

    #[test]
    fn test_validate_site_name_empty() {
        let mut config = minimal_config();
        config.site.name = String::new();
        assert_validation_error(&config, &["site.name"]);
    }

    #[test]
    fn test_validate_time_zone() {
        let mut config = minimal_config();
        config.site.time_zone = "Europe/Berlin".to_owned();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::TimeZone(_)));
        assert!(err.to_string().contains("site.time_zone"));
    }

    #[test]
    fn test_validate_indent_too_large() {
        let mut config = minimal_config();
        config.render.indent = Some(MAX_INDENT + 1);
        assert_validation_error(&config, &["render.indent"]);
    }

    #[test]
    fn test_validate_feed_max_items_zero() {
        let mut config = minimal_config();
        config.feed.max_items = 0;
        assert_validation_error(&config, &["feed.max_items"]);
    }

    #[test]
    fn test_validate_feed_max_items_ignored_when_disabled() {
        let mut config = minimal_config();
        config.feed.enabled = false;
        config.feed.max_items = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_output_paths_differ() {
        let mut config = minimal_config();
        config.sitemap.path = "feed.rss".to_owned();
        assert_validation_error(&config, &["feed.path", "sitemap.path"]);
    }

    #[test]
    fn test_validate_duplicate_page_path() {
        let mut config = minimal_config();
        config.pages = vec![page("posts/a"), page("/posts/a/")];
        assert_validation_error(&config, &["pages[1].path", "more than once"]);
    }

    #[test]
    fn test_validate_priority_range() {
        let mut config = minimal_config();
        let mut bad = page("a");
        bad.priority = Some(1.5);
        config.pages = vec![bad];
        assert_validation_error(&config, &["pages[0].priority"]);
    }

    #[test]
    fn test_validate_page_title_empty() {
        let mut config = minimal_config();
        let mut bad = page("a");
        bad.title = String::new();
        config.pages = vec![bad];
        assert_validation_error(&config, &["pages[0].title"]);
    }
}
