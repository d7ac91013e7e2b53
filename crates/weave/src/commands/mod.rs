//! CLI command implementations.

mod build;
mod feed;
mod sitemap;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use weave_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use build::BuildArgs;
pub(crate) use feed::FeedArgs;
pub(crate) use sitemap::SitemapArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover weave.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Spaces per nesting level (overrides config; compact when unset).
    #[arg(long)]
    indent: Option<usize>,

    /// Site base URL (overrides config).
    #[arg(long, env = "WEAVE_SITE_URL")]
    site_url: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CommonArgs {
    /// Load the configuration with the command line overrides applied.
    fn load_config(&self, output_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            output_dir,
            indent: self.indent,
            site_url: self.site_url.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Write `document` to `path`, creating missing parent directories.
fn write_file(path: &Path, document: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, document)?;
    tracing::info!(path = %path.display(), bytes = document.len(), "Wrote document");
    Ok(())
}

/// Write `document` to `path` when given, otherwise to stdout.
fn emit(document: &str, path: Option<&Path>, output: &Output) -> Result<(), CliError> {
    match path {
        Some(path) => {
            write_file(path, document)?;
            output.path("Wrote", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    pub(super) const CONFIG: &str = r#"
[site]
url = "https://example.com"
name = "Example"

[[pages]]
path = "posts/a"
title = "A"
published = "2024-01-02T10:00:00Z"
"#;

    /// Write [`CONFIG`] into a fresh directory.
    pub(super) fn project() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weave.toml");
        std::fs::write(&path, CONFIG).unwrap();
        (dir, path)
    }

    pub(super) fn common(config: PathBuf) -> CommonArgs {
        CommonArgs {
            config: Some(config),
            indent: None,
            site_url: None,
            verbose: false,
        }
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/feed.rss");

        write_file(&path, "<rss/>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<rss/>");
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");

        emit("<urlset/>", Some(&path), &Output::new()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<urlset/>");
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let (_dir, path) = project();
        let mut args = common(path);
        args.indent = Some(4);
        args.site_url = Some("https://override.example.com".to_owned());

        let config = args.load_config(Some(PathBuf::from("/out"))).unwrap();

        assert_eq!(config.indent(), Some(4));
        assert_eq!(config.site.url, "https://override.example.com");
        assert_eq!(config.output_resolved.dir, PathBuf::from("/out"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let args = common(PathBuf::from("/nonexistent/weave.toml"));
        let err = args.load_config(None).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
