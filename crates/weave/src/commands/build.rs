//! `weave build` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{CommonArgs, write_file};
use crate::error::CliError;
use crate::generate;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,

    /// Output directory for generated files (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(self.output_dir)?;
        let dir = &config.output_resolved.dir;

        if !config.feed.enabled && !config.sitemap.enabled {
            output.warning("Feed and sitemap are both disabled, nothing to build");
            return Ok(());
        }

        output.path("Output", dir);
        let renderer = generate::renderer(&config);
        let mut written = 0;

        if config.feed.enabled {
            let path = dir.join(&config.feed.path);
            write_file(&path, &generate::feed_document(&config)?.render_with(&renderer))?;
            output.path("Feed", &path);
            written += 1;
        }

        if config.sitemap.enabled {
            let path = dir.join(&config.sitemap.path);
            write_file(
                &path,
                &generate::sitemap_document(&config)?.render_with(&renderer),
            )?;
            output.path("Sitemap", &path);
            written += 1;
        }

        output.done(&format!("Built {written} file(s)"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::tests::{common, project};

    use super::*;

    #[test]
    fn test_build_writes_feed_and_sitemap() {
        let (dir, path) = project();
        let args = BuildArgs {
            common: common(path),
            output_dir: None,
        };

        args.execute().unwrap();

        let feed = std::fs::read_to_string(dir.path().join("public/feed.rss")).unwrap();
        assert!(feed.contains("<link>https://example.com/posts/a</link>"));
        let sitemap = std::fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.com/posts/a</loc>"));
        assert!(sitemap.contains("<lastmod>2024-01-02</lastmod>"));
    }

    #[test]
    fn test_build_output_dir_override() {
        let (_dir, path) = project();
        let out = tempfile::tempdir().unwrap();
        let args = BuildArgs {
            common: common(path),
            output_dir: Some(out.path().join("site")),
        };

        args.execute().unwrap();

        assert!(out.path().join("site/feed.rss").exists());
        assert!(out.path().join("site/sitemap.xml").exists());
    }
}
