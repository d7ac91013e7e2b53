//! `weave sitemap` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{CommonArgs, emit};
use crate::error::CliError;
use crate::generate;
use crate::output::Output;

/// Arguments for the sitemap command.
#[derive(Args)]
pub(crate) struct SitemapArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,

    /// Write the sitemap to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SitemapArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;

        if !config.sitemap.enabled {
            return Err(CliError::Validation(
                "Sitemap generation is disabled (sitemap.enabled = false)".to_owned(),
            ));
        }

        let document =
            generate::sitemap_document(&config)?.render_with(&generate::renderer(&config));
        emit(&document, self.output.as_deref(), &output)
    }
}
