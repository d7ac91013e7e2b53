//! `weave feed` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{CommonArgs, emit};
use crate::error::CliError;
use crate::generate;
use crate::output::Output;

/// Arguments for the feed command.
#[derive(Args)]
pub(crate) struct FeedArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,

    /// Write the feed to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl FeedArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;

        if !config.feed.enabled {
            return Err(CliError::Validation(
                "Feed generation is disabled (feed.enabled = false)".to_owned(),
            ));
        }

        let document = generate::feed_document(&config)?.render_with(&generate::renderer(&config));
        emit(&document, self.output.as_deref(), &output)
    }
}
