//! Weave CLI - feed and sitemap generator.
//!
//! Provides commands for:
//! - `build`: Write the RSS feed and the sitemap into the output directory
//! - `feed`: Render the RSS feed to stdout or a file
//! - `sitemap`: Render the sitemap to stdout or a file

mod commands;
mod error;
mod generate;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, FeedArgs, SitemapArgs};
use output::Output;

/// Weave - typed markup generation.
#[derive(Parser)]
#[command(name = "weave", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the feed and the sitemap into the output directory.
    Build(BuildArgs),
    /// Render the RSS feed.
    Feed(FeedArgs),
    /// Render the sitemap.
    Sitemap(SitemapArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Build(args) => args.common.verbose,
            Self::Feed(args) => args.common.verbose,
            Self::Sitemap(args) => args.common.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Feed(args) => args.execute(),
        Commands::Sitemap(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
