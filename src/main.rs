//! CLI entry point for the tiled sketch renderer

use clap::Parser;
use tilesketch::io::cli::{Cli, FileProcessor};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> tilesketch::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
