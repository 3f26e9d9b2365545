//! CLI entry point for raydeck.

mod cli;
mod commands;

use clap::Parser;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    commands::handle(cli)
}

/// Log to stderr; level via RUST_LOG (default warn) so palette output stays clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
