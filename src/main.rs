//! sdlgen
//!
//! GraphQL SDL and resolver stubs from entity schemas.
//!
//! This is the main entry point of the command-line tool.

use sdlgen_cli::{Cli, Parser};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = sdlgen_cli::VERSION, "starting {}", sdlgen_cli::NAME);

    sdlgen_cli::run(cli)
}
