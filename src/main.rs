use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use capital_gains::cli::{runner, Cli};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    runner::run(cli)
}
