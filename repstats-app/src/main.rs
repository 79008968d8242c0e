mod cli;
mod dto;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use cli::commands::run_cli;
use cli::opts::Cli;

fn main() -> Result<()> {
    init_tracing();
    let args = Cli::parse();
    let rt = Runtime::new()?;
    rt.block_on(run_cli(args))
}

/// Logs go to stderr so stdout stays pure JSON. Filter with `REPSTATS_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("REPSTATS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
