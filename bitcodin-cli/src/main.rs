//! Bitcodin CLI
//!
//! Command-line interface for inspecting jobs and cleaning up resources left
//! behind by interrupted test runs.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bitcodin")]
#[command(about = "bitcodin encoding API CLI", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(
        long,
        env = "BITCODIN_API_URL",
        default_value = bitcodin_client::DEFAULT_BASE_URL
    )]
    api_url: String,

    /// API key
    #[arg(long, env = "BITCODIN_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Log every request
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "bitcodin_client=debug"
    } else {
        "bitcodin_client=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config {
        api_url: cli.api_url,
        api_key: cli.api_key,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
