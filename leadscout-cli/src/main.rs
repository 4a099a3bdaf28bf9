//! Leadscout CLI
//!
//! Command-line interface for the lead-discovery backend: launch discovery
//! jobs, check their status, and watch them live until they finish.

mod commands;
mod config;
mod observer;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "leadscout")]
#[command(about = "Leadscout discovery job CLI", long_about = None)]
struct Cli {
    /// Discovery backend URL
    #[arg(
        long,
        env = "LEADSCOUT_API_URL",
        default_value = "http://localhost:8080"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadscout=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
    };

    handle_command(cli.command, &config).await
}
