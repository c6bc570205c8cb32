//! Letterdrop CLI
//!
//! Generates consumer-rights letters and orders physical mailings paid in
//! stablecoin.

mod commands;
mod config;
mod render;
mod shutdown;

use clap::{Parser, Subcommand};
use commands::{GenerateArgs, MailArgs, OrderArgs, Runtime};
use config::ConfigLoader;
use letterdrop_core::api::RemoteApi;
use letterdrop_sdk::client::ApiClient;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Letterdrop - consumer-rights letters, generated and mailed
#[derive(Parser, Debug)]
#[command(name = "letterdrop")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "./letterdrop.toml")]
    config: PathBuf,

    /// Override the API base URL (e.g., http://localhost:8004)
    #[arg(long, global = true, env = "LETTERDROP_API_BASE")]
    api_base: Option<Url>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a letter and print it
    Generate(GenerateArgs),
    /// Order a physical mailing of a letter stored in a file
    Order(OrderArgs),
    /// Generate a letter, then order a mailing of it
    Mail(MailArgs),
    /// Show mailing prices
    Pricing,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = ConfigLoader::new(&args.config, args.api_base.clone())
        .load()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?;
    tracing::debug!(
        api_base = %config.api_base,
        timeout_secs = config.timeout.as_secs(),
        "Configuration loaded"
    );

    let api = RemoteApi::new(ApiClient::new(config.api_base.clone(), config.timeout));
    let rt = Runtime { config, api };

    match args.command {
        Command::Generate(cmd) => commands::generate(&rt, cmd).await,
        Command::Order(cmd) => commands::order(&rt, cmd).await,
        Command::Mail(cmd) => commands::mail(&rt, cmd).await,
        Command::Pricing => {
            commands::pricing();
            Ok(())
        }
    }
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so stdout carries only the letter and order output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
