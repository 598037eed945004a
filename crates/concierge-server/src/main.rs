//! concierged - HTTP API server for the Concierge health-journey assistant
//!
//! Hosts the message-generation and decision-explanation endpoints over a
//! generation strategy selected at startup (remote LLM API or local keyword
//! table).

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod handlers;
mod models;
mod server;
mod settings;

use settings::{Cli, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controls verbosity; default to info
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli)?;

    server::run(settings).await
}
