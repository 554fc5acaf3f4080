//! Kurso service entry point.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use clap::Parser;
use kurso_api::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kurso=debug".into()),
        )
        .init();

    kurso_api::run(Cli::parse()).await
}
