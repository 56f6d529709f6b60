mod backend;
mod chat;
mod cli;
mod config;
mod errors;
mod filters;
mod jobs;
mod models;
mod recommend;
mod session;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::BackendClient;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job search CLI v{}", env!("CARGO_PKG_VERSION"));

    let backend = BackendClient::new(&config.api_url, &config.search_endpoint);
    info!(
        "Backend client initialized (base: {}, search endpoint: {}, limit: {})",
        config.api_url, config.search_endpoint, config.search_limit
    );

    cli::run(&config, &backend).await
}
