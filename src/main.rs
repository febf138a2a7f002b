//! dealfinder HTTP service
//!
//! Proxies the SerpApi Google Shopping engine and re-ranks results by a
//! derived value score (rating / price). Also serves the static validation
//! and documentation endpoints expected by the hosting platform.

mod config;
mod error;
mod http;
mod search;
mod serpapi;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; deployments usually set the environment directly
    dotenv().ok();

    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if config.serpapi_key.is_none() {
        warn!("SERPAPI_KEY is not set; /search requests will be rejected");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("dealfinder listening on http://{}", addr);

    let app = server::router(AppState::new(config));
    axum::serve(listener, app).await?;

    Ok(())
}
