//! Quote engine HTTP server.
//!
//! Reads configuration from the directory named by `QUOTE_ENGINE_CONFIG`
//! (default `./config/leo`) and serves the quote API. Log verbosity follows
//! `RUST_LOG`, defaulting to `info`.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use quote_engine::api::{AppState, create_router};
use quote_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/leo";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config_dir =
        env::var("QUOTE_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let address = config.server().bind_address();
    info!(
        config_dir = %config_dir,
        company = %config.company().name,
        "Configuration loaded"
    );

    let router = create_router(AppState::with_in_memory_store(config));
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Quote engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
