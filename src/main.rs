//! # invoice-portal
//!
//! Host server for the invoice portal frontend: loads configuration, installs
//! tracing and serves the Leptos SSR app.

mod config;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // Missing .env is normal outside local dev.
    _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "invoice-portal failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| StartupError::Leptos(e.to_string()))?
        .leptos_options;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;

    tracing::info!(addr = %config.socket_addr(), "invoice-portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
