#![recursion_limit = "256"]

mod config;
mod routes;

use thiserror::Error;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let app = routes::app().map_err(HostError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %config.addr(), "intern-india listening");
    axum::serve(listener, app).await?;
    Ok(())
}
