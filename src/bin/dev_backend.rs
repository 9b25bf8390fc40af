//! In-memory products/users backend for running the admin UI locally.

use std::net::SocketAddr;

use anyhow::Result;
use catalog_admin::backend::{self, Backend};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_admin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = catalog_admin::config::load_config()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.backend_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let shutdown = CancellationToken::new();
    let on_signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutting down");
        }
        on_signal.cancel();
    });

    let backend = Backend::new();
    if config.seed_sample_data {
        backend.seed_sample_data().await;
    }

    backend::serve(listener, backend, shutdown).await?;
    Ok(())
}
