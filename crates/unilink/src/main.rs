use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use unilink::config::AppConfig;
use unilink::db::{DocumentStore, MemoryDocumentStore, SqliteDocumentStore};
use unilink::server::create_router;
use unilink::types::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .init();

    let store: Arc<dyn DocumentStore> = if config.uses_in_memory_store() {
        warn!("Using the in-memory store; nothing will be persisted");
        Arc::new(MemoryDocumentStore::new())
    } else {
        Arc::new(
            SqliteDocumentStore::open(&config.database_path)
                .with_context(|| format!("Failed to open database {}", config.database_path))?,
        )
    };

    let app_state = Arc::new(AppState::new(store, &config));
    let router = create_router(app_state);

    let listener = TcpListener::bind(config.address)
        .await
        .with_context(|| format!("Failed to bind {}", config.address))?;
    info!(
        address = %config.address,
        default_locale = %config.default_locale,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
