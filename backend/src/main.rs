//! Facility explorer server entry point.

use std::sync::Arc;

use anyhow::Context;
use backend::{
    catalog_utils::catalog_store::{CatalogStore, run_catalog_loader},
    config::ServerConfig,
    server_routes::{AppState, build_router},
    telemetry::init_logging,
};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {:#?}", e);
    }
    info!("Shutting down");
    shutdown.cancel();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = ServerConfig::parse();

    info!(
        catalog = %config.catalog,
        listen = %config.listen,
        refresh_interval = ?config.refresh_interval(),
        stale_selection = %config.stale_selection,
        "Starting facility explorer"
    );

    let store = Arc::new(CatalogStore::new());
    let shutdown = CancellationToken::new();

    let loader = tokio::spawn(run_catalog_loader(
        store.clone(),
        config.catalog.clone(),
        config.load_attempts,
        config.load_retry_delay(),
        config.refresh_interval(),
        shutdown.clone(),
    ));

    let state = Arc::new(AppState::new(store, config.stale_selection));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    info!(address = %config.listen, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()))
        .await
        .context("server error")?;

    shutdown.cancel();
    loader.await.context("catalog loader task failed")?;
    Ok(())
}
