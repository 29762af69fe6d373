//! Shared handle to the current catalog snapshot.

use std::{sync::{Arc, RwLock}, time::Duration};

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::catalog_utils::catalog_source::{CatalogSource, load_catalog};
use crate::catalog_utils::facility_catalog::LoadedCatalog;
use crate::error::ApiError;

/// Holds the most recently loaded catalog. Readers clone the `Arc` and keep
/// a consistent snapshot even if a refresh swaps in a new one meanwhile.
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Option<Arc<LoadedCatalog>>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: LoadedCatalog) -> Self {
        Self { current: RwLock::new(Some(Arc::new(catalog))) }
    }

    pub fn snapshot(&self) -> Option<Arc<LoadedCatalog>> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Like [`CatalogStore::snapshot`], for handlers that cannot answer without a catalog.
    pub fn ready_snapshot(&self) -> Result<Arc<LoadedCatalog>, ApiError> {
        self.snapshot().ok_or(ApiError::CatalogNotReady)
    }

    pub fn is_ready(&self) -> bool {
        self.snapshot().is_some()
    }

    pub fn replace(&self, catalog: LoadedCatalog) {
        let catalog = Arc::new(catalog);
        match self.current.write() {
            Ok(mut guard) => *guard = Some(catalog),
            Err(poisoned) => *poisoned.into_inner() = Some(catalog),
        }
    }

    /// Swaps in `catalog` unless its content matches the current one.
    /// Returns whether the swap happened.
    pub fn replace_if_changed(&self, catalog: LoadedCatalog) -> bool {
        if let Some(current) = self.snapshot() {
            if current.fingerprint == catalog.fingerprint {
                return false;
            }
        }
        self.replace(catalog);
        true
    }
}

/// Loads the catalog in the background and then keeps it fresh.
///
/// `refresh_interval` of `None` stops after the initial load succeeds. The
/// initial load is retried every `retry_delay` until it succeeds or `shutdown`
/// fires; later failures leave the previous snapshot in place.
pub async fn run_catalog_loader(
    store: Arc<CatalogStore>,
    source: CatalogSource,
    attempts: u32,
    retry_delay: Duration,
    refresh_interval: Option<Duration>,
    shutdown: CancellationToken,
) {
    while !store.is_ready() {
        match load_catalog(&source, attempts).await {
            Ok(catalog) => store.replace(catalog),
            Err(e) => {
                error!(source = %source, error = %e, "Failed to load facility catalog, not serving facility requests");
                tokio::select! {
                    _ = shutdown.cancelled() => return,
                    _ = tokio::time::sleep(retry_delay) => {}
                }
            }
        }
    }

    let Some(refresh_interval) = refresh_interval else {
        return;
    };
    info!(source = %source, interval = ?refresh_interval, "Catalog refresh enabled");

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("Catalog refresh stopped");
                return;
            }
            _ = tokio::time::sleep(refresh_interval) => {}
        }
        match load_catalog(&source, attempts).await {
            Ok(catalog) => {
                let fingerprint = catalog.fingerprint.clone();
                if store.replace_if_changed(catalog) {
                    info!(source = %source, fingerprint = %fingerprint, "Facility catalog replaced");
                } else {
                    tracing::debug!(source = %source, "Facility catalog unchanged");
                }
            }
            Err(e) => {
                warn!(source = %source, error = %e, "Catalog refresh failed, keeping previous snapshot");
            }
        }
    }
}
