//! Command line and environment configuration.

use std::{net::SocketAddr, time::Duration};

use clap::Parser;
use common::explorer_state::StaleSelectionPolicy;

use crate::catalog_utils::catalog_source::CatalogSource;

/// Wind energy R&D facility explorer service
#[derive(Parser, Debug, Clone)]
#[command(name = "facility-explorer")]
#[command(about = "HTTP service for filtering and browsing the facility catalog")]
pub struct ServerConfig {
    /// Catalog document: a file path (YAML or JSON) or an http(s) URL
    #[arg(long, default_value = "data/facilities.yaml", env = "FACILITIES_CATALOG")]
    pub catalog: CatalogSource,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0:8050", env = "FACILITIES_LISTEN")]
    pub listen: SocketAddr,

    /// Reload the catalog every N seconds, 0 disables refreshing
    #[arg(long, default_value = "0", env = "FACILITIES_REFRESH_INTERVAL_SECS")]
    pub refresh_interval_secs: u64,

    /// Fetch attempts per load before giving up
    #[arg(long, default_value = "3", env = "FACILITIES_LOAD_ATTEMPTS")]
    pub load_attempts: u32,

    /// Delay between failed initial loads, in seconds
    #[arg(long, default_value = "10", env = "FACILITIES_LOAD_RETRY_SECS")]
    pub load_retry_secs: u64,

    /// What to do with a selection hidden by new filters: clear or keep
    #[arg(long, default_value = "clear", env = "FACILITIES_STALE_SELECTION")]
    pub stale_selection: StaleSelectionPolicy,
}

impl ServerConfig {
    pub fn refresh_interval(&self) -> Option<Duration> {
        match self.refresh_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn load_retry_delay(&self) -> Duration {
        Duration::from_secs(self.load_retry_secs.max(1))
    }
}
