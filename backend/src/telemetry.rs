//! Logging setup.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &[&str] = &["backend=info", "facility_explorer=info", "tower_http=info"];

/// Builds the log filter from `RUST_LOG`, falling back to info-level service logs.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES.join(",")))
}

pub fn init_logging() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).with_target(true).init();
}
