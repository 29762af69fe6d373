//! Where the facility document is read from, and how it is loaded.

use std::{fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use bytes::Bytes;
use tracing::{info, warn};

use crate::catalog_utils::catalog_parser::{CatalogFormat, parse_catalog};
use crate::catalog_utils::facility_catalog::{FacilityCatalog, LoadedCatalog};
use crate::error::CatalogError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl FromStr for CatalogSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(CatalogSource::Url(s.to_string()))
        } else if let Some(stripped) = s.strip_prefix("file://") {
            Ok(CatalogSource::File(PathBuf::from(stripped)))
        } else {
            Ok(CatalogSource::File(PathBuf::from(s)))
        }
    }
}

impl Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

fn get_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()
}

impl CatalogSource {
    pub fn format(&self) -> CatalogFormat {
        CatalogFormat::from_source_name(&self.to_string())
    }

    /// Reads the raw document once.
    pub async fn fetch(&self) -> Result<Bytes, CatalogError> {
        match self {
            CatalogSource::File(path) => {
                let data = tokio::fs::read(path).await.map_err(|source| CatalogError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                Ok(Bytes::from(data))
            }
            CatalogSource::Url(url) => {
                let fetch_error = |source: reqwest::Error| CatalogError::Fetch { url: url.clone(), source };
                let client = get_http_client().map_err(fetch_error)?;
                let response = client.get(url).send().await.map_err(fetch_error)?;
                let response = response.error_for_status().map_err(fetch_error)?;
                response.bytes().await.map_err(fetch_error)
            }
        }
    }

    /// Reads the raw document, retrying transient failures with exponential backoff.
    pub async fn fetch_with_retry(&self, attempts: u32) -> Result<Bytes, CatalogError> {
        let attempts = attempts.max(1);
        let mut backoff = INITIAL_BACKOFF;
        let mut attempt = 1;
        loop {
            match self.fetch().await {
                Ok(data) => return Ok(data),
                Err(e) if e.is_transient() && attempt < attempts => {
                    warn!(source = %self, attempt, attempts, error = %e, "catalog fetch failed, retrying in {:?}", backoff);
                    tokio::time::sleep(backoff).await;
                    backoff = (backoff * 2).min(MAX_BACKOFF);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Builds a catalog from raw document bytes.
pub fn catalog_from_bytes(raw: &[u8], format: CatalogFormat, source: String) -> Result<LoadedCatalog, CatalogError> {
    let facilities = parse_catalog(raw, format)?;
    Ok(LoadedCatalog {
        catalog: FacilityCatalog::new(facilities),
        source,
        fingerprint: sha256::digest(raw),
    })
}

/// Fetches and parses the catalog.
pub async fn load_catalog(source: &CatalogSource, attempts: u32) -> Result<LoadedCatalog, CatalogError> {
    let raw = source.fetch_with_retry(attempts).await?;
    let loaded = catalog_from_bytes(&raw, source.format(), source.to_string())?;
    info!(
        source = %source,
        facility_count = loaded.catalog.len(),
        fingerprint = %loaded.fingerprint,
        "Loaded facility catalog"
    );
    Ok(loaded)
}
