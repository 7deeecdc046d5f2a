#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Tectonic plate boundary fetching for the map overlay.
//!
//! Downloads the PB2002 plate-boundary `GeoJSON`, keeps its `LineString`
//! features, and memoizes the parsed result per URL for 24 hours. Any
//! failure is returned to the caller, which shows a warning and renders
//! the map without the overlay; failures are never cached.

pub mod fetch;
pub mod parse;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::TimeDelta;
use geo::LineString;
use quake_map_cache::TtlCache;
use thiserror::Error;

/// Public PB2002 plate boundary dataset.
pub const DEFAULT_TECTONICS_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Request timeout for the boundary download.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Freshness window for a downloaded boundary set, in hours.
pub const DEFAULT_CACHE_TTL_HOURS: i64 = 24;

/// Errors that can occur while obtaining boundary data.
#[derive(Debug, Error)]
pub enum TectonicsError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Body is not valid `GeoJSON`.
    #[error("GeoJSON parse error: {0}")]
    Parse(#[from] geojson::Error),

    /// Body is valid `GeoJSON` but not the expected shape.
    #[error("Unexpected boundary document: {message}")]
    Format {
        /// Description of what went wrong.
        message: String,
    },
}

/// A single plate boundary segment.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLine {
    /// Plate-pair name, when the feature carries one.
    pub name: Option<String>,
    /// Ordered `(longitude, latitude)` points.
    pub line: LineString<f64>,
}

/// All boundary segments of one downloaded document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundarySet {
    /// Segments in document order.
    pub lines: Vec<BoundaryLine>,
}

/// Source of boundary data for the map overlay.
#[async_trait]
pub trait BoundaryProvider: Send + Sync {
    /// Returns the boundary set published at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`TectonicsError`] if the data cannot be obtained.
    async fn boundaries(&self, url: &str) -> Result<Arc<BoundarySet>, TectonicsError>;
}

/// HTTP-backed [`BoundaryProvider`] with a per-URL expiring cache.
pub struct BoundaryFetcher {
    client: reqwest::Client,
    cache: TtlCache<String, Arc<BoundarySet>>,
}

impl BoundaryFetcher {
    /// Builds a fetcher whose requests time out after `timeout` and whose
    /// results stay fresh for `ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`TectonicsError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration, ttl: TimeDelta) -> Result<Self, TectonicsError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, ttl))
    }

    /// Builds a fetcher around an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, ttl: TimeDelta) -> Self {
        Self {
            client,
            cache: TtlCache::with_ttl(ttl),
        }
    }
}

#[async_trait]
impl BoundaryProvider for BoundaryFetcher {
    async fn boundaries(&self, url: &str) -> Result<Arc<BoundarySet>, TectonicsError> {
        let key = url.to_string();
        if let Some(set) = self.cache.get(&key) {
            log::debug!("Boundary cache hit for {url}");
            return Ok(set);
        }

        // No lock is held across the download; a concurrent miss fetches
        // the same document and the later insert wins.
        let set = Arc::new(fetch::fetch_boundaries(&self.client, url).await?);
        self.cache.insert(key, Arc::clone(&set));
        Ok(set)
    }
}
