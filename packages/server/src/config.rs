//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables, then command-line flags (applied by the binary).

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::TimeDelta;
use quake_map_tectonics::{DEFAULT_CACHE_TTL_HOURS, DEFAULT_FETCH_TIMEOUT, DEFAULT_TECTONICS_URL};
use serde::Deserialize;

use crate::ServerError;
use crate::sessions::DEFAULT_SESSION_IDLE_MINUTES;

/// Default location of the merged earthquake CSV.
pub const DEFAULT_DATA_PATH: &str = "data/earthquakes_merged_f.csv";

/// Runtime settings for the dashboard server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind_addr: String,
    /// Port to bind.
    pub port: u16,
    /// Earthquake CSV to load at startup.
    pub data_path: PathBuf,
    /// Plate boundary `GeoJSON` URL.
    pub tectonics_url: String,
    /// Boundary download timeout in seconds.
    pub fetch_timeout_secs: u64,
    /// Boundary cache freshness in hours.
    pub cache_ttl_hours: i64,
    /// Minutes without requests after which a session is dropped.
    pub session_idle_minutes: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            tectonics_url: DEFAULT_TECTONICS_URL.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT.as_secs(),
            cache_ttl_hours: DEFAULT_CACHE_TTL_HOURS,
            session_idle_minutes: DEFAULT_SESSION_IDLE_MINUTES,
        }
    }
}

impl ServerConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if the document is not valid.
    pub fn from_toml(contents: &str) -> Result<Self, ServerError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads defaults plus the optional TOML file at `path`, then applies
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ServerError> {
        let config = match path {
            Some(path) => {
                log::info!("Reading config from {}", path.display());
                let contents =
                    std::fs::read_to_string(path).map_err(|source| ServerError::ConfigRead {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Self::from_toml(&contents)?
            }
            None => Self::default(),
        };
        Ok(config.with_env(|name| std::env::var(name).ok()))
    }

    /// Applies `BIND_ADDR`, `PORT`, `QUAKE_MAP_DATA` and
    /// `QUAKE_MAP_TECTONICS_URL` as looked up through `var`.
    #[must_use]
    pub fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(bind_addr) = var("BIND_ADDR") {
            self.bind_addr = bind_addr;
        }
        if let Some(port) = var("PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(e) => log::warn!("Ignoring invalid PORT '{port}': {e}"),
            }
        }
        if let Some(data) = var("QUAKE_MAP_DATA") {
            self.data_path = PathBuf::from(data);
        }
        if let Some(url) = var("QUAKE_MAP_TECTONICS_URL") {
            self.tectonics_url = url;
        }
        self
    }

    /// Boundary download timeout.
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Boundary cache freshness window.
    #[must_use]
    pub fn cache_ttl(&self) -> TimeDelta {
        TimeDelta::try_hours(self.cache_ttl_hours).unwrap_or(TimeDelta::MAX)
    }

    /// Idle time after which a session is dropped.
    #[must_use]
    pub fn session_idle(&self) -> TimeDelta {
        TimeDelta::try_minutes(self.session_idle_minutes).unwrap_or(TimeDelta::MAX)
    }
}
