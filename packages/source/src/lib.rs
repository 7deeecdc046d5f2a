#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Earthquake dataset loading.
//!
//! Reads the merged earthquake CSV into an [`EarthquakeTable`] and memoizes
//! the result per path for the process lifetime through [`datasets`].
//! A missing or malformed file is reported as
//! [`SourceError::DataUnavailable`], which callers treat as fatal.

pub mod parsing;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quake_map_cache::TtlCache;
use quake_map_quake_models::{EarthquakeRecord, EarthquakeTable};
use serde::Deserialize;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &["year", "magnitude", "latitude", "longitude", "region"];

/// Errors that can occur while loading the dataset.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be read or parsed.
    #[error("Earthquake data unavailable at {}: {fault}", path.display())]
    DataUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        fault: DataFault,
    },
}

/// Why a dataset could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum DataFault {
    /// I/O error opening or reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV structure itself is broken.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a required column.
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// Name of the absent column.
        column: &'static str,
    },

    /// A data row violates the schema.
    #[error("Malformed row at line {line}: {message}")]
    Row {
        /// 1-based line number, counting the header as line 1.
        line: u64,
        /// Description of what went wrong.
        message: String,
    },
}

/// A CSV row before type conversion.
#[derive(Debug, Deserialize)]
struct RawRow {
    year: String,
    magnitude: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    depth: Option<String>,
    stations_used: Option<String>,
    region: Option<String>,
}

impl RawRow {
    fn into_record(self, line: u64) -> Result<EarthquakeRecord, DataFault> {
        let year = parsing::parse_year(&self.year).ok_or_else(|| DataFault::Row {
            line,
            message: format!("invalid year '{}'", self.year),
        })?;

        Ok(EarthquakeRecord {
            year,
            magnitude: parsing::parse_f64(self.magnitude.as_deref()),
            latitude: parsing::parse_f64(self.latitude.as_deref()),
            longitude: parsing::parse_f64(self.longitude.as_deref()),
            depth: parsing::parse_f64(self.depth.as_deref()),
            stations_used: parsing::parse_count(self.stations_used.as_deref()),
            region: parsing::parse_region(self.region.as_deref()),
        })
    }
}

/// Reads an earthquake table from any CSV byte stream.
///
/// # Errors
///
/// Returns [`DataFault`] if the stream cannot be read, a required column is
/// missing, or a row has no valid `year`.
pub fn read_table<R: Read>(reader: R) -> Result<EarthquakeTable, DataFault> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataFault::MissingColumn { column });
        }
    }

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
        let line = idx as u64 + 2;
        rows.push(result?.into_record(line)?);
    }

    Ok(EarthquakeTable::new(rows))
}

/// Loads the earthquake table stored at `path`.
///
/// # Errors
///
/// Returns [`SourceError::DataUnavailable`] if the file is missing or
/// malformed.
pub fn load_table(path: &Path) -> Result<EarthquakeTable, SourceError> {
    let unavailable = |fault: DataFault| SourceError::DataUnavailable {
        path: path.to_path_buf(),
        fault,
    };

    let file = std::fs::File::open(path).map_err(|e| unavailable(e.into()))?;
    let table = read_table(std::io::BufReader::new(file)).map_err(unavailable)?;

    log::info!(
        "Loaded {} earthquake records from {}",
        table.len(),
        path.display()
    );

    Ok(table)
}

static DATASETS: DatasetCache = DatasetCache::new();

/// The dataset cache shared by the whole process.
#[must_use]
pub fn datasets() -> &'static DatasetCache {
    &DATASETS
}

/// Memo of loaded tables, keyed by path.
///
/// Entries never expire. Concurrent first loads of the same path may both
/// read the file; the results are identical so the last one stored wins.
pub struct DatasetCache {
    tables: TtlCache<PathBuf, Arc<EarthquakeTable>>,
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: TtlCache::unbounded(),
        }
    }

    /// Returns the table for `path`, reading it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::DataUnavailable`] if the file cannot be
    /// loaded. Failures are not cached.
    pub fn load(&self, path: &Path) -> Result<Arc<EarthquakeTable>, SourceError> {
        let key = path.to_path_buf();
        if let Some(table) = self.tables.get(&key) {
            log::debug!("Dataset cache hit for {}", path.display());
            return Ok(table);
        }

        log::debug!("Dataset cache miss for {}", path.display());
        self.tables
            .get_or_try_insert_with(&key, || load_table(path).map(Arc::new))
    }
}
