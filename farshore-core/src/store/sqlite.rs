//! SQLite-backed store implementation for persisted country records.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

use crate::{Country, CountryMetrics};

use super::CountryStore;

/// Error raised when reading or validating persisted country records.
#[derive(Debug, Error)]
pub enum SqliteCountryStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// The stored metrics payload was not valid JSON.
    #[error("failed to parse metrics for country {code}: {source}")]
    InvalidMetrics {
        /// Code of the country whose metrics failed to parse.
        code: String,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A stored pros/cons payload was not valid JSON.
    #[error("failed to parse {field} for country {code}: {source}")]
    InvalidList {
        /// Code of the affected country.
        code: String,
        /// Name of the column that failed to parse.
        field: &'static str,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// Generic SQLite error when reading country rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only country store backed by a SQLite database.
///
/// All rows are loaded into memory at open, so lookups never touch the
/// database again and cannot fail.
#[derive(Debug)]
pub struct SqliteCountryStore {
    countries: HashMap<String, Country>,
}

impl SqliteCountryStore {
    /// Open a store backed by the provided SQLite database.
    ///
    /// # Errors
    /// Returns [`SqliteCountryStoreError`] when the database cannot be
    /// opened read-only, a query fails, or a stored JSON payload is
    /// malformed.
    pub fn open<P: AsRef<Path>>(database_path: P) -> Result<Self, SqliteCountryStoreError> {
        let database_path = database_path.as_ref();

        let connection =
            Connection::open_with_flags(database_path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
                |source| SqliteCountryStoreError::OpenDatabase {
                    path: database_path.to_path_buf(),
                    source,
                },
            )?;

        let countries = load_countries(&connection)?;
        Ok(Self { countries })
    }

    /// Number of loaded countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Report whether the store holds any countries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl CountryStore for SqliteCountryStore {
    fn country(&self, code: &str) -> Option<Country> {
        self.countries.get(code).cloned()
    }

    fn countries(&self) -> Vec<Country> {
        let mut all: Vec<_> = self.countries.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}

fn load_countries(
    connection: &Connection,
) -> Result<HashMap<String, Country>, SqliteCountryStoreError> {
    let mut statement =
        connection.prepare("SELECT code, name, flag, metrics, pros, cons FROM countries")?;
    let mut rows = statement.query([])?;
    let mut countries = HashMap::new();

    while let Some(row) = rows.next()? {
        let code: String = row.get(0)?;
        let name: String = row.get(1)?;
        let flag: String = row.get(2)?;
        let metrics_json: String = row.get(3)?;
        let pros_json: String = row.get(4)?;
        let cons_json: String = row.get(5)?;

        let metrics: CountryMetrics = serde_json::from_str(&metrics_json).map_err(|source| {
            SqliteCountryStoreError::InvalidMetrics {
                code: code.clone(),
                source,
            }
        })?;
        let pros = parse_list(&code, "pros", &pros_json)?;
        let cons = parse_list(&code, "cons", &cons_json)?;

        let country = Country {
            code: code.clone(),
            name,
            flag,
            metrics,
            pros,
            cons,
        };
        countries.insert(code, country);
    }

    Ok(countries)
}

fn parse_list(
    code: &str,
    field: &'static str,
    json: &str,
) -> Result<Vec<String>, SqliteCountryStoreError> {
    serde_json::from_str(json).map_err(|source| SqliteCountryStoreError::InvalidList {
        code: code.to_owned(),
        field,
        source,
    })
}
