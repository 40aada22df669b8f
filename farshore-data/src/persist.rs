//! SQLite persistence for the country catalogue.

use camino::{Utf8Path, Utf8PathBuf};
use farshore_core::Country;
use rusqlite::{Connection, Error as SqliteError, Transaction};
use thiserror::Error;

use crate::builtin_countries;

const CREATE_COUNTRIES_TABLE: &str = "CREATE TABLE IF NOT EXISTS countries (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    flag TEXT NOT NULL,
    metrics TEXT NOT NULL,
    pros TEXT NOT NULL,
    cons TEXT NOT NULL,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const INSERT_COUNTRY: &str = "INSERT OR REPLACE INTO countries
    (code, name, flag, metrics, pros, cons)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

/// Errors raised while seeding or refreshing the country database.
#[derive(Debug, Error)]
pub enum DataStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path:?}")]
    Open {
        /// Destination database path.
        path: Utf8PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Creating the `countries` table failed.
    #[error("failed to create countries table")]
    CreateSchema {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Counting the persisted rows failed.
    #[error("failed to count persisted countries")]
    CountRows {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Beginning the persistence transaction failed.
    #[error("failed to begin country persistence transaction")]
    BeginTransaction {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Preparing the insert statement failed.
    #[error("failed to prepare country insert statement")]
    PrepareInsert {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Serializing a JSON column failed.
    #[error("failed to serialize {field} for country {code}")]
    SerialiseColumn {
        /// Code of the affected country.
        code: String,
        /// Name of the column that failed to serialize.
        field: &'static str,
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing a country row failed.
    #[error("failed to persist country {code}")]
    PersistRow {
        /// Code of the country being persisted.
        code: String,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Committing the persistence transaction failed.
    #[error("failed to commit country persistence transaction")]
    Commit {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
}

/// Create the database schema and seed the built-in catalogue.
///
/// Seeding only happens when the table is empty, so existing data —
/// including locally edited rows — survives process restarts.
///
/// # Errors
/// Returns [`DataStoreError`] when the database cannot be opened or
/// written.
pub fn initialise_database(path: &Utf8Path) -> Result<(), DataStoreError> {
    let mut connection = open_database(path)?;
    create_schema(&connection)?;

    let count: i64 = connection
        .query_row("SELECT COUNT(*) FROM countries", [], |row| row.get(0))
        .map_err(|source| DataStoreError::CountRows { source })?;
    if count == 0 {
        log::info!("initialising database with the built-in country catalogue");
        persist_catalogue(&mut connection)?;
    }

    Ok(())
}

/// Rewrite the full catalogue into the database.
///
/// The function is idempotent: rows are replaced when codes already
/// exist, and the schema is created when missing.
///
/// # Errors
/// Returns [`DataStoreError`] when the database cannot be opened or
/// written.
pub fn refresh_database(path: &Utf8Path) -> Result<(), DataStoreError> {
    log::info!("refreshing country data");
    let mut connection = open_database(path)?;
    create_schema(&connection)?;
    persist_catalogue(&mut connection)?;
    log::info!("country data refreshed");
    Ok(())
}

fn open_database(path: &Utf8Path) -> Result<Connection, DataStoreError> {
    Connection::open(path.as_std_path()).map_err(|source| DataStoreError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn create_schema(connection: &Connection) -> Result<(), DataStoreError> {
    connection
        .execute(CREATE_COUNTRIES_TABLE, [])
        .map(|_| ())
        .map_err(|source| DataStoreError::CreateSchema { source })
}

fn persist_catalogue(connection: &mut Connection) -> Result<(), DataStoreError> {
    let transaction = connection
        .transaction()
        .map_err(|source| DataStoreError::BeginTransaction { source })?;

    persist_rows(&transaction, &builtin_countries())?;

    transaction
        .commit()
        .map_err(|source| DataStoreError::Commit { source })?;
    Ok(())
}

fn persist_rows(
    transaction: &Transaction<'_>,
    countries: &[Country],
) -> Result<(), DataStoreError> {
    let mut statement = transaction
        .prepare(INSERT_COUNTRY)
        .map_err(|source| DataStoreError::PrepareInsert { source })?;

    for country in countries {
        let metrics = serialise_column(&country.code, "metrics", &country.metrics)?;
        let pros = serialise_column(&country.code, "pros", &country.pros)?;
        let cons = serialise_column(&country.code, "cons", &country.cons)?;
        statement
            .execute((
                &country.code,
                &country.name,
                &country.flag,
                metrics,
                pros,
                cons,
            ))
            .map_err(|source| DataStoreError::PersistRow {
                code: country.code.clone(),
                source,
            })?;
    }

    Ok(())
}

fn serialise_column<T: serde::Serialize>(
    code: &str,
    field: &'static str,
    value: &T,
) -> Result<String, DataStoreError> {
    serde_json::to_string(value).map_err(|source| DataStoreError::SerialiseColumn {
        code: code.to_owned(),
        field,
        source,
    })
}
