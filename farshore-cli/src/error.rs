//! Error types emitted by the Farshore CLI.
//!
//! Keep this error type reasonably small, as most CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use farshore_core::{PreferenceError, SqliteCountryStoreError};
use farshore_data::DataStoreError;
use farshore_scorer::CompareError;
use thiserror::Error;

/// Errors emitted by the Farshore CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set {field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Seeding or refreshing the country database failed.
    #[error(transparent)]
    Data(#[from] DataStoreError),
    /// Opening the country store failed.
    #[error(transparent)]
    OpenStore(#[from] SqliteCountryStoreError),
    /// The supplied preference weights were unusable.
    #[error(transparent)]
    InvalidWeights(#[from] PreferenceError),
    /// Pairwise comparison failed.
    #[error(transparent)]
    Compare(#[from] CompareError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
}
