//! Facade crate for the Farshore relocation engine.
//!
//! This crate re-exports the core domain types and exposes the scorer and
//! the SQLite-backed country store behind feature flags.

#![forbid(unsafe_code)]

pub use farshore_core::{
    ComponentScores, Country, CountryMetrics, CountryStore, NormalisedWeights, PreferenceError,
    PreferenceWeights, Recommendation, ScoreResult, VisaDifficulty,
};

#[cfg(feature = "store-sqlite")]
pub use farshore_core::{SqliteCountryStore, SqliteCountryStoreError};

#[cfg(feature = "scorer")]
pub use farshore_scorer::{
    CompareError, CountryComparison, MetricComparison, compare_countries, rank_countries,
};
