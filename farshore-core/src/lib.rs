//! Core domain types for the Farshore relocation engine.
//!
//! These models describe candidate countries, their relocation metrics,
//! and the user preference weights applied when scoring them. Validation
//! happens at the seams: weight resolution returns `Result` so invalid
//! preference sets surface before any scoring occurs.

#![forbid(unsafe_code)]

mod country;
mod metrics;
mod preferences;
mod recommendation;
mod score;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod visa;

pub use country::Country;
pub use metrics::CountryMetrics;
pub use preferences::{NormalisedWeights, PreferenceError, PreferenceWeights};
pub use recommendation::Recommendation;
pub use score::{ComponentScores, ScoreResult};
pub use store::CountryStore;
#[cfg(feature = "store-sqlite")]
pub use store::{SqliteCountryStore, SqliteCountryStoreError};
pub use visa::VisaDifficulty;
