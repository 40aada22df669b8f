//! Data access traits for country records.
//!
//! The `CountryStore` trait defines a read-only interface for looking up
//! [`Country`] values by code. The scorer and ranker consume it without
//! caring where the data lives.

use crate::Country;

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteCountryStore, SqliteCountryStoreError};

/// Read-only access to persisted country records.
///
/// Lookups are exact matches on the country code. Implementations load
/// or index their data so both methods are infallible; a failed lookup
/// is simply `None`.
///
/// # Examples
///
/// ```rust
/// use farshore_core::{Country, CountryStore};
///
/// struct VecStore {
///     countries: Vec<Country>,
/// }
///
/// impl CountryStore for VecStore {
///     fn country(&self, code: &str) -> Option<Country> {
///         self.countries.iter().find(|c| c.code == code).cloned()
///     }
///
///     fn countries(&self) -> Vec<Country> {
///         let mut all = self.countries.clone();
///         all.sort_by(|a, b| a.name.cmp(&b.name));
///         all
///     }
/// }
///
/// let store = VecStore { countries: Vec::new() };
/// assert!(store.country("NL").is_none());
/// ```
pub trait CountryStore {
    /// Return the country with the given code, if present.
    fn country(&self, code: &str) -> Option<Country>;

    /// Return all countries, sorted by name.
    fn countries(&self) -> Vec<Country>;
}
