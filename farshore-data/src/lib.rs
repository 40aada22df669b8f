//! Data access and refresh logic for the Farshore engine.
//!
//! Responsibilities:
//! - Ship the built-in country catalogue.
//! - Seed and refresh the SQLite database consumed by the read-only
//!   country store.
//! - Own the periodic refresh task.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `farshore-scorer`).
//! - No global mutable state; the refresh task owns its thread.

mod catalogue;
mod persist;
mod refresh;

pub use catalogue::builtin_countries;
pub use persist::{DataStoreError, initialise_database, refresh_database};
pub use refresh::{RefreshSchedule, RefreshTask};
