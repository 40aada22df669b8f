//! Error types raised while comparing countries.

use thiserror::Error;

/// Errors raised by pairwise country comparison.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompareError {
    /// A requested country code was absent from the store. Comparison
    /// requires both operands, so this is an error rather than a skip.
    #[error("country {code} was not found")]
    CountryNotFound {
        /// The code that failed to resolve.
        code: String,
    },
}
