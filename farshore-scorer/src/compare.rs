//! Pairwise comparison of two countries' numeric metrics.

use std::collections::BTreeMap;

use farshore_core::{Country, CountryStore};
use serde::{Deserialize, Serialize};

use crate::{CompareError, round_to_tenth};

/// Difference between two countries on a single numeric metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    /// Value recorded for the source country.
    pub source_value: f64,
    /// Value recorded for the target country.
    pub target_value: f64,
    /// Raw difference, target minus source.
    pub difference: f64,
    /// Percentage change relative to the source value, rounded to one
    /// decimal place; zero when the source value is exactly zero.
    pub percentage_change: f64,
}

/// Full pairwise comparison between two countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryComparison {
    /// The country compared from.
    pub source: Country,
    /// The country compared to.
    pub target: Country,
    /// Per-metric differences keyed by wire metric name.
    pub metrics_comparison: BTreeMap<String, MetricComparison>,
}

/// Compare two countries metric by metric.
///
/// Only numeric metrics participate; the categorical visa difficulty
/// rating is excluded from the diff.
///
/// # Errors
/// Returns [`CompareError::CountryNotFound`] naming the first code that
/// is absent from the store.
pub fn compare_countries(
    store: &dyn CountryStore,
    source: &str,
    target: &str,
) -> Result<CountryComparison, CompareError> {
    let source_country = store
        .country(source)
        .ok_or_else(|| CompareError::CountryNotFound {
            code: source.to_owned(),
        })?;
    let target_country = store
        .country(target)
        .ok_or_else(|| CompareError::CountryNotFound {
            code: target.to_owned(),
        })?;

    let metrics_comparison = source_country
        .metrics
        .numeric_metrics()
        .into_iter()
        .zip(target_country.metrics.numeric_metrics())
        .map(|((name, source_value), (_, target_value))| {
            (name.to_owned(), compare_metric(source_value, target_value))
        })
        .collect();

    Ok(CountryComparison {
        source: source_country,
        target: target_country,
        metrics_comparison,
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "metric diffing subtracts and rescales values"
)]
fn compare_metric(source_value: f64, target_value: f64) -> MetricComparison {
    let difference = target_value - source_value;
    let percentage_change = if source_value == 0.0 {
        0.0
    } else {
        round_to_tenth(difference / source_value * 100.0)
    };
    MetricComparison {
        source_value,
        target_value,
        difference,
        percentage_change,
    }
}
