//! Scoring for relocation candidate countries.
//!
//! The crate provides three complementary capabilities:
//! - **Component and final scoring** maps one country's static metrics
//!   and a set of user preference weights onto a clamped `0..=10` final
//!   score with informational component scores.
//! - **Batch ranking** applies the scorer across a list of candidate
//!   codes from a [`CountryStore`](farshore_core::CountryStore), skipping
//!   unknown codes and sorting descending by score.
//! - **Pairwise comparison** diffs every numeric metric of two countries.
//!
//! All computation is synchronous and side-effect free; the functions
//! are pure in their inputs and safe to call concurrently.
//!
//! # Examples
//!
//! ```
//! use farshore_core::PreferenceWeights;
//! use farshore_core::test_support::{MemoryStore, netherlands, portugal};
//! use farshore_scorer::rank_countries;
//!
//! let store = MemoryStore::with_countries([netherlands(), portugal()]);
//! let ranked = rank_countries(&store, &["NL", "PT"], &PreferenceWeights::default())
//!     .expect("default weights are valid");
//! assert_eq!(ranked.len(), 2);
//! assert!(ranked[0].score >= ranked[1].score);
//! ```

#![forbid(unsafe_code)]

use farshore_core::{
    ComponentScores, Country, CountryMetrics, NormalisedWeights, Recommendation, ScoreResult,
};

mod compare;
mod error;
mod rank;

pub use compare::{CountryComparison, MetricComparison, compare_countries};
pub use error::CompareError;
pub use rank::rank_countries;

/// Bounds of the GDP-per-capita range mapped onto the 0-10 scale.
const GDP_PER_CAPITA_MIN: f64 = 2_000.0;
const GDP_PER_CAPITA_MAX: f64 = 85_000.0;

/// Score deduction per point of language barrier.
const LANGUAGE_PENALTY_RATE: f64 = 0.1;

/// Linearly rescale `value` from `min..=max` onto the 0-10 scale.
///
/// Values outside the range clamp to the scale edges. A degenerate
/// range (`min == max`) maps everything to the 5.0 midpoint instead of
/// dividing by zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "metric normalisation is a linear rescale"
)]
pub fn normalise_metric(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 5.0;
    }
    (((value - min) / (max - min)) * 10.0).clamp(0.0, 10.0)
}

/// Compute the economic opportunities component score.
///
/// Blends normalised GDP per capita, job market strength, and a tax
/// relief term. The tax term is unclamped, so out-of-range tax rates
/// push the component outside `0..=10`; only the final score clamps.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "component scoring blends weighted metrics"
)]
pub fn economic_score(metrics: &CountryMetrics) -> f64 {
    let gdp = normalise_metric(
        metrics.gdp_per_capita,
        GDP_PER_CAPITA_MIN,
        GDP_PER_CAPITA_MAX,
    );
    let tax_relief = (100.0 - metrics.tax_rate) / 10.0;
    gdp * 0.4 + metrics.job_market * 0.4 + tax_relief * 0.2
}

/// Compute the quality-of-life component score.
///
/// Blends healthcare, education, infrastructure, and a cost-of-living
/// relief term. The cost term carries the same unclamped caveat as the
/// tax term in [`economic_score`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "component scoring blends weighted metrics"
)]
pub fn quality_score(metrics: &CountryMetrics) -> f64 {
    let cost_relief = (150.0 - metrics.cost_of_living) / 15.0;
    metrics.healthcare_quality * 0.3
        + metrics.education_quality * 0.2
        + metrics.infrastructure * 0.3
        + cost_relief * 0.2
}

/// Compute the final migration score for one country.
///
/// The five factor scores are combined as a weighted average over the
/// resolved preference weights, so the result is invariant to uniform
/// scaling of all weights. The visa difficulty penalty and the language
/// barrier penalty are then applied, and the result clamps to `0..=10`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "final scoring is a weighted average with penalties"
)]
pub fn migration_score(metrics: &CountryMetrics, weights: &NormalisedWeights) -> f64 {
    let weighted = (economic_score(metrics) * weights.economic()
        + quality_score(metrics) * weights.quality()
        + metrics.safety_index * weights.safety()
        + metrics.healthcare_quality * weights.healthcare()
        + metrics.climate_score * weights.climate())
        / weights.total();

    let penalised = weighted + metrics.visa_difficulty.penalty()
        - metrics.language_barrier * LANGUAGE_PENALTY_RATE;
    penalised.clamp(0.0, 10.0)
}

/// Score one country and build its ranking entry.
///
/// The recommendation derives from the unrounded score; the displayed
/// final and component scores round to one decimal place.
#[must_use]
pub fn score_country(country: &Country, weights: &NormalisedWeights) -> ScoreResult {
    let raw = migration_score(&country.metrics, weights);
    ScoreResult {
        score: round_to_tenth(raw),
        recommendation: Recommendation::from_score(raw),
        component_scores: ComponentScores {
            economic: round_to_tenth(economic_score(&country.metrics)),
            quality: round_to_tenth(quality_score(&country.metrics)),
            safety: round_to_tenth(country.metrics.safety_index),
        },
        country: country.clone(),
    }
}

/// Round a value to one decimal place for display.
#[expect(clippy::float_arithmetic, reason = "display rounding scales by ten")]
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests;
