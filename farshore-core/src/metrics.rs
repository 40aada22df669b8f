//! Relocation metrics recorded per country.

use crate::VisaDifficulty;

/// Static metrics describing one candidate country.
///
/// The camelCase serde names are part of the wire contract; stored JSON
/// payloads and API output both use them.
///
/// # Examples
/// ```
/// use farshore_core::{CountryMetrics, VisaDifficulty};
///
/// let metrics = CountryMetrics {
///     gdp_per_capita: 52_331.0,
///     safety_index: 8.7,
///     healthcare_quality: 8.9,
///     education_quality: 9.0,
///     cost_of_living: 88.0,
///     climate_score: 6.8,
///     language_barrier: 4.0,
///     tax_rate: 29.0,
///     visa_difficulty: VisaDifficulty::Medium,
///     infrastructure: 8.9,
///     job_market: 8.3,
/// };
/// assert_eq!(metrics.numeric_metrics().len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CountryMetrics {
    /// Gross domestic product per capita, in currency units.
    pub gdp_per_capita: f64,
    /// Personal safety, 0-10 (higher is safer).
    pub safety_index: f64,
    /// Healthcare system quality, 0-10.
    pub healthcare_quality: f64,
    /// Education system quality, 0-10.
    pub education_quality: f64,
    /// Cost-of-living index where 100 is the baseline.
    pub cost_of_living: f64,
    /// Climate pleasantness, 0-10.
    pub climate_score: f64,
    /// Difficulty of the local language for newcomers, 0-10 (higher is
    /// harder).
    pub language_barrier: f64,
    /// Headline tax rate, percent.
    pub tax_rate: f64,
    /// Categorical visa difficulty rating.
    pub visa_difficulty: VisaDifficulty,
    /// Infrastructure quality, 0-10.
    pub infrastructure: f64,
    /// Job market strength, 0-10.
    pub job_market: f64,
}

impl CountryMetrics {
    /// All numeric metrics with their wire names, in declaration order.
    ///
    /// The categorical `visaDifficulty` rating is deliberately absent:
    /// pairwise comparison only diffs numeric values.
    pub fn numeric_metrics(&self) -> [(&'static str, f64); 10] {
        [
            ("gdpPerCapita", self.gdp_per_capita),
            ("safetyIndex", self.safety_index),
            ("healthcareQuality", self.healthcare_quality),
            ("educationQuality", self.education_quality),
            ("costOfLiving", self.cost_of_living),
            ("climateScore", self.climate_score),
            ("languageBarrier", self.language_barrier),
            ("taxRate", self.tax_rate),
            ("infrastructure", self.infrastructure),
            ("jobMarket", self.job_market),
        ]
    }
}
