//! Candidate country records.

use crate::CountryMetrics;

/// A candidate country with its relocation metrics and narrative notes.
///
/// # Examples
/// ```
/// use farshore_core::{Country, CountryMetrics, VisaDifficulty};
///
/// let country = Country::new(
///     "NL",
///     "Netherlands",
///     "\u{1F1F3}\u{1F1F1}",
///     CountryMetrics {
///         gdp_per_capita: 52_331.0,
///         safety_index: 8.7,
///         healthcare_quality: 8.9,
///         education_quality: 9.0,
///         cost_of_living: 88.0,
///         climate_score: 6.8,
///         language_barrier: 4.0,
///         tax_rate: 29.0,
///         visa_difficulty: VisaDifficulty::Medium,
///         infrastructure: 8.9,
///         job_market: 8.3,
///     },
///     Vec::new(),
///     Vec::new(),
/// );
/// assert_eq!(country.code, "NL");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Country {
    /// Short country code, the primary key for lookups.
    pub code: String,
    /// Human-readable country name.
    pub name: String,
    /// Flag emoji shown alongside the name.
    pub flag: String,
    /// Static relocation metrics.
    pub metrics: CountryMetrics,
    /// Points in favour of relocating here.
    pub pros: Vec<String>,
    /// Points against relocating here.
    pub cons: Vec<String>,
}

impl Country {
    /// Construct a country record.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        flag: impl Into<String>,
        metrics: CountryMetrics,
        pros: Vec<String>,
        cons: Vec<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            flag: flag.into(),
            metrics,
            pros,
            cons,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::netherlands;

    #[test]
    fn serializes_with_plain_field_names() {
        let value = serde_json::to_value(netherlands()).unwrap();
        let object = value.as_object().unwrap();
        for key in ["code", "name", "flag", "metrics", "pros", "cons"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }
}
