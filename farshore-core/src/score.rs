//! Scoring output records.

use crate::{Country, Recommendation};

/// Informational sub-scores shown next to the final score.
///
/// Economic and quality values come from unclamped formulas and may sit
/// outside `0..=10` for unusual inputs; only the final score is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentScores {
    /// Economic opportunities component.
    pub economic: f64,
    /// Quality-of-life component.
    pub quality: f64,
    /// Safety component (the raw safety index).
    pub safety: f64,
}

/// One country's scored ranking entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// The scored country record.
    pub country: Country,
    /// Final score in `0..=10`, rounded to one decimal place.
    pub score: f64,
    /// Verdict band for the final score.
    pub recommendation: Recommendation,
    /// Component scores, rounded to one decimal place.
    pub component_scores: ComponentScores,
}
