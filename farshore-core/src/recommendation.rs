//! Recommendation bands derived from the final score.

/// Verdict bands for a scored country.
///
/// Band thresholds are inclusive at the lower edge: a score of exactly
/// 8.5 is already [`Recommendation::StronglyRecommended`].
///
/// # Examples
/// ```
/// use farshore_core::Recommendation;
///
/// assert_eq!(Recommendation::from_score(8.5), Recommendation::StronglyRecommended);
/// assert_eq!(Recommendation::from_score(5.4).as_str(), "Not recommended");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recommendation {
    /// Score of 8.5 or above.
    #[cfg_attr(feature = "serde", serde(rename = "Strongly recommended"))]
    StronglyRecommended,
    /// Score of 7.0 or above.
    #[cfg_attr(feature = "serde", serde(rename = "Recommended"))]
    Recommended,
    /// Score of 5.5 or above.
    #[cfg_attr(feature = "serde", serde(rename = "Consider with caution"))]
    ConsiderWithCaution,
    /// Everything below 5.5.
    #[cfg_attr(feature = "serde", serde(rename = "Not recommended"))]
    NotRecommended,
}

impl Recommendation {
    /// Map a final score onto its band.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            Self::StronglyRecommended
        } else if score >= 7.0 {
            Self::Recommended
        } else if score >= 5.5 {
            Self::ConsiderWithCaution
        } else {
            Self::NotRecommended
        }
    }

    /// Return the human-readable label for this band.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StronglyRecommended => "Strongly recommended",
            Self::Recommended => "Recommended",
            Self::ConsiderWithCaution => "Consider with caution",
            Self::NotRecommended => "Not recommended",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
