//! User preference weights across the five scoring factors.
//!
//! Weights arrive from users in the `1..=10` range. Scoring works on the
//! normalised `weight / 10` form, and each factor falls back to a
//! documented default when the user leaves it unset.

use thiserror::Error;

/// Default normalised weight for economic opportunities.
pub const DEFAULT_ECONOMIC_OPPORTUNITIES: f64 = 0.7;
/// Default normalised weight for quality of life.
pub const DEFAULT_QUALITY_OF_LIFE: f64 = 0.8;
/// Default normalised weight for safety and security.
pub const DEFAULT_SAFETY_AND_SECURITY: f64 = 0.6;
/// Default normalised weight for healthcare quality.
pub const DEFAULT_HEALTHCARE_QUALITY: f64 = 0.7;
/// Default normalised weight for climate suitability.
pub const DEFAULT_CLIMATE_SUITABILITY: f64 = 0.5;

/// User-assigned importance for each scoring factor, `1..=10`.
///
/// Every field is optional; an unset factor resolves to its default
/// normalised weight. Construct with a struct literal and
/// `..Default::default()` for the factors you do not care about.
///
/// # Examples
/// ```
/// use farshore_core::PreferenceWeights;
///
/// let preferences = PreferenceWeights {
///     economic_opportunities: Some(9.0),
///     ..Default::default()
/// };
/// let weights = preferences.normalise().expect("valid weights");
/// assert_eq!(weights.economic(), 0.9);
/// assert_eq!(weights.quality(), 0.8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PreferenceWeights {
    /// Importance of salaries, jobs, and taxes.
    pub economic_opportunities: Option<f64>,
    /// Importance of healthcare, education, infrastructure, and costs.
    pub quality_of_life: Option<f64>,
    /// Importance of personal safety.
    pub safety_and_security: Option<f64>,
    /// Importance of healthcare quality on its own.
    pub healthcare_quality: Option<f64>,
    /// Importance of a pleasant climate.
    pub climate_suitability: Option<f64>,
}

/// Errors raised while resolving preference weights.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreferenceError {
    /// A supplied weight was non-finite or negative, or the resolved
    /// weights summed to zero.
    #[error("preference weights must be finite, non-negative, and sum to a positive value")]
    InvalidWeights,
}

impl PreferenceWeights {
    /// Resolve the preferences into validated normalised weights.
    ///
    /// Supplied weights are divided by ten; missing factors use their
    /// default. The total is the divisor of the weighted average, so a
    /// zero total is rejected here rather than surfacing as a division
    /// by zero during scoring.
    ///
    /// # Errors
    /// Returns [`PreferenceError::InvalidWeights`] when any supplied
    /// weight is non-finite or negative, or when the five resolved
    /// weights do not sum to a positive value.
    pub fn normalise(&self) -> Result<NormalisedWeights, PreferenceError> {
        let economic = resolve(self.economic_opportunities, DEFAULT_ECONOMIC_OPPORTUNITIES)?;
        let quality = resolve(self.quality_of_life, DEFAULT_QUALITY_OF_LIFE)?;
        let safety = resolve(self.safety_and_security, DEFAULT_SAFETY_AND_SECURITY)?;
        let healthcare = resolve(self.healthcare_quality, DEFAULT_HEALTHCARE_QUALITY)?;
        let climate = resolve(self.climate_suitability, DEFAULT_CLIMATE_SUITABILITY)?;

        let total = economic + quality + safety + healthcare + climate;
        if total <= 0.0 {
            return Err(PreferenceError::InvalidWeights);
        }

        Ok(NormalisedWeights {
            economic,
            quality,
            safety,
            healthcare,
            climate,
            total,
        })
    }
}

fn resolve(weight: Option<f64>, default: f64) -> Result<f64, PreferenceError> {
    match weight {
        None => Ok(default),
        Some(value) if value.is_finite() && value >= 0.0 => Ok(value / 10.0),
        Some(_) => Err(PreferenceError::InvalidWeights),
    }
}

/// Validated normalised weights with a guaranteed positive total.
///
/// Only obtainable through [`PreferenceWeights::normalise`], so scoring
/// code can divide by [`NormalisedWeights::total`] without re-checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalisedWeights {
    economic: f64,
    quality: f64,
    safety: f64,
    healthcare: f64,
    climate: f64,
    total: f64,
}

impl NormalisedWeights {
    /// Normalised weight for the economic component.
    pub const fn economic(&self) -> f64 {
        self.economic
    }

    /// Normalised weight for the quality-of-life component.
    pub const fn quality(&self) -> f64 {
        self.quality
    }

    /// Normalised weight for the safety component.
    pub const fn safety(&self) -> f64 {
        self.safety
    }

    /// Normalised weight for the healthcare component.
    pub const fn healthcare(&self) -> f64 {
        self.healthcare
    }

    /// Normalised weight for the climate component.
    pub const fn climate(&self) -> f64 {
        self.climate
    }

    /// Sum of the five normalised weights, always positive.
    pub const fn total(&self) -> f64 {
        self.total
    }
}
