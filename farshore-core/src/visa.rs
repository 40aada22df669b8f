//! Visa difficulty ratings and their scoring penalties.
//!
//! The enum offers compile-time safety for the three-level categorical
//! rating used by the scorer.
//!
//! # Examples
//! ```
//! use farshore_core::VisaDifficulty;
//!
//! assert_eq!(VisaDifficulty::High.as_str(), "HIGH");
//! assert_eq!(VisaDifficulty::Low.penalty(), 0.0);
//! ```

/// How hard it is to obtain residency in a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum VisaDifficulty {
    /// Straightforward visa processes.
    Low,
    /// Typical paperwork and waiting times. Also the fail-safe default
    /// for unrecognized stored values.
    #[default]
    Medium,
    /// Strict or expensive requirements.
    High,
}

impl VisaDifficulty {
    /// Return the rating as the uppercase wire string.
    ///
    /// # Examples
    /// ```
    /// use farshore_core::VisaDifficulty;
    ///
    /// assert_eq!(VisaDifficulty::Medium.as_str(), "MEDIUM");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Fixed deduction applied to the final score for this rating.
    pub const fn penalty(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Medium => -0.5,
            Self::High => -1.0,
        }
    }
}

impl std::fmt::Display for VisaDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VisaDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(format!("unknown visa difficulty '{s}'")),
        }
    }
}

/// Stored payloads occasionally carry ratings this version does not
/// know; those deserialize to [`VisaDifficulty::Medium`] rather than
/// failing the whole record.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VisaDifficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}
