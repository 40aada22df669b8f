//! Test-only, in-memory `CountryStore` implementation and country
//! fixtures used by unit and behaviour tests.

use crate::{Country, CountryMetrics, CountryStore, VisaDifficulty};

/// In-memory `CountryStore` implementation used in tests.
///
/// The store performs a linear scan and is intended only for small
/// datasets.
#[derive(Default, Debug)]
pub struct MemoryStore {
    countries: Vec<Country>,
}

impl MemoryStore {
    /// Create a store containing a single country.
    pub fn with_country(country: Country) -> Self {
        Self::with_countries(std::iter::once(country))
    }

    /// Create a store from a collection of countries.
    pub fn with_countries<I>(countries: I) -> Self
    where
        I: IntoIterator<Item = Country>,
    {
        Self {
            countries: countries.into_iter().collect(),
        }
    }
}

impl CountryStore for MemoryStore {
    fn country(&self, code: &str) -> Option<Country> {
        self.countries.iter().find(|c| c.code == code).cloned()
    }

    fn countries(&self) -> Vec<Country> {
        let mut all = self.countries.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}

fn fixture(code: &str, name: &str, flag: &str, metrics: CountryMetrics) -> Country {
    Country::new(code, name, flag, metrics, Vec::new(), Vec::new())
}

/// The Netherlands with its production metric values.
pub fn netherlands() -> Country {
    fixture(
        "NL",
        "Netherlands",
        "\u{1F1F3}\u{1F1F1}",
        CountryMetrics {
            gdp_per_capita: 52_331.0,
            safety_index: 8.7,
            healthcare_quality: 8.9,
            education_quality: 9.0,
            cost_of_living: 88.0,
            climate_score: 6.8,
            language_barrier: 4.0,
            tax_rate: 29.0,
            visa_difficulty: VisaDifficulty::Medium,
            infrastructure: 8.9,
            job_market: 8.3,
        },
    )
}

/// Portugal with its production metric values.
pub fn portugal() -> Country {
    fixture(
        "PT",
        "Portugal",
        "\u{1F1F5}\u{1F1F9}",
        CountryMetrics {
            gdp_per_capita: 23_252.0,
            safety_index: 8.5,
            healthcare_quality: 7.8,
            education_quality: 7.8,
            cost_of_living: 65.0,
            climate_score: 9.0,
            language_barrier: 7.5,
            tax_rate: 21.5,
            visa_difficulty: VisaDifficulty::Medium,
            infrastructure: 7.5,
            job_market: 6.5,
        },
    )
}

/// Switzerland with its production metric values.
pub fn switzerland() -> Country {
    fixture(
        "CH",
        "Switzerland",
        "\u{1F1E8}\u{1F1ED}",
        CountryMetrics {
            gdp_per_capita: 81_867.0,
            safety_index: 9.5,
            healthcare_quality: 9.2,
            education_quality: 8.9,
            cost_of_living: 125.0,
            climate_score: 7.2,
            language_barrier: 6.5,
            tax_rate: 22.0,
            visa_difficulty: VisaDifficulty::High,
            infrastructure: 9.4,
            job_market: 8.7,
        },
    )
}

/// India with its production metric values.
pub fn india() -> Country {
    fixture(
        "IN",
        "India",
        "\u{1F1EE}\u{1F1F3}",
        CountryMetrics {
            gdp_per_capita: 2_256.0,
            safety_index: 6.2,
            healthcare_quality: 6.8,
            education_quality: 6.5,
            cost_of_living: 25.0,
            climate_score: 6.5,
            language_barrier: 3.0,
            tax_rate: 30.0,
            visa_difficulty: VisaDifficulty::Low,
            infrastructure: 5.8,
            job_market: 6.0,
        },
    )
}
