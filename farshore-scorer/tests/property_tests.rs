//! Property-based tests for country scoring.
//!
//! These tests use `proptest` to assert invariants that must hold for
//! all valid scorer inputs, complementing the unit tests and the BDD
//! behavioural tests.
//!
//! # Invariants tested
//!
//! - **Clamp:** the final score is finite and stays in `0..=10` for any
//!   metrics and any resolvable preference weights.
//! - **Normalisation:** monotone in the value, pinned at the range
//!   endpoints, midpoint for degenerate ranges.
//! - **Ranking:** output is sorted descending and unknown codes never
//!   contribute entries.
//! - **Comparison:** raw differences negate when the operands swap.

use farshore_core::test_support::MemoryStore;
use farshore_core::{Country, CountryMetrics, PreferenceWeights, VisaDifficulty};
use farshore_scorer::{compare_countries, migration_score, normalise_metric, rank_countries};
use proptest::prelude::*;

fn visa_strategy() -> impl Strategy<Value = VisaDifficulty> {
    prop_oneof![
        Just(VisaDifficulty::Low),
        Just(VisaDifficulty::Medium),
        Just(VisaDifficulty::High),
    ]
}

prop_compose! {
    fn metrics_strategy()(
        gdp_per_capita in 0.0..150_000.0_f64,
        safety_index in 0.0..=10.0_f64,
        healthcare_quality in 0.0..=10.0_f64,
        education_quality in 0.0..=10.0_f64,
        cost_of_living in 0.0..=200.0_f64,
        climate_score in 0.0..=10.0_f64,
        language_barrier in 0.0..=10.0_f64,
        tax_rate in 0.0..=60.0_f64,
        visa_difficulty in visa_strategy(),
        infrastructure in 0.0..=10.0_f64,
        job_market in 0.0..=10.0_f64,
    ) -> CountryMetrics {
        CountryMetrics {
            gdp_per_capita,
            safety_index,
            healthcare_quality,
            education_quality,
            cost_of_living,
            climate_score,
            language_barrier,
            tax_rate,
            visa_difficulty,
            infrastructure,
            job_market,
        }
    }
}

prop_compose! {
    fn preferences_strategy()(
        economic_opportunities in proptest::option::of(1.0..=10.0_f64),
        quality_of_life in proptest::option::of(1.0..=10.0_f64),
        safety_and_security in proptest::option::of(1.0..=10.0_f64),
        healthcare_quality in proptest::option::of(1.0..=10.0_f64),
        climate_suitability in proptest::option::of(1.0..=10.0_f64),
    ) -> PreferenceWeights {
        PreferenceWeights {
            economic_opportunities,
            quality_of_life,
            safety_and_security,
            healthcare_quality,
            climate_suitability,
        }
    }
}

fn country_with(code: &str, metrics: CountryMetrics) -> Country {
    Country::new(code, code, "", metrics, Vec::new(), Vec::new())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the final score is clamped to `0..=10` regardless of
    /// the preference weight values.
    #[test]
    fn final_score_stays_clamped(
        metrics in metrics_strategy(),
        preferences in preferences_strategy(),
    ) {
        let weights = preferences.normalise().expect("strategy yields valid weights");
        let score = migration_score(&metrics, &weights);
        prop_assert!(score.is_finite());
        prop_assert!((0.0..=10.0).contains(&score));
    }

    /// Property: normalisation is monotonically non-decreasing in the
    /// value being rescaled.
    #[test]
    fn normalisation_is_monotone(
        a in -1_000.0..1_000.0_f64,
        b in -1_000.0..1_000.0_f64,
        min in -100.0..100.0_f64,
        span in 0.1..200.0_f64,
    ) {
        let max = min + span;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(normalise_metric(low, min, max) <= normalise_metric(high, min, max));
    }

    /// Property: the range endpoints map to the scale edges.
    #[test]
    fn normalisation_pins_endpoints(
        min in -100.0..100.0_f64,
        span in 0.1..200.0_f64,
    ) {
        let max = min + span;
        prop_assert!(normalise_metric(min, min, max).abs() < 1e-9);
        prop_assert!((normalise_metric(max, min, max) - 10.0).abs() < 1e-9);
    }

    /// Property: a degenerate range returns the midpoint instead of
    /// dividing by zero.
    #[test]
    fn degenerate_range_maps_to_midpoint(
        value in any::<f64>(),
        pin in -100.0..100.0_f64,
    ) {
        prop_assert_eq!(normalise_metric(value, pin, pin), 5.0);
    }

    /// Property: ranking output is sorted descending and contains one
    /// entry per known code only.
    #[test]
    fn ranking_is_sorted_and_skips_unknown(
        metrics in proptest::collection::vec(metrics_strategy(), 1..6),
        unknown_count in 0_usize..3,
    ) {
        let countries: Vec<Country> = metrics
            .into_iter()
            .enumerate()
            .map(|(i, m)| country_with(&format!("C{i}"), m))
            .collect();
        let known = countries.len();
        let store = MemoryStore::with_countries(countries);

        let mut codes: Vec<String> = (0..known).map(|i| format!("C{i}")).collect();
        codes.extend((0..unknown_count).map(|i| format!("X{i}")));

        let ranked = rank_countries(&store, &codes, &PreferenceWeights::default())
            .expect("default weights are valid");
        prop_assert_eq!(ranked.len(), known);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Property: swapping comparison operands negates every raw
    /// difference.
    #[test]
    fn comparison_differences_negate_under_swap(
        a in metrics_strategy(),
        b in metrics_strategy(),
    ) {
        let store = MemoryStore::with_countries([
            country_with("AA", a),
            country_with("BB", b),
        ]);
        let forward = compare_countries(&store, "AA", "BB").expect("both countries present");
        let backward = compare_countries(&store, "BB", "AA").expect("both countries present");

        for (name, metric) in &forward.metrics_comparison {
            let mirrored = backward
                .metrics_comparison
                .get(name)
                .expect("metric present in both directions");
            prop_assert_eq!(metric.difference, -mirrored.difference, "metric {}", name);
        }
    }
}
