//! Unit coverage for country scoring, ranking, and comparison.

use farshore_core::test_support::{MemoryStore, india, netherlands, portugal, switzerland};
use farshore_core::{CountryMetrics, PreferenceWeights, Recommendation, VisaDifficulty};
use rstest::rstest;

use crate::{
    compare_countries, economic_score, migration_score, normalise_metric, quality_score,
    rank_countries, round_to_tenth, score_country, CompareError,
};

#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected approximately {expected}, got {actual}"
    );
}

fn zeroed_metrics() -> CountryMetrics {
    CountryMetrics {
        gdp_per_capita: 0.0,
        safety_index: 0.0,
        healthcare_quality: 0.0,
        education_quality: 0.0,
        cost_of_living: 150.0,
        climate_score: 0.0,
        language_barrier: 0.0,
        tax_rate: 100.0,
        visa_difficulty: VisaDifficulty::Low,
        infrastructure: 0.0,
        job_market: 0.0,
    }
}

fn default_weights() -> farshore_core::NormalisedWeights {
    PreferenceWeights::default()
        .normalise()
        .expect("default weights are valid")
}

#[rstest]
#[case(2_000.0, 0.0)]
#[case(85_000.0, 10.0)]
fn normalise_maps_range_endpoints(#[case] value: f64, #[case] expected: f64) {
    assert_close(normalise_metric(value, 2_000.0, 85_000.0), expected);
}

#[rstest]
#[case(-500.0, 0.0)]
#[case(200_000.0, 10.0)]
fn normalise_clamps_out_of_range_values(#[case] value: f64, #[case] expected: f64) {
    assert_close(normalise_metric(value, 2_000.0, 85_000.0), expected);
}

#[rstest]
fn normalise_degenerate_range_returns_midpoint() {
    assert_close(normalise_metric(3.0, 7.0, 7.0), 5.0);
}

#[rstest]
fn economic_score_matches_reference_values() {
    assert_close(economic_score(&netherlands().metrics), 7.165_590_361_445_783);
}

#[rstest]
fn quality_score_matches_reference_values() {
    assert_close(quality_score(&netherlands().metrics), 7.966_666_666_666_667);
}

#[rstest]
fn tax_relief_term_is_unclamped() {
    let mut metrics = zeroed_metrics();
    metrics.tax_rate = 200.0;
    assert_close(economic_score(&metrics), -2.0);
}

#[rstest]
fn cost_relief_term_is_unclamped() {
    let mut metrics = zeroed_metrics();
    metrics.cost_of_living = 300.0;
    assert_close(quality_score(&metrics), -2.0);
}

#[rstest]
fn netherlands_scores_recommended_with_defaults() {
    let raw = migration_score(&netherlands().metrics, &default_weights());
    assert_close(raw, 7.051_286_844_347_086);
    assert_eq!(Recommendation::from_score(raw), Recommendation::Recommended);
}

#[rstest]
fn final_score_clamps_to_zero() {
    let mut metrics = zeroed_metrics();
    metrics.language_barrier = 10.0;
    metrics.visa_difficulty = VisaDifficulty::High;
    assert_eq!(migration_score(&metrics, &default_weights()), 0.0);
}

#[rstest]
fn final_score_clamps_to_ten() {
    let mut metrics = zeroed_metrics();
    metrics.gdp_per_capita = 85_000.0;
    metrics.job_market = 10.0;
    metrics.tax_rate = -50.0;
    let preferences = PreferenceWeights {
        economic_opportunities: Some(10.0),
        quality_of_life: Some(0.0),
        safety_and_security: Some(0.0),
        healthcare_quality: Some(0.0),
        climate_suitability: Some(0.0),
    };
    let weights = preferences.normalise().expect("one positive weight");
    assert_close(economic_score(&metrics), 11.0);
    assert_eq!(migration_score(&metrics, &weights), 10.0);
}

#[rstest]
fn score_is_invariant_to_uniform_weight_scaling() {
    let low = PreferenceWeights {
        economic_opportunities: Some(2.0),
        quality_of_life: Some(2.0),
        safety_and_security: Some(2.0),
        healthcare_quality: Some(2.0),
        climate_suitability: Some(2.0),
    };
    let high = PreferenceWeights {
        economic_opportunities: Some(8.0),
        quality_of_life: Some(8.0),
        safety_and_security: Some(8.0),
        healthcare_quality: Some(8.0),
        climate_suitability: Some(8.0),
    };
    let metrics = netherlands().metrics;
    assert_close(
        migration_score(&metrics, &low.normalise().expect("valid weights")),
        migration_score(&metrics, &high.normalise().expect("valid weights")),
    );
}

#[rstest]
fn score_country_rounds_for_display() {
    let result = score_country(&netherlands(), &default_weights());
    assert_eq!(result.score, 7.1);
    assert_eq!(result.recommendation, Recommendation::Recommended);
    assert_eq!(result.component_scores.economic, 7.2);
    assert_eq!(result.component_scores.quality, 8.0);
    assert_eq!(result.component_scores.safety, 8.7);
}

#[rstest]
fn recommendation_uses_the_unrounded_score() {
    // 8.46 displays as 8.5 but stays below the 8.5 band threshold.
    let mut metrics = zeroed_metrics();
    metrics.safety_index = 8.46;
    let preferences = PreferenceWeights {
        economic_opportunities: Some(0.0),
        quality_of_life: Some(0.0),
        safety_and_security: Some(10.0),
        healthcare_quality: Some(0.0),
        climate_suitability: Some(0.0),
    };
    let weights = preferences.normalise().expect("one positive weight");
    let country = farshore_core::Country::new("XX", "Test", "", metrics, Vec::new(), Vec::new());
    let result = score_country(&country, &weights);
    assert_eq!(result.score, 8.5);
    assert_eq!(result.recommendation, Recommendation::Recommended);
}

#[rstest]
fn rounding_keeps_one_decimal_place() {
    assert_eq!(round_to_tenth(7.051_286_8), 7.1);
    assert_eq!(round_to_tenth(6.24), 6.2);
}

#[rstest]
fn ranking_sorts_descending_and_skips_unknown_codes() {
    let store =
        MemoryStore::with_countries([netherlands(), switzerland(), portugal(), india()]);
    let ranked = rank_countries(
        &store,
        &["IN", "XX", "NL", "CH", "PT"],
        &PreferenceWeights::default(),
    )
    .expect("default weights are valid");

    let codes: Vec<_> = ranked.iter().map(|r| r.country.code.as_str()).collect();
    assert_eq!(codes, ["NL", "CH", "PT", "IN"]);
    let scores: Vec<_> = ranked.iter().map(|r| r.score).collect();
    assert_eq!(scores, [7.1, 6.9, 6.2, 5.7]);
}

#[rstest]
fn ranking_ties_keep_input_order() {
    let mut twin = netherlands();
    twin.code = "N2".to_owned();
    twin.name = "Twinlands".to_owned();
    let store = MemoryStore::with_countries([netherlands(), twin]);

    let ranked = rank_countries(&store, &["N2", "NL"], &PreferenceWeights::default())
        .expect("default weights are valid");
    let codes: Vec<_> = ranked.iter().map(|r| r.country.code.as_str()).collect();
    assert_eq!(codes, ["N2", "NL"]);
}

#[rstest]
fn ranking_rejects_unusable_weights() {
    let store = MemoryStore::with_country(netherlands());
    let preferences = PreferenceWeights {
        economic_opportunities: Some(0.0),
        quality_of_life: Some(0.0),
        safety_and_security: Some(0.0),
        healthcare_quality: Some(0.0),
        climate_suitability: Some(0.0),
    };
    assert!(rank_countries(&store, &["NL"], &preferences).is_err());
}

#[rstest]
fn comparison_reports_differences_and_percentages() {
    let store = MemoryStore::with_countries([netherlands(), switzerland()]);
    let comparison = compare_countries(&store, "NL", "CH").expect("both countries exist");

    assert_eq!(comparison.metrics_comparison.len(), 10);
    assert!(!comparison.metrics_comparison.contains_key("visaDifficulty"));

    let gdp = comparison
        .metrics_comparison
        .get("gdpPerCapita")
        .expect("gdp metric present");
    assert_eq!(gdp.source_value, 52_331.0);
    assert_eq!(gdp.target_value, 81_867.0);
    assert_eq!(gdp.difference, 29_536.0);
    assert_eq!(gdp.percentage_change, 56.4);
}

#[rstest]
fn comparison_with_itself_is_all_zero() {
    let store = MemoryStore::with_country(netherlands());
    let comparison = compare_countries(&store, "NL", "NL").expect("country exists");
    for (name, metric) in &comparison.metrics_comparison {
        assert_eq!(metric.difference, 0.0, "difference for {name}");
        assert_eq!(metric.percentage_change, 0.0, "percentage for {name}");
    }
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "antisymmetry check negates differences"
)]
fn comparison_differences_are_antisymmetric() {
    let store = MemoryStore::with_countries([netherlands(), portugal()]);
    let forward = compare_countries(&store, "NL", "PT").expect("both countries exist");
    let backward = compare_countries(&store, "PT", "NL").expect("both countries exist");

    for (name, metric) in &forward.metrics_comparison {
        let mirrored = backward
            .metrics_comparison
            .get(name)
            .expect("shared metric");
        assert_eq!(metric.difference, -mirrored.difference, "metric {name}");
    }
}

#[rstest]
#[case("XX", "NL")]
#[case("NL", "XX")]
fn comparison_requires_both_countries(#[case] source: &str, #[case] target: &str) {
    let store = MemoryStore::with_country(netherlands());
    let error = compare_countries(&store, source, target).expect_err("unknown code should fail");
    assert_eq!(
        error,
        CompareError::CountryNotFound {
            code: "XX".to_owned()
        }
    );
}
