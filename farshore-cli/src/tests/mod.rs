//! Unit coverage for CLI argument handling and command execution.

use camino::Utf8PathBuf;
use clap::Parser;
use rstest::rstest;
use tempfile::TempDir;

use crate::compare::{CompareArgs, CompareConfig, comparison_result};
use crate::rank::{RankArgs, RankConfig, rank_results};
use crate::{Cli, CliError, Command, DEFAULT_DATABASE, open_seeded_store};

fn temp_database() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path =
        Utf8PathBuf::from_path_buf(dir.path().join("countries.db")).expect("utf8 database path");
    (dir, path)
}

#[rstest]
fn rank_config_defaults_the_database_path() {
    let args = RankArgs {
        codes: vec!["NL".to_owned()],
        ..Default::default()
    };
    let config = RankConfig::try_from(args).expect("codes are present");
    assert_eq!(config.database, Utf8PathBuf::from(DEFAULT_DATABASE));
    assert_eq!(config.preferences.economic_opportunities, None);
}

#[rstest]
fn rank_config_requires_codes() {
    let error = RankConfig::try_from(RankArgs::default()).expect_err("no codes should fail");
    assert!(matches!(
        error,
        CliError::MissingArgument { field: "codes", .. }
    ));
}

#[rstest]
fn weight_flags_map_to_preferences() {
    let args = RankArgs {
        codes: vec!["NL".to_owned()],
        economic_opportunities: Some(9.0),
        climate_suitability: Some(2.0),
        ..Default::default()
    };
    let config = RankConfig::try_from(args).expect("codes are present");
    assert_eq!(config.preferences.economic_opportunities, Some(9.0));
    assert_eq!(config.preferences.climate_suitability, Some(2.0));
    assert_eq!(config.preferences.quality_of_life, None);
}

#[rstest]
fn cli_parses_the_rank_subcommand() {
    let cli = Cli::try_parse_from([
        "farshore",
        "rank",
        "NL",
        "PT",
        "--economic-opportunities",
        "9",
    ])
    .expect("arguments are valid");
    match cli.command {
        Command::Rank(args) => {
            assert_eq!(args.codes, ["NL", "PT"]);
            assert_eq!(args.economic_opportunities, Some(9.0));
        }
        other => panic!("expected rank command, got {other:?}"),
    }
}

#[rstest]
fn cli_parses_the_compare_subcommand() {
    let cli = Cli::try_parse_from(["farshore", "compare", "NL", "CH"])
        .expect("arguments are valid");
    match cli.command {
        Command::Compare(args) => {
            assert_eq!(args.source.as_deref(), Some("NL"));
            assert_eq!(args.target.as_deref(), Some("CH"));
        }
        other => panic!("expected compare command, got {other:?}"),
    }
}

#[rstest]
fn compare_config_requires_both_codes() {
    let args = CompareArgs {
        source: Some("NL".to_owned()),
        ..Default::default()
    };
    let error = CompareConfig::try_from(args).expect_err("missing target should fail");
    assert!(matches!(
        error,
        CliError::MissingArgument { field: "target", .. }
    ));
}

#[rstest]
fn rank_results_seed_and_rank_the_catalogue() {
    let (_dir, path) = temp_database();
    let config = RankConfig {
        codes: vec!["NL".to_owned(), "PT".to_owned(), "XX".to_owned()],
        database: path,
        preferences: farshore_core::PreferenceWeights::default(),
    };
    let results = rank_results(&config).expect("ranking succeeds");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].country.code, "NL");
    assert!(results[0].score >= results[1].score);
}

#[rstest]
fn comparison_result_reports_metric_differences() {
    let (_dir, path) = temp_database();
    let config = CompareConfig {
        source: "NL".to_owned(),
        target: "CH".to_owned(),
        database: path,
    };
    let comparison = comparison_result(&config).expect("comparison succeeds");
    let gdp = comparison
        .metrics_comparison
        .get("gdpPerCapita")
        .expect("gdp metric present");
    assert_eq!(gdp.difference, 29_536.0);
}

#[rstest]
fn open_seeded_store_loads_the_full_catalogue() {
    let (_dir, path) = temp_database();
    let store = open_seeded_store(&path).expect("seed and open store");
    assert_eq!(store.len(), 15);
}
