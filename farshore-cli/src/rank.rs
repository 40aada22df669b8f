//! Rank command implementation for the Farshore CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use farshore_core::{PreferenceWeights, ScoreResult};
use farshore_scorer::rank_countries;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_DATABASE, CliError, open_seeded_store, print_json, resolve_database};

const ENV_RANK_CODES: &str = "FARSHORE_CMDS_RANK_CODES";

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank candidate countries by combining their stored \
                 metrics with preference weights. Weights are 1-10; \
                 factors left unset fall back to their documented \
                 defaults.",
    about = "Rank candidate countries"
)]
#[ortho_config(prefix = "FARSHORE")]
pub(crate) struct RankArgs {
    /// Country codes to rank.
    #[arg(value_name = "code", num_args = 1..)]
    #[serde(default)]
    pub(crate) codes: Vec<String>,
    /// Path to the country database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Weight for economic opportunities (1-10).
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) economic_opportunities: Option<f64>,
    /// Weight for quality of life (1-10).
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) quality_of_life: Option<f64>,
    /// Weight for safety and security (1-10).
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) safety_and_security: Option<f64>,
    /// Weight for healthcare quality (1-10).
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) healthcare_quality: Option<f64>,
    /// Weight for climate suitability (1-10).
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) climate_suitability: Option<f64>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Country codes to rank.
    pub(crate) codes: Vec<String>,
    /// Path to the country database.
    pub(crate) database: Utf8PathBuf,
    /// Preference weights assembled from the weight flags.
    pub(crate) preferences: PreferenceWeights,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        if args.codes.is_empty() {
            return Err(CliError::MissingArgument {
                field: "codes",
                env: ENV_RANK_CODES,
            });
        }
        Ok(Self {
            codes: args.codes,
            database: resolve_database(args.database),
            preferences: PreferenceWeights {
                economic_opportunities: args.economic_opportunities,
                quality_of_life: args.quality_of_life,
                safety_and_security: args.safety_and_security,
                healthcare_quality: args.healthcare_quality,
                climate_suitability: args.climate_suitability,
            },
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let results = rank_results(&config)?;
    print_json(&results)
}

pub(crate) fn rank_results(config: &RankConfig) -> Result<Vec<ScoreResult>, CliError> {
    let store = open_seeded_store(&config.database)?;
    Ok(rank_countries(&store, &config.codes, &config.preferences)?)
}
