//! Compare command implementation for the Farshore CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use farshore_scorer::{CountryComparison, compare_countries};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_DATABASE, CliError, open_seeded_store, print_json, resolve_database};

const ENV_COMPARE_SOURCE: &str = "FARSHORE_CMDS_COMPARE_SOURCE";
const ENV_COMPARE_TARGET: &str = "FARSHORE_CMDS_COMPARE_TARGET";

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compare two countries metric by metric, reporting the \
                 raw difference and percentage change for every numeric \
                 metric.",
    about = "Compare two countries"
)]
#[ortho_config(prefix = "FARSHORE")]
pub(crate) struct CompareArgs {
    /// Code of the country to compare from.
    #[arg(value_name = "source")]
    #[serde(default)]
    pub(crate) source: Option<String>,
    /// Code of the country to compare to.
    #[arg(value_name = "target")]
    #[serde(default)]
    pub(crate) target: Option<String>,
    /// Path to the country database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
}

impl CompareArgs {
    fn into_config(self) -> Result<CompareConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CompareConfig::try_from(merged)
    }
}

/// Resolved `compare` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompareConfig {
    /// Code of the country compared from.
    pub(crate) source: String,
    /// Code of the country compared to.
    pub(crate) target: String,
    /// Path to the country database.
    pub(crate) database: Utf8PathBuf,
}

impl TryFrom<CompareArgs> for CompareConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        let source = args.source.ok_or(CliError::MissingArgument {
            field: "source",
            env: ENV_COMPARE_SOURCE,
        })?;
        let target = args.target.ok_or(CliError::MissingArgument {
            field: "target",
            env: ENV_COMPARE_TARGET,
        })?;
        Ok(Self {
            source,
            target,
            database: resolve_database(args.database),
        })
    }
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let comparison = comparison_result(&config)?;
    print_json(&comparison)
}

pub(crate) fn comparison_result(config: &CompareConfig) -> Result<CountryComparison, CliError> {
    let store = open_seeded_store(&config.database)?;
    Ok(compare_countries(&store, &config.source, &config.target)?)
}
