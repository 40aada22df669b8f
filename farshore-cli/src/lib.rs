//! Command-line interface for the Farshore relocation engine.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use farshore_core::{CountryStore, SqliteCountryStore};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

mod compare;
mod error;
mod rank;

pub use error::CliError;

pub(crate) const ARG_DATABASE: &str = "database";
pub(crate) const DEFAULT_DATABASE: &str = "farshore.db";

/// Run the Farshore CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering,
/// or the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
        Command::Compare(args) => compare::run_compare(args),
        Command::Countries(args) => run_countries(args),
        Command::Refresh(args) => run_refresh(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "farshore",
    about = "Score and rank relocation candidate countries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate countries against preference weights.
    Rank(rank::RankArgs),
    /// Compare two countries metric by metric.
    Compare(compare::CompareArgs),
    /// List the stored country catalogue.
    Countries(CountriesArgs),
    /// Seed or refresh the country database from the built-in catalogue.
    Refresh(RefreshArgs),
}

/// CLI arguments for the `countries` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the stored country catalogue")]
#[ortho_config(prefix = "FARSHORE")]
struct CountriesArgs {
    /// Path to the country database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    database: Option<Utf8PathBuf>,
}

/// CLI arguments for the `refresh` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Seed or refresh the country database")]
#[ortho_config(prefix = "FARSHORE")]
struct RefreshArgs {
    /// Path to the country database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    database: Option<Utf8PathBuf>,
}

fn run_countries(args: CountriesArgs) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let database = resolve_database(merged.database);
    let store = open_seeded_store(&database)?;
    print_json(&store.countries())
}

fn run_refresh(args: RefreshArgs) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let database = resolve_database(merged.database);
    farshore_data::refresh_database(&database)?;
    Ok(())
}

pub(crate) fn resolve_database(database: Option<Utf8PathBuf>) -> Utf8PathBuf {
    database.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE))
}

/// Open the store, seeding the database from the built-in catalogue on
/// first use.
pub(crate) fn open_seeded_store(database: &Utf8Path) -> Result<SqliteCountryStore, CliError> {
    farshore_data::initialise_database(database)?;
    Ok(SqliteCountryStore::open(database.as_std_path())?)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests;
