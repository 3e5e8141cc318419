use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use playersearch_core::search::{DEFAULT_EXPORT_MAX, DEFAULT_SEARCH_MAX};
use playersearch_lookup::http::{DEFAULT_LOOKUP_TIMEOUT_SECS, DEFAULT_LOOKUP_URL};
use playersearch_store::config::DEFAULT_STORAGE_ROOT;

#[derive(Debug, Parser)]
#[command(
    name = "playersearch",
    version,
    about = "Search chess players by name and export the results as CSV"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Base URL of the upstream player-search service
    #[arg(long, global = true, env = "LOOKUP_URL", default_value = DEFAULT_LOOKUP_URL)]
    pub lookup_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, global = true, env = "LOOKUP_TIMEOUT_SECS", default_value_t = DEFAULT_LOOKUP_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Directory saved CSV files are written to and read from
    #[arg(long, global = true, env = "DATA_DIR", default_value = DEFAULT_STORAGE_ROOT)]
    pub data_dir: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print matching players as a table
    Search(SearchArgs),
    /// Encode matching players as CSV, print it, and save it
    Export(ExportArgs),
    /// List saved CSV files
    Files,
    /// Print a saved CSV file
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Player name (or part of it) to search for
    pub name: String,

    /// Maximum number of players to return
    #[arg(long, short, default_value_t = DEFAULT_SEARCH_MAX)]
    pub max: usize,

    /// Also print every record in full
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Player name (or part of it) to search for
    pub name: String,

    /// Maximum number of players to return
    #[arg(long, short, default_value_t = DEFAULT_EXPORT_MAX)]
    pub max: usize,

    /// Print the CSV without saving it
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Filename as listed by `files`, e.g. `results_Smith.csv`
    pub file: String,
}
