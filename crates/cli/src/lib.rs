//! Command-line front end for the player search pipeline.

pub mod args;
pub mod commands;
pub mod table;

pub use args::Cli;
pub use commands::dispatch;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str =
    "playersearch_cli=info,playersearch_store=info,playersearch_lookup=info";
