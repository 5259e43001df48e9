//! Core library entry for the `buildlens` CLI.
//!
//! The crate is layered store → derived views: `snapshot` holds the data
//! model, `store` the single stateful seam, and `session`/`resolver`/
//! `metrics` the pure derivations over it. Everything else (`ports`,
//! `adapters`, `loader`, `commands`) is the surrounding acquisition and
//! presentation machinery.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod filetype;
pub mod loader;
pub mod metrics;
pub mod ports;
pub mod resolver;
pub mod session;
pub mod snapshot;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution
/// fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command, cli.data.as_deref())
}
