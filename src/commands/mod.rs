//! Command dispatch and handlers.

pub mod asset;
pub mod chunk;
pub mod export;
pub mod module;
pub mod package;
pub mod plugin;
pub mod session;

use std::env;

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::loader;
use crate::store::SnapshotStore;

/// Data source used when neither `--data` nor `BUILDLENS_DATA` is given.
///
/// The well-known location a dev server serves its sample snapshot from.
const DEFAULT_DATA_SOURCE: &str = ".data/sample.json";

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if loading the data source or the selected
/// command handler fails.
pub fn dispatch(command: &Command, data: Option<&str>) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, data, &ctx)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    data: Option<&str>,
    ctx: &ServiceContext,
) -> Result<(), String> {
    let source = data_source(data);
    match command {
        Command::Session => session::run(ctx, &source),
        Command::Module { id, transforms } => module::run(ctx, &source, id, *transforms),
        Command::Asset { filename } => asset::run(ctx, &source, filename),
        Command::Chunk { chunk_id } => chunk::run(ctx, &source, *chunk_id),
        Command::Package { id } => package::run(ctx, &source, id),
        Command::Plugin { plugin_id } => plugin::run(ctx, &source, *plugin_id),
        Command::Export { out } => export::run(ctx, &source, out),
    }
}

/// Resolves the data source: `--data` flag, then `BUILDLENS_DATA`, then the
/// well-known default.
fn data_source(flag: Option<&str>) -> String {
    flag.map_or_else(
        || env::var("BUILDLENS_DATA").unwrap_or_else(|_| DEFAULT_DATA_SOURCE.to_string()),
        String::from,
    )
}

/// Loads the data source into a fresh store.
///
/// Shared by every handler: one immutable snapshot per invocation.
pub(crate) fn load_store(ctx: &ServiceContext, source: &str) -> Result<SnapshotStore, String> {
    let mut store = SnapshotStore::new();
    store.set_loading(true);
    let result = loader::load_source(ctx, source)
        .map_err(|e| format!("failed to load build data from {source}: {e}"));
    store.set_loading(false);
    store.load(result?);
    Ok(store)
}
