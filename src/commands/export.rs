//! `buildlens export` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::loader;

/// Execute the `export` command.
///
/// Loads the data source, normalizes it through the snapshot model, and
/// writes it back out as the `window.__data = {...};` delivery payload a
/// presentation frontend consumes.
///
/// # Errors
///
/// Returns an error string if loading, serialization, or the write fails.
pub fn run(ctx: &ServiceContext, source: &str, out: &Path) -> Result<(), String> {
    let snapshot = loader::load_source(ctx, source)
        .map_err(|e| format!("failed to load build data from {source}: {e}"))?;

    let json = serde_json::to_string(&snapshot)
        .map_err(|e| format!("failed to serialize snapshot: {e}"))?;
    let payload = loader::wrap_payload(&json);

    ctx.fs
        .write(out, &payload)
        .map_err(|e| format!("failed to write payload to {}: {e}", out.display()))?;

    println!("Exported {} module(s) to {}.", snapshot.modules.len(), out.display());
    Ok(())
}
