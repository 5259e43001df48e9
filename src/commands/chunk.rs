//! `buildlens chunk` command.

use crate::context::ServiceContext;
use crate::resolver::ChunkDetail;

/// Execute the `chunk` command.
///
/// Prints the chunk's module list, forward imports, and primary asset. An
/// unknown id is a valid "not found" outcome.
///
/// # Errors
///
/// Returns an error string if the data source cannot be loaded.
pub fn run(ctx: &ServiceContext, source: &str, chunk_id: u32) -> Result<(), String> {
    let store = super::load_store(ctx, source)?;
    match store.resolver().and_then(|resolver| resolver.chunk_info(chunk_id)) {
        Some(detail) => print!("{}", format_detail(&detail)),
        None => println!("Chunk not found: {chunk_id}"),
    }
    Ok(())
}

/// Formats a chunk detail as a human-readable report.
#[must_use]
pub fn format_detail(detail: &ChunkDetail<'_>) -> String {
    let mut lines = Vec::new();
    match &detail.chunk.name {
        Some(name) => lines.push(format!("Chunk: #{} {name}", detail.chunk.chunk_id)),
        None => lines.push(format!("Chunk: #{}", detail.chunk.chunk_id)),
    }

    match detail.asset {
        Some(asset) => lines.push(format!("Asset: {}", asset.filename)),
        None => lines.push("Asset: (none)".to_string()),
    }

    if !detail.chunk.imports.is_empty() {
        let ids: Vec<String> =
            detail.chunk.imports.iter().map(|i| format!("#{}", i.chunk_id)).collect();
        lines.push(format!("Imports: {}", ids.join(", ")));
    }

    lines.push("\nModules:".to_string());
    if detail.chunk.modules.is_empty() {
        lines.push("  (none)".to_string());
    }
    for module_id in &detail.chunk.modules {
        lines.push(format!("  {module_id}"));
    }

    lines.push(String::new());
    lines.join("\n")
}
