//! `buildlens asset` command.

use crate::context::ServiceContext;
use crate::resolver::AssetDetail;

/// Execute the `asset` command.
///
/// Prints the asset with its owning chunk and the assets of importing and
/// imported chunks. An unknown filename is a valid "not found" outcome.
///
/// # Errors
///
/// Returns an error string if the data source cannot be loaded.
pub fn run(ctx: &ServiceContext, source: &str, filename: &str) -> Result<(), String> {
    let store = super::load_store(ctx, source)?;
    match store.resolver().and_then(|resolver| resolver.asset_detail(filename)) {
        Some(detail) => print!("{}", format_detail(&detail)),
        None => println!("Asset not found: {filename}"),
    }
    Ok(())
}

/// Formats an asset detail as a human-readable report.
#[must_use]
pub fn format_detail(detail: &AssetDetail<'_>) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Asset: {}", detail.asset.filename));
    lines.push(format!("Size: {} bytes", detail.asset.size));

    match detail.chunks.first() {
        Some(chunk) => lines.push(format!("Chunk: #{}", chunk.chunk_id)),
        None => lines.push("Chunk: (none)".to_string()),
    }

    lines.push("\nImported by:".to_string());
    if detail.importers.is_empty() {
        lines.push("  (none)".to_string());
    }
    for importer in &detail.importers {
        lines.push(format!("  {}", importer.filename));
    }

    lines.push("\nImports:".to_string());
    if detail.imports.is_empty() {
        lines.push("  (none)".to_string());
    }
    for import in &detail.imports {
        lines.push(format!("  {}", import.filename));
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolver;
    use crate::snapshot::{Asset, Chunk, ChunkImport, Snapshot};

    #[test]
    fn format_detail_lists_relations() {
        let snapshot = Snapshot {
            chunks: vec![
                Chunk {
                    chunk_id: 0,
                    name: None,
                    modules: vec![],
                    imports: vec![ChunkImport { chunk_id: 1 }],
                },
                Chunk { chunk_id: 1, name: None, modules: vec![], imports: vec![] },
            ],
            assets: vec![
                Asset { filename: "entry.js".to_string(), size: 10, chunk_id: Some(0) },
                Asset { filename: "shared.js".to_string(), size: 20, chunk_id: Some(1) },
            ],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(&snapshot);

        let entry = format_detail(&resolver.asset_detail("entry.js").unwrap());
        assert!(entry.contains("Asset: entry.js"));
        assert!(entry.contains("Chunk: #0"));
        assert!(entry.contains("shared.js"));

        let shared = format_detail(&resolver.asset_detail("shared.js").unwrap());
        assert!(shared.contains("Imported by:\n  entry.js"));
    }

    #[test]
    fn format_detail_chunkless_asset() {
        let snapshot = Snapshot {
            assets: vec![Asset { filename: "favicon.ico".to_string(), size: 0, chunk_id: None }],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(&snapshot);
        let report = format_detail(&resolver.asset_detail("favicon.ico").unwrap());
        assert!(report.contains("Chunk: (none)"));
    }

    #[test]
    fn asset_command_not_found_is_ok() {
        let dir = std::env::temp_dir().join("buildlens_cmd_asset");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("snap.json");
        std::fs::write(&path, r#"{ "assets": [] }"#).unwrap();

        let ctx = ServiceContext::live();
        assert!(run(&ctx, path.to_str().unwrap(), "missing.js").is_ok());
    }
}
