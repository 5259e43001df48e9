//! `buildlens module` command.

use crate::context::ServiceContext;
use crate::resolver::ModuleDetail;
use crate::snapshot::TransformCall;

/// Execute the `module` command.
///
/// Prints the module's chunks, assets, and per-hook call metrics. With
/// `transforms` set, prints only the transform calls. An unknown id is a
/// valid "not found" outcome, not an error.
///
/// # Errors
///
/// Returns an error string if the data source cannot be loaded.
pub fn run(ctx: &ServiceContext, source: &str, id: &str, transforms: bool) -> Result<(), String> {
    let store = super::load_store(ctx, source)?;
    let Some(resolver) = store.resolver() else {
        println!("Module not found: {id}");
        return Ok(());
    };

    if transforms {
        print!("{}", format_transforms(id, &resolver.module_transforms(id)));
        return Ok(());
    }

    match resolver.module_detail(id) {
        Some(detail) => print!("{}", format_detail(&detail)),
        None => println!("Module not found: {id}"),
    }
    Ok(())
}

/// Formats a module detail as a human-readable report.
#[must_use]
pub fn format_detail(detail: &ModuleDetail<'_>) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Module: {}", detail.id));
    lines.push(format!("Imports: {}", detail.imports.len()));
    lines.push(format!("Importers: {}", detail.importers.len()));

    lines.push("\nChunks:".to_string());
    if detail.chunks.is_empty() {
        lines.push("  (none)".to_string());
    }
    for chunk in &detail.chunks {
        match &chunk.name {
            Some(name) => lines.push(format!("  #{} {name}", chunk.chunk_id)),
            None => lines.push(format!("  #{}", chunk.chunk_id)),
        }
    }

    lines.push("\nAssets:".to_string());
    if detail.assets.is_empty() {
        lines.push("  (none)".to_string());
    }
    for asset in &detail.assets {
        lines.push(format!("  {} ({} bytes)", asset.filename, asset.size));
    }

    lines.push("\nResolve calls:".to_string());
    if detail.resolve_ids.is_empty() {
        lines.push("  (none)".to_string());
    }
    for call in &detail.resolve_ids {
        lines.push(format_hook_call(call.plugin_id, call.plugin_name.as_deref(), call.duration));
    }

    lines.push("\nLoad calls:".to_string());
    if detail.loads.is_empty() {
        lines.push("  (none)".to_string());
    }
    for call in &detail.loads {
        lines.push(format_hook_call(call.plugin_id, call.plugin_name.as_deref(), call.duration));
    }

    lines.push(format!("\nTransforms: {}", detail.build_metrics.transforms.len()));
    lines.push(String::new());
    lines.join("\n")
}

/// Formats a module's transform calls.
#[must_use]
pub fn format_transforms(id: &str, transforms: &[TransformCall]) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Transforms for {id}:"));
    if transforms.is_empty() {
        lines.push("  (none)".to_string());
    }
    for call in transforms {
        let name = call.plugin_name.as_deref().unwrap_or("?");
        lines.push(format!(
            "  plugin {} ({name}): {} ms, +{} -{}",
            call.plugin_id, call.duration, call.diff_added, call.diff_removed,
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

fn format_hook_call(plugin_id: u32, plugin_name: Option<&str>, duration: f64) -> String {
    let name = plugin_name.unwrap_or("?");
    format!("  plugin {plugin_id} ({name}): {duration} ms")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolver;
    use crate::snapshot::{Asset, Chunk, HookCall, Module, Snapshot};

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            modules: vec![Module {
                id: "src/a.ts".to_string(),
                build_metrics: crate::snapshot::ModuleBuildMetrics {
                    loads: vec![HookCall {
                        plugin_id: 1,
                        plugin_name: Some("loader".to_string()),
                        duration: 0.5,
                    }],
                    ..Default::default()
                },
                ..Module::default()
            }],
            chunks: vec![Chunk {
                chunk_id: 0,
                name: Some("main".to_string()),
                modules: vec!["src/a.ts".to_string()],
                imports: vec![],
            }],
            assets: vec![Asset { filename: "main.js".to_string(), size: 128, chunk_id: Some(0) }],
            ..Snapshot::default()
        }
    }

    #[test]
    fn format_detail_shows_relations_and_calls() {
        let snapshot = sample_snapshot();
        let resolver = Resolver::new(&snapshot);
        let report = format_detail(&resolver.module_detail("src/a.ts").unwrap());
        assert!(report.contains("Module: src/a.ts"));
        assert!(report.contains("#0 main"));
        assert!(report.contains("main.js (128 bytes)"));
        assert!(report.contains("plugin 1 (loader): 0.5 ms"));
    }

    #[test]
    fn format_transforms_handles_empty() {
        let report = format_transforms("src/a.ts", &[]);
        assert!(report.contains("Transforms for src/a.ts:"));
        assert!(report.contains("(none)"));
    }

    #[test]
    fn module_command_not_found_is_ok() {
        let dir = std::env::temp_dir().join("buildlens_cmd_module");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("snap.json");
        std::fs::write(&path, r#"{ "modules": [] }"#).unwrap();

        let ctx = ServiceContext::live();
        let result = run(&ctx, path.to_str().unwrap(), "missing.ts", false);
        assert!(result.is_ok());
    }
}
