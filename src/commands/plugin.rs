//! `buildlens plugin` command.

use crate::context::ServiceContext;
use crate::metrics;
use crate::resolver::PluginDetail;

/// Execute the `plugin` command.
///
/// Prints a plugin's recorded calls split by hook kind. A plugin that made
/// no tracked calls still resolves (possibly with its declared name only).
///
/// # Errors
///
/// Returns an error string if the data source cannot be loaded.
pub fn run(ctx: &ServiceContext, source: &str, plugin_id: u32) -> Result<(), String> {
    let store = super::load_store(ctx, source)?;
    match store.resolver() {
        Some(resolver) => print!("{}", format_detail(&resolver.plugin_detail(plugin_id))),
        None => println!("Plugin not found: {plugin_id}"),
    }
    Ok(())
}

/// Formats a plugin detail as a human-readable report.
#[must_use]
pub fn format_detail(detail: &PluginDetail<'_>) -> String {
    let mut lines = Vec::new();
    if detail.plugin_name.is_empty() {
        lines.push(format!("Plugin: #{}", detail.plugin_id));
    } else {
        lines.push(format!("Plugin: #{} {}", detail.plugin_id, detail.plugin_name));
    }

    if detail.calls.is_empty() {
        lines.push("No recorded calls.".to_string());
        lines.push(String::new());
        return lines.join("\n");
    }

    lines.push(format!("Recorded calls: {}", detail.calls.len()));
    lines.push(String::new());
    for (label, calls) in [
        ("Resolve", &detail.partition.resolve_ids),
        ("Load", &detail.partition.loads),
        ("Transform", &detail.partition.transforms),
    ] {
        lines.push(format!(
            "{label}: {} call(s), {} ms total",
            calls.len(),
            metrics::total_duration(calls),
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}
