//! `buildlens session` command.

use crate::context::ServiceContext;
use crate::session::SessionSummary;

/// Execute the `session` command.
///
/// Prints session metadata, a table of all modules with their file type and
/// edge counts, and the total build duration.
///
/// # Errors
///
/// Returns an error string if the data source cannot be loaded.
pub fn run(ctx: &ServiceContext, source: &str) -> Result<(), String> {
    let store = super::load_store(ctx, source)?;
    let summary = store.summarize().map_err(|e| e.to_string())?;
    print!("{}", format_summary(&summary));
    Ok(())
}

/// Formats a session summary as a human-readable report.
#[must_use]
pub fn format_summary(summary: &SessionSummary<'_>) -> String {
    let mut lines = Vec::new();

    if let Some(cwd) = &summary.meta.cwd {
        lines.push(format!("Working dir: {cwd}"));
    }
    if let Some(version) = &summary.meta.bundler_version {
        lines.push(format!("Bundler: {version}"));
    }
    if let Some(started_at) = summary.meta.started_at {
        lines.push(format!("Started: {}", started_at.to_rfc3339()));
    }
    lines.push(format!("Plugins: {}", summary.meta.plugins.len()));
    lines.push(String::new());

    if summary.modules.is_empty() {
        lines.push("No modules in snapshot.".to_string());
    } else {
        let rows: Vec<(String, &'static str, String, String)> = summary
            .modules
            .iter()
            .map(|m| {
                (
                    m.id.to_string(),
                    m.file_type.name(),
                    m.imports.len().to_string(),
                    m.importers.len().to_string(),
                )
            })
            .collect();

        let id_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(6).max(6);
        let type_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(4).max(4);

        lines.push(format!(
            "{:<id_width$}  {:<type_width$}  {:>7}  {:>9}",
            "MODULE", "TYPE", "IMPORTS", "IMPORTERS",
        ));
        lines.push(format!("{:-<id_width$}  {:-<type_width$}  {:->7}  {:->9}", "", "", "", ""));
        for (id, file_type, imports, importers) in &rows {
            lines.push(format!(
                "{id:<id_width$}  {file_type:<type_width$}  {imports:>7}  {importers:>9}",
            ));
        }
        lines.push(String::new());
        lines.push(format!("{} module(s) total.", rows.len()));
    }

    lines.push(format!("Build completed in {} ms.", summary.build_duration));
    lines.push(String::new());
    lines.join("\n")
}
