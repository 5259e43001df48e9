//! Session view: the top-level summary derived from a snapshot.

use thiserror::Error;

use crate::filetype::FileType;
use crate::snapshot::{ImportRecord, ModuleBuildMetrics, SessionMeta, Snapshot};

/// No snapshot is loaded.
///
/// Raised only by the top-level session summary; every other lookup degrades
/// to `None`/empty instead so callers can render "not found" states directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no build data loaded")]
pub struct NoDataError;

/// Top-level summary of a build session.
///
/// A pure projection of the snapshot it borrows from: summarizing the same
/// snapshot reference twice yields an equal value, so callers may cache the
/// result keyed on [`crate::store::SnapshotStore::generation`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary<'a> {
    /// Session metadata, passed through unchanged.
    pub meta: &'a SessionMeta,
    /// One entry per module, in snapshot order.
    pub modules: Vec<ModuleListItem<'a>>,
    /// Total build duration in milliseconds.
    pub build_duration: f64,
}

/// One module row of the session summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleListItem<'a> {
    /// Module id.
    pub id: &'a str,
    /// Classification derived from the id suffix.
    pub file_type: FileType,
    /// Outgoing import edges.
    pub imports: &'a [ImportRecord],
    /// Ids of importing modules.
    pub importers: &'a [String],
    /// Raw per-hook metrics (already defaulted at the deserialization
    /// boundary, so an unmetered module shows the empty record).
    pub build_metrics: &'a ModuleBuildMetrics,
}

/// Derives the session summary from a snapshot.
#[must_use]
pub fn summarize(snapshot: &Snapshot) -> SessionSummary<'_> {
    let modules = snapshot
        .modules
        .iter()
        .map(|module| ModuleListItem {
            id: &module.id,
            file_type: FileType::from_module_id(&module.id),
            imports: &module.imports,
            importers: &module.importers,
            build_metrics: &module.build_metrics,
        })
        .collect();

    SessionSummary { meta: &snapshot.meta, modules, build_duration: snapshot.build_duration }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Module;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            modules: vec![
                Module { id: "src/a.ts".to_string(), ..Module::default() },
                Module {
                    id: "src/b.vue".to_string(),
                    importers: vec!["src/a.ts".to_string()],
                    ..Module::default()
                },
            ],
            build_duration: 412.5,
            ..Snapshot::default()
        }
    }

    #[test]
    fn summary_lists_every_module_in_order() {
        let snapshot = sample_snapshot();
        let summary = summarize(&snapshot);
        let ids: Vec<&str> = summary.modules.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["src/a.ts", "src/b.vue"]);
    }

    #[test]
    fn summary_classifies_and_passes_through() {
        let snapshot = sample_snapshot();
        let summary = summarize(&snapshot);
        assert_eq!(summary.modules[0].file_type, FileType::TypeScript);
        assert_eq!(summary.modules[1].file_type, FileType::Vue);
        assert_eq!(summary.modules[1].importers, ["src/a.ts".to_string()]);
        assert_eq!(summary.build_duration, 412.5);
    }

    #[test]
    fn summary_is_pure() {
        let snapshot = sample_snapshot();
        assert_eq!(summarize(&snapshot), summarize(&snapshot));
    }

    #[test]
    fn unmetered_module_shows_empty_metrics() {
        let snapshot = sample_snapshot();
        let summary = summarize(&snapshot);
        assert_eq!(summary.modules[0].build_metrics, &ModuleBuildMetrics::default());
    }
}
