//! Module records and their per-hook build metrics.

use serde::{Deserialize, Serialize};

/// A source unit participating in the build's import graph.
///
/// `id` is unique within a snapshot, typically a file path. Import edges and
/// build metrics are optional in the wire format and default to empty here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Unique module id.
    pub id: String,
    /// Outgoing import edges declared by this module.
    #[serde(default)]
    pub imports: Vec<ImportRecord>,
    /// Ids of modules that import this one.
    #[serde(default)]
    pub importers: Vec<String>,
    /// Per-plugin-call metrics recorded while building this module.
    #[serde(default)]
    pub build_metrics: ModuleBuildMetrics,
}

/// One outgoing import edge of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// Id of the imported module.
    pub module_id: String,
    /// Import kind as reported by the bundler (e.g. static vs dynamic).
    #[serde(default)]
    pub kind: Option<String>,
}

/// Per-hook call records for a single module, in recording order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleBuildMetrics {
    /// Resolve-id hook calls.
    #[serde(default)]
    pub resolve_ids: Vec<HookCall>,
    /// Load hook calls.
    #[serde(default)]
    pub loads: Vec<HookCall>,
    /// Transform hook calls.
    #[serde(default)]
    pub transforms: Vec<TransformCall>,
}

/// A recorded resolve or load hook invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookCall {
    /// Id of the plugin whose hook ran.
    pub plugin_id: u32,
    /// Plugin name, when the bundler recorded it alongside the id.
    #[serde(default)]
    pub plugin_name: Option<String>,
    /// Call duration in milliseconds.
    #[serde(default)]
    pub duration: f64,
}

/// A recorded transform hook invocation.
///
/// Diff counters are absent on the wire when the transform made no content
/// change; they default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformCall {
    /// Id of the plugin whose hook ran.
    pub plugin_id: u32,
    /// Plugin name, when the bundler recorded it alongside the id.
    #[serde(default)]
    pub plugin_name: Option<String>,
    /// Call duration in milliseconds.
    #[serde(default)]
    pub duration: f64,
    /// Lines added by the transform.
    #[serde(default)]
    pub diff_added: u64,
    /// Lines removed by the transform.
    #[serde(default)]
    pub diff_removed: u64,
}
