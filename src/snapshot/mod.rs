//! Snapshot data model for one captured build session.
//!
//! Mirrors the JSON shape emitted by the bundler's debug hooks: flat,
//! denormalized collections plus session metadata. All optional-field
//! defaulting happens here at the deserialization boundary, so the query
//! layer downstream never re-checks for absence.

mod asset;
mod chunk;
mod meta;
mod module;
mod package;
mod plugin;

pub use asset::Asset;
pub use chunk::{Chunk, ChunkImport};
pub use meta::{PluginRef, SessionMeta};
pub use module::{HookCall, ImportRecord, Module, ModuleBuildMetrics, TransformCall};
pub use package::Package;
pub use plugin::{CallKind, PluginBuildMetrics, PluginCall};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One immutable capture of a completed build session.
///
/// Replaced wholesale on reload, never patched; every view downstream is a
/// read-only projection of this value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Session metadata, including the declared plugin list.
    #[serde(default)]
    pub meta: SessionMeta,
    /// Every module that participated in the build, in build order.
    #[serde(default)]
    pub modules: Vec<Module>,
    /// Total build duration in milliseconds.
    #[serde(default)]
    pub build_duration: f64,
    /// Emitted output files.
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Build-time module groupings.
    #[serde(default)]
    pub chunks: Vec<Chunk>,
    /// Resolved dependency packages.
    #[serde(default)]
    pub packages: Vec<Package>,
    /// Per-plugin recorded calls, keyed by plugin id. An absent map behaves
    /// exactly like a map with no entries.
    #[serde(default)]
    pub plugin_build_metrics: BTreeMap<u32, PluginBuildMetrics>,
}
