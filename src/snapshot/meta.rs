//! Session metadata types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the build session that produced a snapshot.
///
/// Everything here is passthrough from the bundler; only `plugins` is
/// consulted by the query layer (for plugin-name fallback lookups).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionMeta {
    /// Plugins registered for the session, whether or not they made calls.
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
    /// Working directory of the build, when reported.
    #[serde(default)]
    pub cwd: Option<String>,
    /// Version string of the bundler that produced the snapshot.
    #[serde(default)]
    pub bundler_version: Option<String>,
    /// When the session started, when reported.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
}

/// A plugin declared in the session metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRef {
    /// Numeric id the bundler assigned to the plugin for this session.
    pub plugin_id: u32,
    /// Human-readable plugin name.
    pub name: String,
}
