//! Per-plugin recorded call metrics.

use serde::{Deserialize, Serialize};

/// Recorded calls for one plugin across the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginBuildMetrics {
    /// Numeric id the bundler assigned to the plugin.
    pub plugin_id: u32,
    /// Human-readable plugin name.
    pub plugin_name: String,
    /// Every recorded hook invocation, in recording order.
    #[serde(default)]
    pub calls: Vec<PluginCall>,
}

/// One timed plugin hook invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginCall {
    /// Which hook ran.
    #[serde(rename = "type")]
    pub kind: CallKind,
    /// Module the hook ran against, when recorded.
    #[serde(default)]
    pub module_id: Option<String>,
    /// Call duration in milliseconds.
    #[serde(default)]
    pub duration: f64,
}

/// The hook a plugin call invoked.
///
/// Kinds this version does not know about deserialize to [`CallKind::Other`]
/// instead of failing; the splitter drops them from its partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallKind {
    /// A resolve-id hook call.
    Resolve,
    /// A load hook call.
    Load,
    /// A transform hook call.
    Transform,
    /// A kind not recognized by this version.
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_kind_parses_known_kinds() {
        let call: PluginCall =
            serde_json::from_str(r#"{ "type": "resolve", "duration": 0.2 }"#).unwrap();
        assert_eq!(call.kind, CallKind::Resolve);
    }

    #[test]
    fn call_kind_tolerates_unknown_kinds() {
        let call: PluginCall = serde_json::from_str(r#"{ "type": "banner" }"#).unwrap();
        assert_eq!(call.kind, CallKind::Other);
    }

    #[test]
    fn plugin_metrics_default_calls() {
        let metrics: PluginBuildMetrics =
            serde_json::from_str(r#"{ "plugin_id": 1, "plugin_name": "alias" }"#).unwrap();
        assert!(metrics.calls.is_empty());
    }
}
