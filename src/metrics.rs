//! Plugin call partitioning for presentation.

use crate::snapshot::{CallKind, PluginCall};

/// A plugin's recorded calls split by hook kind, original order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallPartition<'a> {
    /// Resolve-id hook calls.
    pub resolve_ids: Vec<&'a PluginCall>,
    /// Load hook calls.
    pub loads: Vec<&'a PluginCall>,
    /// Transform hook calls.
    pub transforms: Vec<&'a PluginCall>,
}

impl CallPartition<'_> {
    /// Total number of partitioned calls.
    ///
    /// Equals the input length when every call had a recognized kind;
    /// unrecognized kinds are dropped and do not count.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.resolve_ids.len() + self.loads.len() + self.transforms.len()
    }
}

/// Partitions a call sequence into the three hook-kind subsequences.
///
/// Every call lands in at most one partition; calls whose kind this version
/// does not recognize are dropped rather than erred, so snapshots from newer
/// bundlers still partition.
#[must_use]
pub fn partition_calls(calls: &[PluginCall]) -> CallPartition<'_> {
    let mut partition = CallPartition::default();
    for call in calls {
        match call.kind {
            CallKind::Resolve => partition.resolve_ids.push(call),
            CallKind::Load => partition.loads.push(call),
            CallKind::Transform => partition.transforms.push(call),
            CallKind::Other => {}
        }
    }
    partition
}

/// Sums the durations of one partition's calls, in milliseconds.
#[must_use]
pub fn total_duration(calls: &[&PluginCall]) -> f64 {
    calls.iter().map(|call| call.duration).sum()
}
