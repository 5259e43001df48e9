//! Asset records: final emitted output files.

use serde::{Deserialize, Serialize};

/// A final emitted output file, optionally traced back to the chunk that
/// produced it.
///
/// `chunk_id` stays an `Option` rather than defaulting: absence means the
/// asset did not originate from a chunk (e.g. copied public files), which is
/// different from referencing chunk 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique output filename within the snapshot.
    pub filename: String,
    /// Emitted size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Id of the chunk that produced this asset, if any.
    #[serde(default)]
    pub chunk_id: Option<u32>,
}
