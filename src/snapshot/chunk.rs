//! Chunk records: build-time module groupings.

use serde::{Deserialize, Serialize};

/// A build-time grouping of modules slated to emit together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Unique chunk id within the snapshot.
    pub chunk_id: u32,
    /// Chunk name, when the bundler assigned one.
    #[serde(default)]
    pub name: Option<String>,
    /// Ids of the modules this chunk contains.
    #[serde(default)]
    pub modules: Vec<String>,
    /// Chunks this chunk imports (forward edges only; reverse edges are
    /// derived by the resolver).
    #[serde(default)]
    pub imports: Vec<ChunkImport>,
}

/// A forward chunk-to-chunk import edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkImport {
    /// Id of the imported chunk.
    pub chunk_id: u32,
}
