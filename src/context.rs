//! Service context bundling the port trait objects.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::transport::LiveTransport;
use crate::ports::filesystem::FileSystem;
use crate::ports::transport::SnapshotTransport;

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external boundary. Tests substitute
/// in-memory implementations by constructing the struct directly.
pub struct ServiceContext {
    /// Filesystem for reading snapshot files and writing exports.
    pub fs: Box<dyn FileSystem>,
    /// Transport for fetching snapshot payloads from a dev server.
    pub transport: Box<dyn SnapshotTransport>,
}

impl ServiceContext {
    /// Creates a live context with real adapters.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), transport: Box::new(LiveTransport::new()) }
    }
}
