//! Snapshot store: the single stateful seam of the crate.
//!
//! Holds at most one immutable snapshot behind an `Arc`. Mutation granularity
//! is the whole snapshot: `load` replaces, `clear` drops, nothing patches.
//! Derived views are pure functions of the current value; the generation
//! counter tells observers when cached derivations are stale.

use std::sync::Arc;

use crate::resolver::Resolver;
use crate::session::{self, NoDataError, SessionSummary};
use crate::snapshot::Snapshot;

/// Owns the currently loaded snapshot, if any.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: Option<Arc<Snapshot>>,
    loading: bool,
    generation: u64,
}

impl SnapshotStore {
    /// Creates an empty store with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new snapshot, replacing any previous one.
    pub fn load(&mut self, snapshot: Snapshot) {
        tracing::debug!(
            modules = snapshot.modules.len(),
            chunks = snapshot.chunks.len(),
            assets = snapshot.assets.len(),
            "snapshot installed"
        );
        self.current = Some(Arc::new(snapshot));
        self.generation += 1;
    }

    /// Drops the current snapshot, if any.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            self.generation += 1;
        }
    }

    /// The active snapshot, or `None` when nothing is loaded.
    #[must_use]
    pub fn current(&self) -> Option<&Arc<Snapshot>> {
        self.current.as_ref()
    }

    /// Whether an external load is in flight.
    ///
    /// The flag is owned by the external loader; the store only carries it
    /// for observers.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sets the loading flag (called by the external loader, not by the store).
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Monotonic counter bumped whenever the snapshot reference changes.
    ///
    /// Derivations cached against an older generation are stale and must be
    /// recomputed; there is no partial invalidation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Derives the session summary.
    ///
    /// # Errors
    ///
    /// Returns [`NoDataError`] when no snapshot is loaded.
    pub fn summarize(&self) -> Result<SessionSummary<'_>, NoDataError> {
        self.current.as_deref().map(session::summarize).ok_or(NoDataError)
    }

    /// A resolver over the current snapshot, or `None` when nothing is loaded.
    #[must_use]
    pub fn resolver(&self) -> Option<Resolver<'_>> {
        self.current.as_deref().map(Resolver::new)
    }
}
