//! Transport port for fetching snapshot payloads over HTTP.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`SnapshotTransport`] to keep the trait
/// dyn-compatible.
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Fetches a snapshot payload from a URL.
///
/// The body may be raw snapshot JSON or the `window.__data = {...};`
/// delivery payload a dev server emits; the loader accepts either.
pub trait SnapshotTransport: Send + Sync {
    /// Fetches the response body at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (network, non-success status).
    fn fetch(&self, url: &str) -> TransportFuture<'_>;
}
