//! Snapshot acquisition: parse, unwrap, and load from file or dev server.
//!
//! Two wire forms are accepted: raw snapshot JSON, and the JavaScript
//! delivery payload `window.__data = {...};` that a dev server route emits
//! for browser consumption. The loader unwraps the latter before parsing,
//! and the export job re-emits it.

use std::path::Path;

use thiserror::Error;

use crate::context::ServiceContext;
use crate::snapshot::Snapshot;

/// Variable assignment that opens the JavaScript delivery payload.
const PAYLOAD_PREFIX: &str = "window.__data";

/// An error while acquiring or parsing a snapshot.
///
/// These stay at the loader boundary: once a snapshot is installed, every
/// derivation below it is infallible apart from
/// [`crate::session::NoDataError`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data source file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Underlying filesystem error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The data source could not be fetched over HTTP.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// URL that failed to fetch.
        url: String,
        /// Underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The payload was not valid snapshot JSON.
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a snapshot from either wire form.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] when the (unwrapped) text is not valid
/// snapshot JSON.
pub fn parse_snapshot(text: &str) -> Result<Snapshot, LoadError> {
    let snapshot = serde_json::from_str(unwrap_payload(text))?;
    Ok(snapshot)
}

/// Wraps snapshot JSON into the JavaScript delivery payload.
#[must_use]
pub fn wrap_payload(json: &str) -> String {
    format!("{PAYLOAD_PREFIX} = {json};\n")
}

/// Strips the `window.__data = ...;` wrapper, if present.
///
/// Anything that does not open with the assignment passes through untouched
/// and is treated as raw JSON.
fn unwrap_payload(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with(PAYLOAD_PREFIX) {
        return trimmed;
    }
    match trimmed.split_once('=') {
        Some((_, value)) => value.trim().trim_end_matches(';').trim_end(),
        None => trimmed,
    }
}

/// Loads a snapshot from a local file through the filesystem port.
///
/// # Errors
///
/// Returns [`LoadError::Read`] when the file cannot be read and
/// [`LoadError::Parse`] when its contents are not a snapshot.
pub fn load_path(ctx: &ServiceContext, path: &Path) -> Result<Snapshot, LoadError> {
    let text = ctx
        .fs
        .read_to_string(path)
        .map_err(|source| LoadError::Read { path: path.display().to_string(), source })?;
    parse_snapshot(&text)
}

/// Fetches a snapshot from a dev-server URL through the transport port.
///
/// # Errors
///
/// Returns [`LoadError::Fetch`] when the request fails and
/// [`LoadError::Parse`] when the body is not a snapshot.
pub async fn fetch_url(ctx: &ServiceContext, url: &str) -> Result<Snapshot, LoadError> {
    let body = ctx
        .transport
        .fetch(url)
        .await
        .map_err(|source| LoadError::Fetch { url: url.to_string(), source })?;
    parse_snapshot(&body)
}

/// Loads a snapshot from a data source: an `http(s)://` URL goes through the
/// transport port, anything else is a local path.
///
/// Bridges the async transport with a current-thread runtime so command
/// handlers stay synchronous.
///
/// # Errors
///
/// Propagates [`LoadError`] from the underlying read/fetch/parse.
pub fn load_source(ctx: &ServiceContext, source: &str) -> Result<Snapshot, LoadError> {
    tracing::debug!(source, "loading snapshot");
    let snapshot = if source.starts_with("http://") || source.starts_with("https://") {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LoadError::Fetch { url: source.to_string(), source: Box::new(e) })?;
        runtime.block_on(fetch_url(ctx, source))?
    } else {
        load_path(ctx, Path::new(source))?
    };
    tracing::debug!(
        modules = snapshot.modules.len(),
        chunks = snapshot.chunks.len(),
        assets = snapshot.assets.len(),
        packages = snapshot.packages.len(),
        "snapshot parsed"
    );
    Ok(snapshot)
}
