//! Live transport adapter using `reqwest`.

use reqwest::Client;

use crate::ports::transport::{SnapshotTransport, TransportFuture};

/// Live transport that fetches snapshot payloads over HTTP.
pub struct LiveTransport {
    client: Client,
}

impl LiveTransport {
    /// Creates a new live transport.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotTransport for LiveTransport {
    fn fetch(&self, url: &str) -> TransportFuture<'_> {
        let url = url.to_string();
        Box::pin(async move {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("request to {url} failed: {e}").into()
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(format!("{url} returned status {}", status.as_u16()).into());
            }

            response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                format!("failed to read response body from {url}: {e}").into()
            })
        })
    }
}
