//! HTTP client for the upstream data source.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Error type for upstream fetches. Only transport-level failures surface
/// here; whatever the upstream answers with is relayed as a success body.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A time-ranged data source queried per node.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Fetch data for `node` between `since` and `until` (inclusive
    /// ISO-8601 UTC bounds). Returns the raw response body.
    async fn fetch(
        &self,
        node: &str,
        since: &str,
        until: &str,
    ) -> Result<String, UpstreamError>;
}

/// Upstream backed by a fixed pre-configured HTTP(S) endpoint.
pub struct HttpUpstream {
    client: reqwest::Client,
    url: Url,
}

impl HttpUpstream {
    /// Create a client for the given endpoint with a bounded per-request
    /// timeout.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    fn query_url(&self, node: &str, since: &str, until: &str) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("node", node)
            .append_pair("since", since)
            .append_pair("until", until);
        url
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch(
        &self,
        node: &str,
        since: &str,
        until: &str,
    ) -> Result<String, UpstreamError> {
        let url = self.query_url(node, since, until);

        tracing::debug!(url = %url, "querying upstream");

        // The upstream's status code is deliberately not checked: its body
        // is relayed as-is, matching what existing clients expect.
        let body = self.client.get(url).send().await?.text().await?;
        Ok(body)
    }
}
