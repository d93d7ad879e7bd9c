//! HTTP client for the state registry listing.

use super::{RawRecord, RegistryResponse};
use async_trait::async_trait;
use reestr_config::RegistryConfig;
use reestr_core::{ReestrError, ReestrResult};
use reqwest::Client;
use tracing::debug;

/// Source of raw registry records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Fetches the complete current listing, in upstream order.
    ///
    /// # Errors
    ///
    /// `UpstreamUnavailable` on transport failure, timeout or a non-success
    /// status; `UpstreamMalformedResponse` when the body is not a listing.
    async fn fetch_records(&self) -> ReestrResult<Vec<RawRecord>>;
}

/// Registry client over HTTP/JSON.
pub struct HttpRegistryClient {
    client: Client,
    url: String,
}

impl HttpRegistryClient {
    /// Creates a client for the registry described by `config`.
    pub fn new(config: &RegistryConfig) -> ReestrResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ReestrError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.url))
    }

    /// Creates a client with a preconfigured `reqwest` client.
    pub fn with_client(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    /// Endpoint this client reads from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn fetch_records(&self) -> ReestrResult<Vec<RawRecord>> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ReestrError::upstream_unavailable(format!("HTTP error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReestrError::upstream_unavailable(format!(
                "registry answered {}",
                status
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            ReestrError::upstream_unavailable(format!("failed to read registry body: {}", e))
        })?;

        let listing: RegistryResponse = serde_json::from_slice(&body)
            .map_err(|e| ReestrError::upstream_malformed(format!("JSON parse error: {}", e)))?;

        debug!("Registry returned {} objects", listing.objects.len());
        Ok(listing.objects)
    }
}
