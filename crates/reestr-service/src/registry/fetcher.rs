//! Upstream fetcher: registry listing to cached dataset.

use super::{normalize_all, RegistryClient};
use crate::cache::{CacheWrite, DatasetCache};
use crate::metrics::PipelineMetrics;
use reestr_core::{Dataset, ReestrResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// Result of a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// The freshly normalized dataset, in upstream order.
    pub dataset: Dataset,
    /// Whether the dataset made it into the cache.
    pub stored: bool,
}

/// Pulls the full listing from the registry, normalizes it and writes it
/// through the dataset cache.
#[derive(Clone)]
pub struct UpstreamFetcher {
    client: Arc<dyn RegistryClient>,
    cache: DatasetCache,
}

impl UpstreamFetcher {
    /// Creates a fetcher.
    pub fn new(client: Arc<dyn RegistryClient>, cache: DatasetCache) -> Self {
        Self { client, cache }
    }

    /// Fetches, normalizes and caches the dataset.
    ///
    /// A cache failure on write never fails the fetch; it only clears
    /// [`FetchOutcome::stored`].
    ///
    /// # Errors
    ///
    /// Upstream and normalization failures, unchanged.
    pub async fn fetch(&self) -> ReestrResult<FetchOutcome> {
        let started = Instant::now();

        let dataset = match self.load().await {
            Ok(dataset) => dataset,
            Err(e) => {
                error!(error = %e, "Registry fetch failed");
                PipelineMetrics::upstream_failed(e.error_code(), started.elapsed());
                return Err(e);
            }
        };

        PipelineMetrics::upstream_fetched(dataset.len(), started.elapsed());
        info!(
            records = dataset.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched dataset from registry"
        );

        let stored = match self.cache.set(&dataset).await {
            Ok(CacheWrite::Stored) => true,
            Ok(CacheWrite::Rejected) => false,
            Err(e) => {
                warn!(error = %e, "Could not cache fetched dataset");
                false
            }
        };

        Ok(FetchOutcome { dataset, stored })
    }

    async fn load(&self) -> ReestrResult<Dataset> {
        let records = self.client.fetch_records().await?;
        normalize_all(records)
    }
}
