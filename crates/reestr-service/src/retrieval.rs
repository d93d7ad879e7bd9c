//! Retrieval orchestrator: cache first, fetch on miss or cache failure.
//!
//! Each call runs one ordered fallback chain and keeps no state between
//! calls:
//!
//! 1. read the cache;
//! 2. a cached dataset is returned as is;
//! 3. on a miss, fetch and re-read what the fetch just cached;
//! 4. on an unreachable cache, fetch anyway, same re-read rule;
//! 5. an upstream failure ends the call.
//!
//! When the re-read finds nothing, the freshly fetched dataset is served.

use crate::cache::DatasetCache;
use crate::registry::{FetchOutcome, RegistryClient, UpstreamFetcher};
use reestr_core::{Dataset, ReestrResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where a retrieved dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    /// Served straight from the cache.
    Cache,
    /// Fetched, cached and read back.
    Refreshed,
    /// Fetched, but not readable from the cache afterwards.
    Uncached,
}

/// A dataset and its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retrieved {
    pub dataset: Dataset,
    pub source: DatasetSource,
}

/// Produces the current dataset for a read.
#[derive(Clone)]
pub struct RetrievalOrchestrator {
    cache: DatasetCache,
    fetcher: UpstreamFetcher,
}

impl RetrievalOrchestrator {
    /// Creates an orchestrator reading `cache` and refreshing it from `client`.
    pub fn new(cache: DatasetCache, client: Arc<dyn RegistryClient>) -> Self {
        let fetcher = UpstreamFetcher::new(client, cache.clone());
        Self { cache, fetcher }
    }

    /// Returns the dataset for one read.
    ///
    /// # Errors
    ///
    /// Only upstream failures (`UpstreamUnavailable`,
    /// `UpstreamMalformedResponse`, `MalformedRecord`). Cache failures are
    /// absorbed.
    pub async fn retrieve(&self) -> ReestrResult<Retrieved> {
        match self.cache.get().await {
            Ok(Some(dataset)) => {
                return Ok(Retrieved {
                    dataset,
                    source: DatasetSource::Cache,
                });
            }
            Ok(None) => info!(key = self.cache.key(), "Dataset not cached; fetching from registry"),
            Err(e) => warn!(error = %e, "Cache unreachable; fetching from registry directly"),
        }

        let outcome = self.fetcher.fetch().await?;
        Ok(self.read_back(outcome).await)
    }

    async fn read_back(&self, outcome: FetchOutcome) -> Retrieved {
        let FetchOutcome { dataset, stored } = outcome;

        if !stored {
            return Retrieved {
                dataset,
                source: DatasetSource::Uncached,
            };
        }

        match self.cache.get().await {
            Ok(Some(cached)) => Retrieved {
                dataset: cached,
                source: DatasetSource::Refreshed,
            },
            Ok(None) => {
                debug!("Cached dataset vanished before read-back; serving fetched copy");
                Retrieved {
                    dataset,
                    source: DatasetSource::Uncached,
                }
            }
            Err(e) => {
                warn!(error = %e, "Read-back failed; serving fetched copy");
                Retrieved {
                    dataset,
                    source: DatasetSource::Uncached,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheStore, MemoryCacheStore, MockCacheStore};
    use crate::registry::{MockRegistryClient, RawRecord};
    use reestr_core::{Organization, ReestrError};

    fn records(names: &[&str]) -> Vec<RawRecord> {
        names.iter().map(|n| RawRecord::named(*n)).collect()
    }

    fn client_returning(names: &'static [&'static str], times: usize) -> MockRegistryClient {
        let mut client = MockRegistryClient::new();
        client
            .expect_fetch_records()
            .times(times)
            .returning(move || Ok(records(names)));
        client
    }

    #[tokio::test]
    async fn test_cache_hit_skips_registry() {
        let store = Arc::new(MemoryCacheStore::new());
        let cache = DatasetCache::with_default_key(store);
        cache
            .set(&vec![Organization::with_name_parts(vec!["Cached".into()])])
            .await
            .unwrap();

        let orchestrator = RetrievalOrchestrator::new(cache, Arc::new(client_returning(&[], 0)));
        let retrieved = orchestrator.retrieve().await.unwrap();

        assert_eq!(retrieved.source, DatasetSource::Cache);
        assert_eq!(retrieved.dataset[0].name_parts, vec!["Cached"]);
    }

    #[tokio::test]
    async fn test_miss_fetches_then_serves_from_cache() {
        let cache = DatasetCache::with_default_key(Arc::new(MemoryCacheStore::new()));
        let orchestrator =
            RetrievalOrchestrator::new(cache, Arc::new(client_returning(&["A", "B", "C"], 1)));

        let first = orchestrator.retrieve().await.unwrap();
        assert_eq!(first.source, DatasetSource::Refreshed);
        assert_eq!(first.dataset.len(), 3);

        let second = orchestrator.retrieve().await.unwrap();
        assert_eq!(second.source, DatasetSource::Cache);
        assert_eq!(second.dataset, first.dataset);
    }

    #[tokio::test]
    async fn test_unreachable_cache_falls_back_to_fetch() {
        let mut store = MockCacheStore::new();
        store
            .expect_get_raw()
            .returning(|_| Err(ReestrError::cache_unavailable("connection refused")));
        store
            .expect_set_raw()
            .times(1)
            .returning(|_, _| Err(ReestrError::cache_unavailable("connection refused")));

        let orchestrator = RetrievalOrchestrator::new(
            DatasetCache::with_default_key(Arc::new(store)),
            Arc::new(client_returning(&["A", "B"], 1)),
        );

        let retrieved = orchestrator.retrieve().await.unwrap();
        assert_eq!(retrieved.source, DatasetSource::Uncached);
        assert_eq!(retrieved.dataset.len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_write_serves_fetched_dataset() {
        let orchestrator = RetrievalOrchestrator::new(
            DatasetCache::with_default_key(Arc::new(MemoryCacheStore::with_max_value_bytes(2))),
            Arc::new(client_returning(&["A"], 1)),
        );

        let retrieved = orchestrator.retrieve().await.unwrap();
        assert_eq!(retrieved.source, DatasetSource::Uncached);
        assert_eq!(retrieved.dataset[0].name_parts, vec!["A"]);
    }

    #[tokio::test]
    async fn test_empty_read_back_serves_fetched_dataset() {
        let mut store = MockCacheStore::new();
        store.expect_get_raw().times(2).returning(|_| Ok(None));
        store.expect_set_raw().times(1).returning(|_, _| Ok(()));

        let orchestrator = RetrievalOrchestrator::new(
            DatasetCache::with_default_key(Arc::new(store)),
            Arc::new(client_returning(&["A", "B"], 1)),
        );

        let retrieved = orchestrator.retrieve().await.unwrap();
        assert_eq!(retrieved.source, DatasetSource::Uncached);
        assert_eq!(retrieved.dataset.len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_cache_is_overwritten_by_fetch() {
        let store = Arc::new(MemoryCacheStore::new());
        store.set_raw("organizations", "garbage").await.unwrap();

        let orchestrator = RetrievalOrchestrator::new(
            DatasetCache::with_default_key(store.clone()),
            Arc::new(client_returning(&["Fresh"], 1)),
        );

        let retrieved = orchestrator.retrieve().await.unwrap();
        assert_eq!(retrieved.source, DatasetSource::Refreshed);
        assert_eq!(retrieved.dataset[0].name_parts, vec!["Fresh"]);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_on_miss() {
        let mut client = MockRegistryClient::new();
        client
            .expect_fetch_records()
            .times(1)
            .returning(|| Err(ReestrError::upstream_unavailable("503 from registry")));

        let orchestrator = RetrievalOrchestrator::new(
            DatasetCache::with_default_key(Arc::new(MemoryCacheStore::new())),
            Arc::new(client),
        );

        assert!(matches!(
            orchestrator.retrieve().await,
            Err(ReestrError::UpstreamUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_when_cache_unreachable() {
        let mut store = MockCacheStore::new();
        store
            .expect_get_raw()
            .times(1)
            .returning(|_| Err(ReestrError::cache_unavailable("timeout")));
        store.expect_set_raw().never();

        let mut client = MockRegistryClient::new();
        client
            .expect_fetch_records()
            .times(1)
            .returning(|| Err(ReestrError::upstream_malformed("no Objects")));

        let orchestrator =
            RetrievalOrchestrator::new(DatasetCache::with_default_key(Arc::new(store)), Arc::new(client));

        let err = orchestrator.retrieve().await.unwrap_err();
        assert!(matches!(err, ReestrError::UpstreamMalformedResponse(_)));
    }
}
