//! Single-key dataset cache on top of a raw [`CacheStore`].

use super::CacheStore;
use crate::metrics::PipelineMetrics;
use reestr_core::{Dataset, ReestrError, ReestrResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// Key the dataset is stored under unless configured otherwise.
pub const DEFAULT_DATASET_KEY: &str = "organizations";

/// Outcome of a dataset write that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheWrite {
    /// The dataset is now cached.
    Stored,
    /// The backend refused the write for lack of capacity; nothing changed.
    Rejected,
}

/// Stores the whole dataset as one JSON value under a fixed key.
#[derive(Clone)]
pub struct DatasetCache {
    store: Arc<dyn CacheStore>,
    key: String,
}

impl DatasetCache {
    /// Creates a dataset cache over `store` using `key`.
    pub fn new(store: Arc<dyn CacheStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Creates a dataset cache using [`DEFAULT_DATASET_KEY`].
    pub fn with_default_key(store: Arc<dyn CacheStore>) -> Self {
        Self::new(store, DEFAULT_DATASET_KEY)
    }

    /// The key the dataset lives under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the cached dataset.
    ///
    /// `Ok(None)` is a miss. Any backend failure, and a stored value that
    /// does not parse, is `CacheUnavailable`.
    pub async fn get(&self) -> ReestrResult<Option<Dataset>> {
        let raw = match self.store.get_raw(&self.key).await {
            Ok(raw) => raw,
            Err(e) => {
                PipelineMetrics::cache_unavailable(&self.key, "get");
                return Err(into_unavailable(e));
            }
        };

        let Some(raw) = raw else {
            debug!(key = %self.key, "Dataset cache miss");
            PipelineMetrics::cache_miss(&self.key);
            return Ok(None);
        };

        match serde_json::from_str::<Dataset>(&raw) {
            Ok(dataset) => {
                debug!(key = %self.key, records = dataset.len(), "Dataset cache hit");
                PipelineMetrics::cache_hit(&self.key);
                Ok(Some(dataset))
            }
            Err(e) => {
                PipelineMetrics::cache_unavailable(&self.key, "decode");
                Err(ReestrError::cache_unavailable(format!(
                    "cached value under '{}' is not a dataset: {}",
                    self.key, e
                )))
            }
        }
    }

    /// Replaces the cached dataset wholesale, with no expiry.
    ///
    /// A capacity rejection is logged and reported as [`CacheWrite::Rejected`];
    /// every other failure is `CacheUnavailable`.
    pub async fn set(&self, dataset: &Dataset) -> ReestrResult<CacheWrite> {
        let raw = serde_json::to_string(dataset)?;

        match self.store.set_raw(&self.key, &raw).await {
            Ok(()) => {
                debug!(key = %self.key, records = dataset.len(), bytes = raw.len(), "Dataset cached");
                Ok(CacheWrite::Stored)
            }
            Err(ReestrError::CacheWriteRejected(reason)) => {
                warn!(key = %self.key, %reason, "Cache refused dataset write; serving uncached");
                PipelineMetrics::cache_write_rejected(&self.key);
                Ok(CacheWrite::Rejected)
            }
            Err(e) => {
                PipelineMetrics::cache_unavailable(&self.key, "set");
                Err(into_unavailable(e))
            }
        }
    }
}

fn into_unavailable(err: ReestrError) -> ReestrError {
    match err {
        ReestrError::CacheUnavailable(_) => err,
        other => ReestrError::cache_unavailable(other.to_string()),
    }
}
