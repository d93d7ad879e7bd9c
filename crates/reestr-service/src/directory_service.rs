//! The directory read operation: retrieve the dataset, then query it.

use crate::query::{QueryEngine, SearchTerm};
use crate::retrieval::RetrievalOrchestrator;
use async_trait::async_trait;
use reestr_core::{Organization, PageResult, ReestrResult};
use serde::Serialize;
use tracing::{debug, instrument};

/// One page of the directory for a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPage {
    /// The matching records on this page and the page metadata.
    #[serde(flatten)]
    pub page: PageResult<Organization>,
    /// The search term after normalization.
    pub search_query: String,
}

/// Read access to the organization directory.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Returns page `page` (1-based, clamped to at least 1) of the records
    /// matching `search`.
    ///
    /// # Errors
    ///
    /// Upstream failures only; the cache layer never fails a read.
    async fn get_page(&self, search: &str, page: i64) -> ReestrResult<DirectoryPage>;
}

/// Directory service backed by the retrieval pipeline.
#[derive(Clone)]
pub struct DirectoryServiceImpl {
    orchestrator: RetrievalOrchestrator,
}

impl DirectoryServiceImpl {
    /// Creates a new directory service.
    pub fn new(orchestrator: RetrievalOrchestrator) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl DirectoryService for DirectoryServiceImpl {
    #[instrument(skip(self))]
    async fn get_page(&self, search: &str, page: i64) -> ReestrResult<DirectoryPage> {
        let retrieved = self.orchestrator.retrieve().await?;
        let term = SearchTerm::new(search);
        let result = QueryEngine::page(&retrieved.dataset, &term, page);

        debug!(
            source = ?retrieved.source,
            dataset = retrieved.dataset.len(),
            matched = result.info.total_items,
            "Directory page served"
        );

        Ok(DirectoryPage {
            page: result,
            search_query: term.as_str().to_string(),
        })
    }
}
