//! # Reestr Service
//!
//! The cache-backed retrieval pipeline behind the organization directory:
//! record normalization, the upstream registry fetcher, the cache adapter,
//! the retrieval orchestrator, and the in-memory query engine.

pub mod cache;
pub mod directory_service;
pub mod metrics;
pub mod query;
pub mod registry;
pub mod retrieval;

pub use cache::*;
pub use directory_service::*;
pub use query::*;
pub use registry::*;
pub use retrieval::*;
