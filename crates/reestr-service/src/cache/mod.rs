//! Caching infrastructure for the directory dataset.
//!
//! [`CacheStore`] is the raw key-value seam with a Redis and an in-process
//! implementation. [`DatasetCache`] sits on top of it and speaks in whole
//! datasets, absorbing capacity rejections on write.

mod cache_store;
mod dataset_cache;
mod memory_store;
mod redis_store;

pub use cache_store::CacheStore;
#[cfg(test)]
pub use cache_store::MockCacheStore;
pub use dataset_cache::{CacheWrite, DatasetCache, DEFAULT_DATASET_KEY};
pub use memory_store::MemoryCacheStore;
pub use redis_store::RedisCacheStore;
