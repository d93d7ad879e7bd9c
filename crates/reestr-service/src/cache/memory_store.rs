//! In-process cache backend.

use super::CacheStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use reestr_core::{ReestrError, ReestrResult};
use std::collections::HashMap;

/// In-process cache backend, used when Redis is disabled and in tests.
///
/// An optional per-value size limit models a backend that is out of
/// capacity: oversized writes are refused with `CacheWriteRejected`.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<String, String>>,
    max_value_bytes: Option<usize>,
}

impl MemoryCacheStore {
    /// Creates an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that refuses values larger than `max_value_bytes`.
    #[must_use]
    pub fn with_max_value_bytes(max_value_bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_value_bytes: Some(max_value_bytes),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get_raw(&self, key: &str) -> ReestrResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: &str) -> ReestrResult<()> {
        if let Some(limit) = self.max_value_bytes {
            if value.len() > limit {
                return Err(ReestrError::CacheWriteRejected(format!(
                    "value for '{}' is {} bytes, limit is {}",
                    key,
                    value.len(),
                    limit
                )));
            }
        }

        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryCacheStore::new();
        assert_eq!(store.get_raw("organizations").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let store = MemoryCacheStore::new();
        store.set_raw("organizations", "[]").await.unwrap();
        store.set_raw("organizations", "[{}]").await.unwrap();

        assert_eq!(store.get_raw("organizations").await.unwrap().as_deref(), Some("[{}]"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_oversized_value_rejected() {
        let store = MemoryCacheStore::with_max_value_bytes(4);
        let err = store.set_raw("organizations", "[1,2,3]").await.unwrap_err();

        assert!(matches!(err, ReestrError::CacheWriteRejected(_)));
        assert!(store.is_empty());
    }
}
