//! Redis-based cache backend.

use super::CacheStore;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool, Runtime};
use reestr_config::RedisConfig;
use reestr_core::{ReestrError, ReestrResult};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default upper bound on a single Redis round trip.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Error code Redis uses when `maxmemory` is reached and the write is refused.
const OUT_OF_MEMORY_CODE: &str = "OOM";

/// Redis-based cache backend.
pub struct RedisCacheStore {
    /// Redis connection pool.
    pool: Arc<Pool>,
    /// Upper bound on each pool checkout and command.
    timeout: Duration,
}

impl RedisCacheStore {
    /// Create a new Redis cache store.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self::with_timeout(pool, DEFAULT_OPERATION_TIMEOUT)
    }

    /// Create a Redis cache store with a custom operation timeout.
    #[must_use]
    pub fn with_timeout(pool: Arc<Pool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Build the connection pool described by `config`.
    ///
    /// No connection is opened here; the first command connects lazily.
    pub fn from_config(config: &RedisConfig) -> ReestrResult<Self> {
        let mut redis_cfg = deadpool_redis::Config::from_url(&config.url);
        redis_cfg.pool = Some(deadpool_redis::PoolConfig::new(config.pool_size as usize));

        let pool = redis_cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| ReestrError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

        Ok(Self::with_timeout(Arc::new(pool), config.operation_timeout()))
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> ReestrResult<deadpool_redis::Connection> {
        self.bounded("connect", async {
            self.pool.get().await.map_err(|e| {
                ReestrError::cache_unavailable(format!("Failed to get Redis connection: {}", e))
            })
        })
        .await
    }

    /// Runs `op`, turning an elapsed timeout into `CacheUnavailable`.
    async fn bounded<T, F>(&self, what: &str, op: F) -> ReestrResult<T>
    where
        F: Future<Output = ReestrResult<T>>,
    {
        tokio::time::timeout(self.timeout, op).await.unwrap_or_else(|_| {
            Err(ReestrError::cache_unavailable(format!(
                "Redis {} timed out after {}ms",
                what,
                self.timeout.as_millis()
            )))
        })
    }
}

/// Maps a failed write to the adapter's error kinds.
///
/// Only the server's out-of-memory reply counts as a capacity rejection;
/// everything else means the backend is unusable right now.
fn classify_write_failure(code: Option<&str>, key: &str, detail: &str) -> ReestrError {
    if code == Some(OUT_OF_MEMORY_CODE) {
        ReestrError::CacheWriteRejected(format!("Redis refused key '{}': {}", key, detail))
    } else {
        ReestrError::cache_unavailable(format!("Failed to set key '{}': {}", key, detail))
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get_raw(&self, key: &str) -> ReestrResult<Option<String>> {
        let mut conn = self.get_conn().await?;

        let value: Option<String> = self
            .bounded("GET", async {
                conn.get(key).await.map_err(|e| {
                    ReestrError::cache_unavailable(format!("Failed to get key '{}': {}", key, e))
                })
            })
            .await?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str) -> ReestrResult<()> {
        let mut conn = self.get_conn().await?;

        self.bounded("SET", async {
            conn.set::<_, _, ()>(key, value)
                .await
                .map_err(|e| classify_write_failure(e.code(), key, &e.to_string()))
        })
        .await?;

        debug!("Cached key '{}' ({} bytes, no expiry)", key, value.len());
        Ok(())
    }
}
