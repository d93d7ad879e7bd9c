//! Cache backend trait for raw single-key storage.

use async_trait::async_trait;
use reestr_core::ReestrResult;

/// Key-value cache backend holding textual values without expiry.
///
/// Implementations report failures as structured errors:
/// - `CacheUnavailable` when the backend cannot be reached or times out,
/// - `CacheWriteRejected` when a write is refused for lack of capacity.
///
/// A missing key is `Ok(None)`, never an error. Atomicity of a single
/// get/set is the backend's responsibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get the raw value stored under `key`.
    async fn get_raw(&self, key: &str) -> ReestrResult<Option<String>>;

    /// Store `value` under `key` with no expiry, replacing any previous value.
    async fn set_raw(&self, key: &str, value: &str) -> ReestrResult<()>;
}
