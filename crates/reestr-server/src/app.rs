//! Construction of the directory from configuration.

use reestr_config::AppConfig;
use reestr_core::ReestrResult;
use reestr_rest::{create_router, AppState};
use reestr_service::{
    CacheStore, DatasetCache, DirectoryService, DirectoryServiceImpl, HttpRegistryClient,
    MemoryCacheStore, RedisCacheStore, RegistryClient, RetrievalOrchestrator,
};
use std::sync::Arc;
use tracing::info;

/// Builds the cache backend selected by `redis.enabled`.
///
/// The Redis pool connects lazily, so an unreachable server does not stop
/// startup; reads fall back to the registry until it comes back.
pub fn build_cache_store(config: &AppConfig) -> ReestrResult<Arc<dyn CacheStore>> {
    if config.redis.enabled {
        info!("Using Redis cache at {}", config.redis.url);
        Ok(Arc::new(RedisCacheStore::from_config(&config.redis)?))
    } else {
        info!("Redis disabled; using in-process cache");
        Ok(Arc::new(MemoryCacheStore::new()))
    }
}

/// Builds the directory service over `store`.
pub fn build_directory_service(
    config: &AppConfig,
    store: Arc<dyn CacheStore>,
) -> ReestrResult<Arc<dyn DirectoryService>> {
    let cache = DatasetCache::new(store, config.redis.key.clone());
    let client: Arc<dyn RegistryClient> = Arc::new(HttpRegistryClient::new(&config.registry)?);
    let orchestrator = RetrievalOrchestrator::new(cache, client);

    Ok(Arc::new(DirectoryServiceImpl::new(orchestrator)))
}

/// Builds the complete HTTP application.
pub fn build_router(config: &AppConfig) -> ReestrResult<axum::Router> {
    let store = build_cache_store(config)?;
    let directory_service = build_directory_service(config, store)?;
    Ok(create_router(AppState::new(directory_service), &config.server))
}
