// src/shared/cache/cache_store.rs
use std::time::Duration;

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),

    #[error("Cache command failed: {0}")]
    Command(String),
}

/// String key/value cache with per-entry TTL.
///
/// Callers treat every error as a miss; nothing in the request path fails
/// because the cache is unavailable.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    async fn invalidate(&self, key: &str) -> Result<(), CacheError>;

    /// Readiness probe.
    async fn ping(&self) -> Result<(), CacheError>;
}
