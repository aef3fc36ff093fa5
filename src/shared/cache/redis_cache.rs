// src/shared/cache/redis_cache.rs
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::redis::{self, AsyncCommands};
use deadpool_redis::{Config, Pool, Runtime};

use super::cache_store::{CacheError, CacheStore};

/// Redis-backed cache, shared by every worker and every instance.
#[derive(Clone)]
pub struct RedisCacheStore {
    pool: Arc<Pool>,
    key_prefix: String,
}

impl RedisCacheStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool,
            key_prefix: "draftwork:".to_string(),
        }
    }

    pub fn from_url(redis_url: &str) -> Result<Self, CacheError> {
        let pool = Config::from_url(redis_url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        Ok(Self::new(Arc::new(pool)))
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    async fn connection(&self) -> Result<deadpool_redis::Connection, CacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection().await?;

        conn.get::<_, Option<String>>(self.key(key))
            .await
            .map_err(|e| CacheError::Command(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;

        // SET EX rejects 0
        let seconds = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(self.key(key), value, seconds)
            .await
            .map_err(|e| CacheError::Command(e.to_string()))
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;

        conn.del::<_, ()>(self.key(key))
            .await
            .map_err(|e| CacheError::Command(e.to_string()))
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;

        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| CacheError::Command(e.to_string()))
    }
}
