mod cache_store;
mod memory_cache;
mod redis_cache;

pub use cache_store::{CacheError, CacheStore};
pub use memory_cache::MemoryCacheStore;
pub use redis_cache::RedisCacheStore;
