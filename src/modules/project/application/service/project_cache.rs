use tracing::warn;

use crate::shared::cache::CacheStore;
use crate::shared::locale::Locale;

pub(super) fn cache_key(id: &str, locale: Locale) -> String {
    format!("project:{}:{}", id, locale)
}

/// Drops the cached view of `id` for every locale. Failures are logged.
pub(super) async fn invalidate_project(cache: &dyn CacheStore, id: &str) {
    for locale in Locale::ALL {
        let key = cache_key(id, locale);
        if let Err(e) = cache.invalidate(&key).await {
            warn!(key = %key, error = %e, "Failed to invalidate project cache entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cache::MemoryCacheStore;
    use std::time::Duration;

    #[test]
    fn test_cache_key_format() {
        assert_eq!(cache_key("villa-1", Locale::Ru), "project:villa-1:ru");
    }

    #[tokio::test]
    async fn test_invalidate_project_clears_every_locale() {
        let cache = MemoryCacheStore::new();
        for locale in Locale::ALL {
            cache
                .set(&cache_key("villa-1", locale), "{}", Duration::from_secs(60))
                .await
                .unwrap();
        }
        cache
            .set(&cache_key("other", Locale::En), "{}", Duration::from_secs(60))
            .await
            .unwrap();

        invalidate_project(&cache, "villa-1").await;

        for locale in Locale::ALL {
            assert!(cache.get(&cache_key("villa-1", locale)).await.unwrap().is_none());
        }
        assert!(cache.get(&cache_key("other", Locale::En)).await.unwrap().is_some());
    }
}
