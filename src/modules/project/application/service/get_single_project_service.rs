use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::project_cache::cache_key;
use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};
use crate::shared::cache::CacheStore;
use crate::shared::locale::Locale;

/// Merged project read, cached per `(id, locale)`.
pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { query, cache, ttl }
    }

    async fn cached(&self, key: &str) -> Option<ProjectView> {
        let raw = match self.cache.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %key, error = %e, "Project cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(view) => Some(view),
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding undecodable project cache entry");
                None
            }
        }
    }

    async fn store(&self, key: &str, view: &ProjectView) {
        let raw = match serde_json::to_string(view) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to encode project for cache");
                return;
            }
        };

        if let Err(e) = self.cache.set(key, &raw, self.ttl).await {
            warn!(key = %key, error = %e, "Project cache write failed");
        }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        id: &str,
        locale: Locale,
    ) -> Result<ProjectView, GetSingleProjectError> {
        let key = cache_key(id, locale);

        if let Some(view) = self.cached(&key).await {
            debug!(key = %key, "Project cache hit");
            return Ok(view);
        }

        let view = self.query.get(id, locale).await.map_err(|e| match e {
            ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
            ProjectQueryError::DatabaseError(msg) => GetSingleProjectError::RepositoryError(msg),
        })?;

        self.store(&key, &view).await;

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cache::MemoryCacheStore;
    use crate::tests::support::stubs::{sample_project_view, CountingProjectQuery, FailingCacheStore};

    const TTL: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let query = CountingProjectQuery::returning(sample_project_view("villa-1"));
        let calls = query.clone();
        let service = GetSingleProjectService::new(query, Arc::new(MemoryCacheStore::new()), TTL);

        let first = service.execute("villa-1", Locale::En).await.unwrap();
        let second = service.execute("villa-1", Locale::En).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
        assert_eq!(calls.calls(), 1);
    }

    #[tokio::test]
    async fn test_locales_are_cached_separately() {
        let query = CountingProjectQuery::returning(sample_project_view("villa-1"));
        let calls = query.clone();
        let service = GetSingleProjectService::new(query, Arc::new(MemoryCacheStore::new()), TTL);

        service.execute("villa-1", Locale::En).await.unwrap();
        service.execute("villa-1", Locale::Ru).await.unwrap();

        assert_eq!(calls.calls(), 2);
    }

    #[tokio::test]
    async fn test_expired_entry_goes_back_to_the_query() {
        let query = CountingProjectQuery::returning(sample_project_view("villa-1"));
        let calls = query.clone();
        let service = GetSingleProjectService::new(
            query,
            Arc::new(MemoryCacheStore::new()),
            Duration::from_millis(20),
        );

        service.execute("villa-1", Locale::Ka).await.unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        service.execute("villa-1", Locale::Ka).await.unwrap();

        assert_eq!(calls.calls(), 2);
    }

    #[tokio::test]
    async fn test_cache_failure_falls_back_to_query() {
        let query = CountingProjectQuery::returning(sample_project_view("villa-1"));
        let calls = query.clone();
        let service = GetSingleProjectService::new(query, Arc::new(FailingCacheStore), TTL);

        let view = service.execute("villa-1", Locale::En).await.unwrap();
        service.execute("villa-1", Locale::En).await.unwrap();

        assert_eq!(view.id, "villa-1");
        assert_eq!(calls.calls(), 2);
    }

    #[tokio::test]
    async fn test_not_found_is_not_cached() {
        let query = CountingProjectQuery::not_found();
        let calls = query.clone();
        let cache = Arc::new(MemoryCacheStore::new());
        let service = GetSingleProjectService::new(query, cache.clone(), TTL);

        let result = service.execute("missing", Locale::En).await;

        assert!(matches!(result, Err(GetSingleProjectError::NotFound)));
        assert!(cache.get("project:missing:en").await.unwrap().is_none());
        assert_eq!(calls.calls(), 1);
    }

    #[tokio::test]
    async fn test_database_error_is_repository_error() {
        let service = GetSingleProjectService::new(
            CountingProjectQuery::failing(),
            Arc::new(MemoryCacheStore::new()),
            TTL,
        );

        let result = service.execute("villa-1", Locale::En).await;

        assert!(matches!(
            result,
            Err(GetSingleProjectError::RepositoryError(_))
        ));
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_is_ignored() {
        let query = CountingProjectQuery::returning(sample_project_view("villa-1"));
        let calls = query.clone();
        let cache = Arc::new(MemoryCacheStore::new());
        cache
            .set("project:villa-1:en", "not json", TTL)
            .await
            .unwrap();
        let service = GetSingleProjectService::new(query, cache, TTL);

        let view = service.execute("villa-1", Locale::En).await.unwrap();

        assert_eq!(view.title, "Villa One");
        assert_eq!(calls.calls(), 1);
    }
}
