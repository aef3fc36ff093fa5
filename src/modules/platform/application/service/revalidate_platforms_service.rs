use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::platform::application::domain::entities::MediaCatalog;
use crate::modules::platform::application::ports::incoming::use_cases::{
    RevalidatePlatformsError, RevalidatePlatformsUseCase, Revalidated,
};
use crate::shared::cache::CacheStore;

pub struct RevalidatePlatformsService {
    cache: Arc<dyn CacheStore>,
}

impl RevalidatePlatformsService {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl RevalidatePlatformsUseCase for RevalidatePlatformsService {
    async fn execute(
        &self,
        catalog: MediaCatalog,
    ) -> Result<Revalidated, RevalidatePlatformsError> {
        let tag = catalog.cache_tag();

        self.cache
            .invalidate(tag)
            .await
            .map_err(|e| RevalidatePlatformsError::CacheError(e.to_string()))?;

        info!(tag = %tag, "Platform cache revalidated");

        Ok(Revalidated {
            revalidated: true,
            now: Utc::now().timestamp_millis(),
        })
    }
}
