use async_trait::async_trait;
use serde::Serialize;

use crate::modules::platform::application::domain::entities::MediaCatalog;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RevalidatePlatformsError {
    #[error("cache error: {0}")]
    CacheError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revalidated {
    pub revalidated: bool,
    /// Unix time in milliseconds.
    pub now: i64,
}

#[async_trait]
pub trait RevalidatePlatformsUseCase: Send + Sync {
    async fn execute(&self, catalog: MediaCatalog) -> Result<Revalidated, RevalidatePlatformsError>;
}
