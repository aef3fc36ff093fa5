use async_trait::async_trait;

use crate::modules::platform::application::domain::entities::{MediaCatalog, PlatformSummary};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlatformQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// One way of deriving the platform facet of a catalog. Strategies are
/// tried in order until one succeeds.
#[async_trait]
pub trait PlatformStrategy: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    async fn fetch(&self, catalog: MediaCatalog)
        -> Result<Vec<PlatformSummary>, PlatformQueryError>;
}
