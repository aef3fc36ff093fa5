use async_trait::async_trait;

use crate::modules::platform::application::domain::entities::{MediaCatalog, PlatformListing};

/// Never fails: the chain ends with a static listing.
#[async_trait]
pub trait GetPlatformsUseCase: Send + Sync {
    async fn execute(&self, catalog: MediaCatalog) -> PlatformListing;
}
