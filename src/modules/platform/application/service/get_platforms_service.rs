use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::modules::platform::application::domain::entities::{
    static_platforms, MediaCatalog, PlatformListing, PlatformSource, STATIC_NOTICE,
};
use crate::modules::platform::application::ports::incoming::use_cases::GetPlatformsUseCase;
use crate::modules::platform::application::ports::outgoing::PlatformStrategy;
use crate::shared::cache::CacheStore;

/// A live strategy paired with the source it reports.
pub type RankedStrategy = (PlatformSource, Arc<dyn PlatformStrategy>);

/// Platform facet behind a tag-keyed cache, computed by the first strategy
/// that succeeds.
pub struct GetPlatformsService {
    strategies: Vec<RankedStrategy>,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl GetPlatformsService {
    pub fn new(strategies: Vec<RankedStrategy>, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            strategies,
            cache,
            ttl,
        }
    }

    async fn cached(&self, tag: &str) -> Option<PlatformListing> {
        let raw = match self.cache.get(tag).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(tag = %tag, error = %e, "Platform cache read failed, treating as miss");
                return None;
            }
        };

        serde_json::from_str(&raw)
            .map_err(|e| warn!(tag = %tag, error = %e, "Discarding undecodable platform cache entry"))
            .ok()
    }

    async fn store(&self, tag: &str, listing: &PlatformListing) {
        let raw = match serde_json::to_string(listing) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(tag = %tag, error = %e, "Failed to encode platforms for cache");
                return;
            }
        };

        if let Err(e) = self.cache.set(tag, &raw, self.ttl).await {
            warn!(tag = %tag, error = %e, "Platform cache write failed");
        }
    }

    async fn compute(&self, catalog: MediaCatalog) -> Option<PlatformListing> {
        for (source, strategy) in &self.strategies {
            match strategy.fetch(catalog).await {
                Ok(platforms) => {
                    info!(
                        catalog = %catalog,
                        strategy = strategy.name(),
                        platforms = platforms.len(),
                        "Platform facet computed"
                    );
                    return Some(PlatformListing {
                        platforms,
                        source: *source,
                        notice: None,
                    });
                }
                Err(e) => {
                    error!(
                        catalog = %catalog,
                        strategy = strategy.name(),
                        error = %e,
                        "Platform strategy failed"
                    );
                }
            }
        }

        None
    }
}

#[async_trait]
impl GetPlatformsUseCase for GetPlatformsService {
    async fn execute(&self, catalog: MediaCatalog) -> PlatformListing {
        let tag = catalog.cache_tag();

        if let Some(listing) = self.cached(tag).await {
            debug!(tag = %tag, "Platform cache hit");
            return listing;
        }

        match self.compute(catalog).await {
            Some(listing) => {
                self.store(tag, &listing).await;
                listing
            }
            None => {
                warn!(catalog = %catalog, "Every platform strategy failed, serving static list");
                PlatformListing {
                    platforms: static_platforms(catalog),
                    source: PlatformSource::Static,
                    notice: Some(STATIC_NOTICE.to_string()),
                }
            }
        }
    }
}
