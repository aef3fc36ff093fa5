use actix_web::{get, web, HttpResponse};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::modules::platform::application::domain::entities::{MediaCatalog, PlatformListing};
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const PLATFORM_CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

/// `{platforms, count, source, notice?}` with per-catalog count keys.
pub struct PlatformsResponse {
    catalog: MediaCatalog,
    listing: PlatformListing,
}

impl PlatformsResponse {
    pub fn new(catalog: MediaCatalog, listing: PlatformListing) -> Self {
        Self { catalog, listing }
    }
}

impl Serialize for PlatformsResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let platforms: Vec<_> = self
            .listing
            .platforms
            .iter()
            .map(|p| p.for_catalog(self.catalog))
            .collect();

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("platforms", &platforms)?;
        map.serialize_entry("count", &platforms.len())?;
        map.serialize_entry("source", &self.listing.source)?;
        if let Some(notice) = &self.listing.notice {
            map.serialize_entry("notice", notice)?;
        }
        map.end()
    }
}

async fn platforms_response(catalog: MediaCatalog, data: &AppState) -> HttpResponse {
    let listing = data.platform.get.execute(catalog).await;
    ApiResponse::cacheable(
        PlatformsResponse::new(catalog, listing),
        PLATFORM_CACHE_CONTROL,
    )
}

/// Movie streaming platforms
///
/// Always answers 200; falls back to a static list when the database is
/// unavailable.
#[utoipa::path(
    get,
    path = "/api/platforms",
    tag = "platforms",
    responses(
        (status = 200, description = "Platforms ranked by movie count, `movie_count` per entry"),
    )
)]
#[get("/api/platforms")]
pub async fn get_movie_platforms_handler(data: web::Data<AppState>) -> HttpResponse {
    platforms_response(MediaCatalog::Movies, &data).await
}

/// TV streaming platforms
#[utoipa::path(
    get,
    path = "/api/tv-platforms",
    tag = "platforms",
    responses(
        (status = 200, description = "Platforms ranked by series count, `series_count` per entry"),
    )
)]
#[get("/api/tv-platforms")]
pub async fn get_tv_platforms_handler(data: web::Data<AppState>) -> HttpResponse {
    platforms_response(MediaCatalog::TvSeries, &data).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::platform::application::domain::entities::{
        static_platforms, PlatformSource, PlatformSummary, STATIC_NOTICE,
    };
    use crate::modules::platform::application::ports::incoming::use_cases::GetPlatformsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::header, http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    struct MockGetPlatforms(PlatformListing);

    #[async_trait]
    impl GetPlatformsUseCase for MockGetPlatforms {
        async fn execute(&self, _catalog: MediaCatalog) -> PlatformListing {
            self.0.clone()
        }
    }

    fn live_listing() -> PlatformListing {
        PlatformListing {
            platforms: vec![
                PlatformSummary::new("netflix", "netflix", 10),
                PlatformSummary::new("hbo", "hbo", 4),
            ],
            source: PlatformSource::Database,
            notice: None,
        }
    }

    #[actix_web::test]
    async fn test_movie_platforms() {
        let state = TestAppStateBuilder::default()
            .with_get_platforms(MockGetPlatforms(live_listing()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_movie_platforms_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/platforms").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            PLATFORM_CACHE_CONTROL
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["count"], 2);
        assert_eq!(body["data"]["source"], "database");
        assert_eq!(body["data"]["platforms"][0]["movie_count"], 10);
        assert_eq!(body["data"]["platforms"][0]["display_name"], "Netflix");
        assert!(body["data"].get("notice").is_none());
    }

    #[actix_web::test]
    async fn test_tv_platforms_use_series_count() {
        let state = TestAppStateBuilder::default()
            .with_get_platforms(MockGetPlatforms(live_listing()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_tv_platforms_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/tv-platforms").to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["platforms"][1]["series_count"], 4);
        assert!(body["data"]["platforms"][1].get("movie_count").is_none());
    }

    #[actix_web::test]
    async fn test_static_listing_still_200_with_notice() {
        let state = TestAppStateBuilder::default()
            .with_get_platforms(MockGetPlatforms(PlatformListing {
                platforms: static_platforms(MediaCatalog::Movies),
                source: PlatformSource::Static,
                notice: Some(STATIC_NOTICE.to_string()),
            }))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_movie_platforms_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/platforms").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["count"], 6);
        assert_eq!(body["data"]["source"], "static");
        assert_eq!(body["data"]["notice"], STATIC_NOTICE);
        assert_eq!(body["data"]["platforms"][0]["platform_id"], "adjaranet");
    }
}
