use actix_web::{http::StatusCode, post, web, HttpResponse};
use tracing::error;

use crate::modules::platform::application::domain::entities::MediaCatalog;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn revalidate(catalog: MediaCatalog, data: &AppState) -> HttpResponse {
    match data.platform.revalidate.execute(catalog).await {
        Ok(revalidated) => ApiResponse::success(revalidated),
        Err(e) => {
            error!(catalog = %catalog, error = %e, "Platform revalidation failed");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "REVALIDATE_FAILED",
                &e.to_string(),
            )
        }
    }
}

/// Drop the cached movie platform facet
#[utoipa::path(
    post,
    path = "/api/platforms",
    tag = "platforms",
    responses(
        (status = 200, description = "`{revalidated: true, now}` with `now` in unix milliseconds"),
        (status = 500, description = "Cache could not be cleared", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/platforms")]
pub async fn revalidate_movie_platforms_handler(data: web::Data<AppState>) -> HttpResponse {
    revalidate(MediaCatalog::Movies, &data).await
}

/// Drop the cached TV platform facet
#[utoipa::path(
    post,
    path = "/api/tv-platforms",
    tag = "platforms",
    responses(
        (status = 200, description = "`{revalidated: true, now}` with `now` in unix milliseconds"),
        (status = 500, description = "Cache could not be cleared", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/tv-platforms")]
pub async fn revalidate_tv_platforms_handler(data: web::Data<AppState>) -> HttpResponse {
    revalidate(MediaCatalog::TvSeries, &data).await
}
