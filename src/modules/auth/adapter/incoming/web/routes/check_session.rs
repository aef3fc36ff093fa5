use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::auth::application::use_cases::check_session::CheckSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse};
use tracing::{error, warn};

/// Session check
///
/// Confirms the cookie is valid and the admin still exists.
#[utoipa::path(
    get,
    path = "/api/auth/check",
    tag = "auth",
    security(("CookieAuth" = [])),
    responses(
        (status = 200, description = "Session is valid"),
        (status = 401, description = "Missing, invalid or stale session", body = ErrorResponse),
    )
)]
#[get("/api/auth/check")]
pub async fn check_session_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.auth.check_session.execute(session.admin_id).await {
        Ok(identity) => ApiResponse::success(identity),
        Err(CheckSessionError::InvalidSession) => {
            warn!(admin_id = session.admin_id, "Session refers to a removed admin");
            ApiResponse::unauthorized("INVALID_SESSION", "Session is no longer valid")
        }
        Err(CheckSessionError::QueryError(e)) => {
            error!(error = %e, "Session check failed");
            ApiResponse::internal_error()
        }
    }
}
