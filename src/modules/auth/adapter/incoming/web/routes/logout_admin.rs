use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Admin logout
///
/// Clears the session cookie. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses((status = 200, description = "Session cookie cleared"))
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(data: web::Data<AppState>) -> HttpResponse {
    info!("Admin logout");

    let mut res = ApiResponse::success(LogoutResponseBody {
        message: "Logged out successfully".to_string(),
    });
    if let Err(e) = res.add_cookie(&data.session_cookie.clear()) {
        error!(error = %e, "Failed to clear session cookie");
        return ApiResponse::internal_error();
    }
    res
}
