use crate::auth::application::use_cases::setup_admin::SetupAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse};
use tracing::{error, info};

/// Admin bootstrap
///
/// Creates the configured admin account when it does not exist yet.
#[utoipa::path(
    get,
    path = "/api/public-setup",
    tag = "auth",
    responses(
        (status = 200, description = "Setup ran; `created` tells whether an account was added"),
        (status = 400, description = "ADMIN_USERNAME / ADMIN_PASSWORD not configured"),
    )
)]
#[get("/api/public-setup")]
pub async fn public_setup_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.auth.setup.execute().await {
        Ok(response) => {
            info!(created = response.created, "Admin setup finished");
            ApiResponse::success(response)
        }
        Err(SetupAdminError::NotConfigured) => ApiResponse::bad_request(
            "SETUP_NOT_CONFIGURED",
            "Admin setup credentials are not configured",
        ),
        Err(e) => {
            error!(error = %e, "Admin setup failed");
            ApiResponse::internal_error()
        }
    }
}
