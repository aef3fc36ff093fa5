use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from the admin UI
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[serde(default)]
    #[schema(example = "admin")]
    pub username: String,

    #[serde(default)]
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Admin login
///
/// Verifies the credentials and sets the `auth_token` session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful, session cookie set"),
        (status = 400, description = "Username or password missing", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("MISSING_CREDENTIALS", &e.to_string()),
    };

    info!(username = %request.username(), "Login attempt");

    match data.auth.login.execute(request).await {
        Ok(response) => {
            info!(admin_id = response.admin.admin_id, "Admin logged in");

            let mut res = ApiResponse::success(response.admin);
            if let Err(e) = res.add_cookie(&data.session_cookie.issue(response.token)) {
                error!(error = %e, "Failed to attach session cookie");
                return ApiResponse::internal_error();
            }
            res
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("Login rejected: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
