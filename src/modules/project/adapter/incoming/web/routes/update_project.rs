use actix_web::{routes, web, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};
use utoipa::ToSchema;

use super::locale_params::{resolve_locale, LocaleQuery, ProjectPath};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::domain::entities::ProjectUpdate;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Partially update a project
///
/// Only the keys present in the body are written. Translatable fields go to
/// the locale's translation row unless the locale is `ka`.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("CookieAuth" = [])),
    params(("id" = String, Path, description = "Project slug"), LocaleQuery),
    request_body(content = Object, description = "Any subset of the project fields, snake_case keys"),
    responses(
        (status = 200, description = "Project updated", body = MessageResponse),
        (status = 400, description = "Body is not an object or a field has the wrong type", body = ErrorResponse),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
    )
)]
#[routes]
#[put("/api/projects/{id}")]
#[put("/{locale}/api/projects/{id}")]
pub async fn update_project_handler(
    session: AdminSession,
    path: web::Path<ProjectPath>,
    query: web::Query<LocaleQuery>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let locale = match resolve_locale(path.locale.as_deref(), &query) {
        Ok(locale) => locale,
        Err(resp) => return resp,
    };

    let Some(fields) = body.as_object() else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Request body must be a JSON object");
    };

    let update = match ProjectUpdate::from_json_map(fields) {
        Ok(update) => update,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.project.update.execute(&path.id, locale, update).await {
        Ok(()) => {
            info!(admin_id = session.admin_id, project_id = %path.id, locale = %locale, "Project updated");
            ApiResponse::success(MessageResponse::new("Project updated"))
        }
        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(UpdateProjectError::RepositoryError(e)) => {
            error!(project_id = %path.id, error = %e, "Failed to update project");
            ApiResponse::internal_error()
        }
    }
}
