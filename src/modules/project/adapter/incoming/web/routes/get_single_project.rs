use actix_web::{routes, web, HttpResponse};
use tracing::error;

use super::locale_params::{resolve_locale, LocaleQuery, ProjectPath};
use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one project
///
/// Base fields with the locale's translation laid over them.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project slug"), LocaleQuery),
    responses(
        (status = 200, description = "Merged project view", body = ProjectView),
        (status = 404, description = "No such project", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
#[routes]
#[get("/api/projects/{id}")]
#[get("/{locale}/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<ProjectPath>,
    query: web::Query<LocaleQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let locale = match resolve_locale(path.locale.as_deref(), &query) {
        Ok(locale) => locale,
        Err(resp) => return resp,
    };

    match data.project.get_single.execute(&path.id, locale).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(GetSingleProjectError::RepositoryError(e)) => {
            error!(project_id = %path.id, locale = %locale, error = %e, "Failed to load project");
            ApiResponse::internal_error()
        }
    }
}
