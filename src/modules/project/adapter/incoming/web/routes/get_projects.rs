use actix_web::{routes, web, HttpResponse};
use tracing::error;

use super::locale_params::{resolve_locale, LocalePath, LocaleQuery};
use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List projects
///
/// Every project in the requested locale, newest first. Also served under
/// `/{locale}/api/projects`.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(LocaleQuery),
    responses(
        (status = 200, description = "Merged project views", body = [ProjectView]),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
#[routes]
#[get("/api/projects")]
#[get("/{locale}/api/projects")]
pub async fn get_projects_handler(
    path: web::Path<LocalePath>,
    query: web::Query<LocaleQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let locale = match resolve_locale(path.locale.as_deref(), &query) {
        Ok(locale) => locale,
        Err(resp) => return resp,
    };

    match data.project.get_list.execute(locale).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(GetProjectsError::QueryFailed(e)) => {
            error!(locale = %locale, error = %e, "Failed to list projects");
            ApiResponse::internal_error()
        }
    }
}
