use actix_web::{routes, web, HttpResponse};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::locale_params::{resolve_locale, LocalePath, LocaleQuery};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::domain::entities::{Floor, Image, ProjectView};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateProjectDto {
    /// Slug; derived from the title when omitted.
    pub id: Option<String>,
    pub title: String,
    #[serde(alias = "shortDescription")]
    pub short_description: Option<String>,
    pub location: Option<String>,
    pub function: Option<String>,
    pub area: Option<String>,
    pub year: Option<String>,
    pub description: Vec<String>,
    pub floors: Vec<Floor>,
    pub images: Vec<Image>,
    pub thumbnail: Option<String>,
}

impl From<CreateProjectDto> for CreateProjectRequest {
    fn from(dto: CreateProjectDto) -> Self {
        CreateProjectRequest {
            id: dto.id,
            title: dto.title,
            short_description: dto.short_description,
            location: dto.location,
            function: dto.function,
            area: dto.area,
            year: dto.year,
            description: dto.description,
            floors: dto.floors,
            images: dto.images,
            thumbnail: dto.thumbnail,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a project
///
/// Writes the base row, plus a translation when the locale is not `ka`.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    security(("CookieAuth" = [])),
    params(LocaleQuery),
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = ProjectView),
        (status = 400, description = "Missing title or malformed body", body = ErrorResponse),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
    )
)]
#[routes]
#[post("/api/projects")]
#[post("/{locale}/api/projects")]
pub async fn create_project_handler(
    session: AdminSession,
    path: web::Path<LocalePath>,
    query: web::Query<LocaleQuery>,
    body: web::Json<CreateProjectDto>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let locale = match resolve_locale(path.locale.as_deref(), &query) {
        Ok(locale) => locale,
        Err(resp) => return resp,
    };

    match data
        .project
        .create
        .execute(body.into_inner().into(), locale)
        .await
    {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::Validation(message)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &message)
        }

        Err(CreateProjectError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Project slug already exists")
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!(admin_id = session.admin_id, error = %e, "Repository error creating project");
            ApiResponse::internal_error()
        }
    }
}
