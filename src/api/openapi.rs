use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, LogoutResponseBody};
use crate::auth::adapter::incoming::web::session_cookie::AUTH_COOKIE;
use crate::modules::project::adapter::incoming::web::routes::{CreateProjectDto, MessageResponse};
use crate::modules::project::application::domain::entities::{Floor, Image, ProjectView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Draftwork API",
        version = "1.0.0",
        description = "Multi-locale project catalogue and streaming platform facet"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,
        crate::auth::adapter::incoming::web::routes::check_session_handler,
        crate::auth::adapter::incoming::web::routes::public_setup_handler,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Platform endpoints
        crate::modules::platform::adapter::incoming::web::routes::get_movie_platforms_handler,
        crate::modules::platform::adapter::incoming::web::routes::get_tv_platforms_handler,
        crate::modules::platform::adapter::incoming::web::routes::revalidate_movie_platforms_handler,
        crate::modules::platform::adapter::incoming::web::routes::revalidate_tv_platforms_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LogoutResponseBody,

            // Project DTOs
            ProjectView,
            Floor,
            Image,
            CreateProjectDto,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "projects", description = "Project catalogue endpoints"),
        (name = "platforms", description = "Streaming platform facet endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "CookieAuth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    AUTH_COOKIE,
                    "Session token set by /api/auth/login",
                ))),
            )
        }
    }
}
