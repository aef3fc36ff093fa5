use actix_web::{routes, web, HttpResponse};
use tracing::{error, info};

use super::locale_params::ProjectPath;
use super::update_project::MessageResponse;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project and all of its translations
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("CookieAuth" = [])),
    params(("id" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
    )
)]
#[routes]
#[delete("/api/projects/{id}")]
#[delete("/{locale}/api/projects/{id}")]
pub async fn delete_project_handler(
    session: AdminSession,
    path: web::Path<ProjectPath>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.project.delete.execute(&path.id).await {
        Ok(()) => {
            info!(admin_id = session.admin_id, project_id = %path.id, "Project deleted");
            ApiResponse::success(MessageResponse::new("Project deleted"))
        }
        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(DeleteProjectError::RepositoryError(e)) => {
            error!(project_id = %path.id, error = %e, "Failed to delete project");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{session_cookie_for, test_token_provider};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct MockDeleteProject {
        result: Result<(), DeleteProjectError>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl MockDeleteProject {
        fn new(result: Result<(), DeleteProjectError>) -> Self {
            Self {
                result,
                seen: Arc::default(),
            }
        }
    }

    #[async_trait]
    impl DeleteProjectUseCase for MockDeleteProject {
        async fn execute(&self, id: &str) -> Result<(), DeleteProjectError> {
            self.seen.lock().unwrap().push(id.to_string());
            self.result.clone()
        }
    }

    macro_rules! delete_app {
        ($mock:expr) => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().with_delete_project($mock).build())
                    .app_data(web::Data::new(test_token_provider()))
                    .service(delete_project_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_delete_success() {
        let mock = MockDeleteProject::new(Ok(()));
        let app = delete_app!(mock.clone());

        let req = test::TestRequest::delete()
            .uri("/ka/api/projects/villa-1")
            .cookie(session_cookie_for(1))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Project deleted");
        assert_eq!(*mock.seen.lock().unwrap(), vec!["villa-1".to_string()]);
    }

    #[actix_web::test]
    async fn test_delete_not_found() {
        let app = delete_app!(MockDeleteProject::new(Err(DeleteProjectError::NotFound)));

        let req = test::TestRequest::delete()
            .uri("/api/projects/missing")
            .cookie(session_cookie_for(1))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_requires_session() {
        let mock = MockDeleteProject::new(Ok(()));
        let app = delete_app!(mock.clone());

        let req = test::TestRequest::delete()
            .uri("/api/projects/villa-1")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(mock.seen.lock().unwrap().is_empty());
    }
}
