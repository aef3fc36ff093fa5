use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::outgoing::ProjectQueryError;
use crate::shared::locale::Locale;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => GetProjectsError::QueryFailed(msg),
            ProjectQueryError::NotFound => GetProjectsError::QueryFailed("Not found".to_string()),
        }
    }
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, locale: Locale) -> Result<Vec<ProjectView>, GetProjectsError>;
}
