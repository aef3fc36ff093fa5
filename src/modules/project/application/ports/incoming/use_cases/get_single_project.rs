use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::shared::locale::Locale;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str, locale: Locale)
        -> Result<ProjectView, GetSingleProjectError>;
}
