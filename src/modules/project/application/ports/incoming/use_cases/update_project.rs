use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectUpdate;
use crate::shared::locale::Locale;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        locale: Locale,
        update: ProjectUpdate,
    ) -> Result<(), UpdateProjectError>;
}
