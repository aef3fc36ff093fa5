use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteProjectError>;
}
