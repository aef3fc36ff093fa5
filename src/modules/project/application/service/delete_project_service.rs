use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::project_cache::invalidate_project;
use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::cache::CacheStore;

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    cache: Arc<dyn CacheStore>,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            project_repository,
            cache,
        }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<(), DeleteProjectError> {
        self.project_repository
            .delete(id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    DeleteProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::SlugAlreadyExists => DeleteProjectError::RepositoryError(
                    "unexpected slug conflict while deleting project".to_string(),
                ),
            })?;

        invalidate_project(self.cache.as_ref(), id).await;
        info!(project_id = %id, "Project deleted");

        Ok(())
    }
}
