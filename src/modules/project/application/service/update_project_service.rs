use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::project_cache::invalidate_project;
use crate::modules::project::application::domain::entities::ProjectUpdate;
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::cache::CacheStore;
use crate::shared::locale::Locale;

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    cache: Arc<dyn CacheStore>,
}

impl<R> UpdateProjectService<R>
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
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: &str,
        locale: Locale,
        update: ProjectUpdate,
    ) -> Result<(), UpdateProjectError> {
        let changed = !update.is_empty();

        self.project_repository
            .update(id, locale, update)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::SlugAlreadyExists => UpdateProjectError::RepositoryError(
                    "unexpected slug conflict while updating project".to_string(),
                ),
            })?;

        if changed {
            invalidate_project(self.cache.as_ref(), id).await;
            info!(project_id = %id, locale = %locale, "Project updated");
        } else {
            debug!(project_id = %id, "Update carried no recognised fields");
        }

        Ok(())
    }
}
