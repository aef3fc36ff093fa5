use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::domain::entities::{slugify, NewProject, ProjectView};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectRequest, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::locale::Locale;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

fn to_new_project(request: CreateProjectRequest) -> Result<NewProject, CreateProjectError> {
    let title = request.title.trim().to_string();
    if title.is_empty() {
        return Err(CreateProjectError::Validation(
            "Project title is required".to_string(),
        ));
    }

    let id = match request.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => slugify(id),
        _ => slugify(&title),
    };
    if id.is_empty() {
        return Err(CreateProjectError::Validation(
            "Project id could not be derived from the title".to_string(),
        ));
    }

    Ok(NewProject {
        id,
        title,
        short_description: request.short_description,
        location: request.location,
        function: request.function,
        area: request.area,
        year: request.year,
        description: request.description,
        floors: request.floors,
        images: request.images,
        thumbnail: request.thumbnail,
    })
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: CreateProjectRequest,
        locale: Locale,
    ) -> Result<ProjectView, CreateProjectError> {
        let project = to_new_project(request)?;

        self.project_repository
            .create(project.clone(), locale)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::SlugAlreadyExists => CreateProjectError::SlugAlreadyExists,
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::NotFound => CreateProjectError::RepositoryError(
                    "unexpected not found while creating project".to_string(),
                ),
            })?;

        info!(project_id = %project.id, locale = %locale, "Project created");

        Ok(ProjectView::from(project))
    }
}
