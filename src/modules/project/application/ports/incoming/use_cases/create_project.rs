use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Floor, Image, ProjectView};
use crate::shared::locale::Locale;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    /// Message is shown to the admin as is.
    #[error("{0}")]
    Validation(String),

    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Fields submitted by the admin form. `id` is derived from the title when
/// absent.
#[derive(Debug, Clone, Default)]
pub struct CreateProjectRequest {
    pub id: Option<String>,
    pub title: String,
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

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        request: CreateProjectRequest,
        locale: Locale,
    ) -> Result<ProjectView, CreateProjectError>;
}
