// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{NewProject, ProjectUpdate};
use crate::shared::locale::Locale;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    /// No base row with that id.
    #[error("Project not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Write side over `properties` and `property_translations`.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Inserts the base row and, for a non-base locale, a translation row
    /// carrying the same title and short description.
    async fn create(&self, project: NewProject, locale: Locale)
        -> Result<(), ProjectRepositoryError>;

    /// Applies the present fields to the base row and upserts the locale's
    /// translation when translatable fields are present. An empty update
    /// only checks that the project exists.
    async fn update(
        &self,
        id: &str,
        locale: Locale,
        update: ProjectUpdate,
    ) -> Result<(), ProjectRepositoryError>;

    /// Removes translations, then the base row.
    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError>;
}
