// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::shared::locale::Locale;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side: base rows merged with the requested locale's overlay.
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn get(&self, id: &str, locale: Locale) -> Result<ProjectView, ProjectQueryError>;

    /// Newest first.
    async fn list(&self, locale: Locale) -> Result<Vec<ProjectView>, ProjectQueryError>;
}
