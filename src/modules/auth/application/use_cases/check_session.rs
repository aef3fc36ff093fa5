use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminIdentity;
use crate::auth::application::ports::outgoing::AdminQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckSessionError {
    /// Token was valid but the admin it names no longer exists.
    #[error("Session refers to an unknown admin")]
    InvalidSession,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ICheckSessionUseCase: Send + Sync {
    async fn execute(&self, admin_id: i32) -> Result<AdminIdentity, CheckSessionError>;
}

pub struct CheckSessionUseCase<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> CheckSessionUseCase<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ICheckSessionUseCase for CheckSessionUseCase<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self, admin_id: i32) -> Result<AdminIdentity, CheckSessionError> {
        let admin = self
            .query
            .find_by_id(admin_id)
            .await
            .map_err(|e| CheckSessionError::QueryError(e.to_string()))?
            .ok_or(CheckSessionError::InvalidSession)?;

        Ok(AdminIdentity::from(&admin))
    }
}
