use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminAccount;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminQuery: Send + Sync {
    async fn find_by_username(&self, username: &str)
        -> Result<Option<AdminAccount>, AdminQueryError>;

    async fn find_by_id(&self, admin_id: i32) -> Result<Option<AdminAccount>, AdminQueryError>;
}
