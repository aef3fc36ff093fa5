use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminAccount;

#[derive(Debug, Clone)]
pub struct CreateAdminData {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create_admin(&self, data: CreateAdminData)
        -> Result<AdminAccount, AdminRepositoryError>;
}
