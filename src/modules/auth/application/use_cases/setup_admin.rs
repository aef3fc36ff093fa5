use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::admin_repository::CreateAdminData;
use crate::auth::application::ports::outgoing::{
    AdminQuery, AdminRepository, AdminRepositoryError, PasswordHasher,
};
use crate::config::AdminSetupConfig;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetupAdminError {
    #[error("ADMIN_USERNAME and ADMIN_PASSWORD are not configured")]
    NotConfigured,

    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupAdminResponse {
    pub created: bool,
    pub username: String,
}

#[async_trait]
pub trait ISetupAdminUseCase: Send + Sync {
    async fn execute(&self) -> Result<SetupAdminResponse, SetupAdminError>;
}

/// Idempotent bootstrap of the configured admin account.
pub struct SetupAdminUseCase<Q, R>
where
    Q: AdminQuery,
    R: AdminRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    setup: Option<AdminSetupConfig>,
}

impl<Q, R> SetupAdminUseCase<Q, R>
where
    Q: AdminQuery,
    R: AdminRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        setup: Option<AdminSetupConfig>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            setup,
        }
    }
}

#[async_trait]
impl<Q, R> ISetupAdminUseCase for SetupAdminUseCase<Q, R>
where
    Q: AdminQuery + Send + Sync,
    R: AdminRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SetupAdminResponse, SetupAdminError> {
        let setup = self.setup.as_ref().ok_or(SetupAdminError::NotConfigured)?;
        let username = setup.username.trim().to_string();

        let existing = self
            .query
            .find_by_username(&username)
            .await
            .map_err(|e| SetupAdminError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Ok(SetupAdminResponse {
                created: false,
                username,
            });
        }

        let password_hash = self
            .password_hasher
            .hash_password(&setup.password)
            .await
            .map_err(|e| SetupAdminError::HashFailed(e.to_string()))?;

        match self
            .repository
            .create_admin(CreateAdminData {
                username: username.clone(),
                password_hash,
            })
            .await
        {
            Ok(admin) => {
                tracing::info!(admin_id = admin.admin_id, "Admin account created");
                Ok(SetupAdminResponse {
                    created: true,
                    username,
                })
            }
            // Lost a race with a concurrent setup call
            Err(AdminRepositoryError::UsernameTaken) => Ok(SetupAdminResponse {
                created: false,
                username,
            }),
            Err(AdminRepositoryError::DatabaseError(msg)) => {
                Err(SetupAdminError::RepositoryError(msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::{
        sample_admin_account, FakeAdminQuery, FakeAdminRepository, FakePasswordHasher,
    };

    fn setup_config() -> Option<AdminSetupConfig> {
        Some(AdminSetupConfig {
            username: "admin".to_string(),
            password: "draftwork-pass".to_string(),
        })
    }

    #[tokio::test]
    async fn test_not_configured() {
        let uc = SetupAdminUseCase::new(
            FakeAdminQuery::empty(),
            FakeAdminRepository::default(),
            Arc::new(FakePasswordHasher::verifying(true)),
            None,
        );

        assert!(matches!(
            uc.execute().await,
            Err(SetupAdminError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_creates_missing_admin() {
        let repo = FakeAdminRepository::default();
        let uc = SetupAdminUseCase::new(
            FakeAdminQuery::empty(),
            repo.clone(),
            Arc::new(FakePasswordHasher::verifying(true)),
            setup_config(),
        );

        let response = uc.execute().await.unwrap();

        assert!(response.created);
        assert_eq!(response.username, "admin");
        let created = repo.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].password_hash, "hashed:draftwork-pass");
    }

    #[tokio::test]
    async fn test_existing_admin_is_left_alone() {
        let repo = FakeAdminRepository::default();
        let uc = SetupAdminUseCase::new(
            FakeAdminQuery::with(sample_admin_account()),
            repo.clone(),
            Arc::new(FakePasswordHasher::verifying(true)),
            setup_config(),
        );

        let response = uc.execute().await.unwrap();

        assert!(!response.created);
        assert!(repo.created().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creation_is_not_an_error() {
        let uc = SetupAdminUseCase::new(
            FakeAdminQuery::empty(),
            FakeAdminRepository::taken(),
            Arc::new(FakePasswordHasher::verifying(true)),
            setup_config(),
        );

        let response = uc.execute().await.unwrap();

        assert!(!response.created);
    }
}
