use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::AdminIdentity;
use crate::auth::application::ports::outgoing::{AdminQuery, PasswordHasher, TokenProvider};

// ========================= Login Request =========================
/// Validated login request: both fields are non-blank.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username and password are required")]
    MissingCredentials,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim().to_string();

        if username.is_empty() || password.trim().is_empty() {
            return Err(LoginRequestError::MissingCredentials);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone)]
pub struct LoginAdminResponse {
    pub token: String,
    pub admin: AdminIdentity,
}

// ============================ Login Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

pub struct LoginAdminUseCase<Q>
where
    Q: AdminQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginAdminUseCase<Q>
where
    Q: AdminQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginAdminUseCase for LoginAdminUseCase<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        let admin = self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &admin.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let identity = AdminIdentity::from(&admin);
        let token = self
            .token_provider
            .issue_session_token(&identity)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResponse {
            token,
            admin: identity,
        })
    }
}
