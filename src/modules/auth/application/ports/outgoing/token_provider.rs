use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::AdminIdentity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token issued by an unknown issuer")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims carried by the `auth_token` session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: i32, // admin_id
    pub username: String,
    pub iss: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            admin_id: self.sub,
            username: self.username.clone(),
        }
    }
}

pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, admin: &AdminIdentity) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
    /// Lifetime of an issued token, also used as the cookie `Max-Age`.
    fn session_ttl_secs(&self) -> i64;
}

/// Shape under which the provider is registered as actix app data.
pub type SharedTokenProvider = std::sync::Arc<dyn TokenProvider>;
