use std::env;

use crate::config::ConfigError;

const MAX_SESSION_EXPIRY: i64 = 7 * 24 * 3600;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let session_expiry = match lookup("JWT_SESSION_EXPIRY") {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| ConfigError::Invalid {
                key: "JWT_SESSION_EXPIRY",
                reason: e.to_string(),
            })?,
            None => 86400,
        };

        if session_expiry <= 0 || session_expiry > MAX_SESSION_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_SESSION_EXPIRY",
                reason: format!("must be between 1 and {} seconds", MAX_SESSION_EXPIRY),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "draftwork".to_string());

        Ok(Self {
            secret_key,
            issuer,
            session_expiry,
        })
    }
}
