// src/config.rs
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct DbPoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

/// Credentials for the one-shot admin bootstrap endpoint.
#[derive(Debug, Clone)]
pub struct AdminSetupConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: Option<String>,
    pub db_pool: DbPoolConfig,
    pub project_cache_ttl: Duration,
    pub platform_cache_ttl: Duration,
    pub admin_setup: Option<AdminSetupConfig>,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` (falling back to `.env`) into the process
    /// environment. Existing variables are not overwritten.
    pub fn load_dotenv() {
        let env = rust_env();
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = required(&lookup, "HOST")?;
        let port = parse_required(&lookup, "PORT")?;
        let database_url = required(&lookup, "DATABASE_URL")?;
        let redis_url = optional(&lookup, "REDIS_URL");

        let db_pool = DbPoolConfig {
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 20)?,
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 1)?,
            connect_timeout: Duration::from_secs(parse_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", 5)?),
            idle_timeout: Duration::from_secs(parse_or(&lookup, "DB_IDLE_TIMEOUT_SECS", 30)?),
        };

        if db_pool.min_connections > db_pool.max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        let project_cache_ttl =
            Duration::from_secs(parse_or(&lookup, "PROJECT_CACHE_TTL_SECS", 3600)?);
        let platform_cache_ttl =
            Duration::from_secs(parse_or(&lookup, "PLATFORM_CACHE_TTL_SECS", 3600)?);

        let admin_setup = match (
            optional(&lookup, "ADMIN_USERNAME"),
            optional(&lookup, "ADMIN_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some(AdminSetupConfig { username, password }),
            _ => None,
        };

        let is_production = lookup("RUST_ENV").as_deref() == Some("production");
        let cookie_secure = parse_or(&lookup, "COOKIE_SECURE", is_production)?;

        Ok(Self {
            host,
            port,
            database_url,
            redis_url,
            db_pool,
            project_cache_ttl,
            platform_cache_ttl,
            admin_setup,
            cookie_secure,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn rust_env() -> String {
    env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
}

fn optional<F>(lookup: &F, key: &'static str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or(ConfigError::Missing(key))
}

fn parse_required<F, T>(lookup: &F, key: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = required(lookup, key)?;
    parse_value(key, &raw)
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(lookup, key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}
