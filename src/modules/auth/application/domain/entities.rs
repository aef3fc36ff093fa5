use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stored admin account. `password_hash` is a PHC string.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub admin_id: i32,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Who is behind a valid session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminIdentity {
    pub admin_id: i32,
    pub username: String,
}

impl From<&AdminAccount> for AdminIdentity {
    fn from(account: &AdminAccount) -> Self {
        Self {
            admin_id: account.admin_id,
            username: account.username.clone(),
        }
    }
}
