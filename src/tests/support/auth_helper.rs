use std::sync::Arc;

use actix_web::cookie::Cookie;

use crate::auth::adapter::incoming::web::session_cookie::AUTH_COOKIE;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::AdminIdentity;
use crate::auth::application::ports::outgoing::{SharedTokenProvider, TokenProvider};

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123".to_string(),
        issuer: "draftwork-test".to_string(),
        session_expiry: 3600,
    })
}

/// Provider to register as `web::Data<SharedTokenProvider>` in test apps.
pub fn test_token_provider() -> SharedTokenProvider {
    Arc::new(test_jwt_service())
}

/// Session cookie for admin `admin_id`, signed with the test secret.
pub fn session_cookie_for(admin_id: i32) -> Cookie<'static> {
    let token = test_jwt_service()
        .issue_session_token(&AdminIdentity {
            admin_id,
            username: "admin".to_string(),
        })
        .expect("test token");

    Cookie::new(AUTH_COOKIE, token)
}
