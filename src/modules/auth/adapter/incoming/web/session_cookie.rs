use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Debug, Clone, Copy)]
pub struct SessionCookieConfig {
    pub secure: bool,
    pub max_age_secs: i64,
}

impl SessionCookieConfig {
    pub fn issue(&self, token: String) -> Cookie<'static> {
        Cookie::build(AUTH_COOKIE, token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::seconds(self.max_age_secs))
            .finish()
    }

    /// Empty value with `Max-Age=0` and an expiry in the past.
    pub fn clear(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(AUTH_COOKIE, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

pub fn session_token(req: &HttpRequest) -> Option<String> {
    req.cookie(AUTH_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}
