// src/middleware/request_gate.rs
use actix_web::body::{BoxBody, MessageBody};
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::{web, Error};
use tracing::{debug, error, warn};

use super::negotiation::{negotiate_locale, LOCALE_COOKIE};
use crate::auth::adapter::incoming::web::session_cookie::AUTH_COOKIE;
use crate::auth::application::ports::outgoing::SharedTokenProvider;
use crate::shared::api::ApiResponse;
use crate::shared::locale::{Locale, DEFAULT_LOCALE};

/// API prefixes reachable without a session. Writes behind them are still
/// guarded by the `AdminSession` extractor.
const PUBLIC_API_PREFIXES: [&str; 6] = [
    "/api/projects",
    "/api/platforms",
    "/api/tv-platforms",
    "/api/auth/login",
    "/api/auth/logout",
    "/api/public-setup",
];

const EXEMPT_PATHS: [&str; 2] = ["/health", "/ready"];

const EXEMPT_PREFIXES: [&str; 4] = ["/static/", "/_next/", "/swagger-ui", "/api-docs"];

const LOCALE_COOKIE_MAX_AGE_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    /// Continue, and remember the locale the visitor is browsing in.
    ContinueWithLocale(Locale),
    Redirect(String),
    Unauthorized,
}

#[derive(Debug, Clone, Default)]
pub struct GateRequest<'a> {
    pub path: &'a str,
    pub query: &'a str,
    pub locale_cookie: Option<&'a str>,
    pub accept_language: Option<&'a str>,
}

/// Decide what happens to a request before routing. `is_authenticated` is
/// only consulted for guarded paths.
pub fn decide<F>(req: &GateRequest<'_>, is_authenticated: F) -> GateDecision
where
    F: FnOnce() -> bool,
{
    let path = req.path;

    if is_exempt(path) {
        return GateDecision::Continue;
    }

    if path == "/" {
        return GateDecision::Redirect(with_query(
            format!("/{}", DEFAULT_LOCALE),
            req.query,
        ));
    }

    if path == "/api" || path.starts_with("/api/") {
        if is_public_api(path) || is_authenticated() {
            return GateDecision::Continue;
        }
        return GateDecision::Unauthorized;
    }

    let segments: Vec<&str> = path.split('/').skip(1).collect();
    let prefix = segments.first().and_then(|s| Locale::from_segment(s));

    if let Some(login_path) = admin_login_path(&segments, prefix) {
        if !is_authenticated() {
            return GateDecision::Redirect(login_path);
        }
    }

    if is_asset(path) {
        return GateDecision::Continue;
    }

    if let Some(locale) = prefix {
        if segments.get(1).copied() == Some(locale.as_str()) {
            let rest = segments[2..].join("/");
            let corrected = if rest.is_empty() {
                format!("/{}", locale)
            } else {
                format!("/{}/{}", locale, rest)
            };
            return GateDecision::Redirect(with_query(corrected, req.query));
        }

        if segments.get(1).copied() == Some("api") {
            return GateDecision::Continue;
        }

        if req.locale_cookie.and_then(Locale::parse) == Some(locale) {
            return GateDecision::Continue;
        }
        return GateDecision::ContinueWithLocale(locale);
    }

    let locale = negotiate_locale(req.locale_cookie, req.accept_language);
    GateDecision::Redirect(with_query(format!("/{}{}", locale, path), req.query))
}

fn is_exempt(path: &str) -> bool {
    EXEMPT_PATHS.contains(&path) || EXEMPT_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// favicon.ico, robots.txt, /images/plan.png. Never consulted for API or
/// admin paths.
fn is_asset(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|last| last.contains('.'))
}

fn is_public_api(path: &str) -> bool {
    PUBLIC_API_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Login page to bounce to when `segments` address the admin area.
fn admin_login_path(segments: &[&str], prefix: Option<Locale>) -> Option<String> {
    match (prefix, segments) {
        (Some(locale), [_, "admin", ..]) => Some(format!("/{}/login", locale)),
        (None, ["admin", ..]) => Some(format!("/{}/login", DEFAULT_LOCALE)),
        _ => None,
    }
}

fn with_query(path: String, query: &str) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    }
}

fn has_valid_session(req: &ServiceRequest) -> bool {
    let Some(token) = req.cookie(AUTH_COOKIE) else {
        return false;
    };

    match req.app_data::<web::Data<SharedTokenProvider>>() {
        Some(provider) => provider.verify_token(token.value()).is_ok(),
        None => {
            error!("Token provider is not registered as app data");
            false
        }
    }
}

fn locale_cookie(locale: Locale) -> Cookie<'static> {
    Cookie::build(LOCALE_COOKIE, locale.as_str())
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(LOCALE_COOKIE_MAX_AGE_DAYS))
        .finish()
}

/// Locale and auth gate wrapped around the whole app.
pub async fn request_gate(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let remembered = req.cookie(LOCALE_COOKIE);
    let accept_language = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    let gate = GateRequest {
        path: req.path(),
        query: req.query_string(),
        locale_cookie: remembered.as_ref().map(|c| c.value()),
        accept_language,
    };

    let decision = decide(&gate, || has_valid_session(&req));

    match decision {
        GateDecision::Continue => Ok(next.call(req).await?.map_into_boxed_body()),
        GateDecision::ContinueWithLocale(locale) => {
            let mut res = next.call(req).await?;
            if let Err(e) = res.response_mut().add_cookie(&locale_cookie(locale)) {
                warn!(error = %e, "Failed to set locale cookie");
            }
            Ok(res.map_into_boxed_body())
        }
        GateDecision::Redirect(location) => {
            debug!(from = %req.path(), to = %location, "Request gate redirect");
            Ok(req.into_response(ApiResponse::redirect(&location)))
        }
        GateDecision::Unauthorized => {
            debug!(path = %req.path(), "Request gate rejected unauthenticated API call");
            Ok(req.into_response(ApiResponse::unauthorized(
                "UNAUTHORIZED",
                "Authentication required",
            )))
        }
    }
}
