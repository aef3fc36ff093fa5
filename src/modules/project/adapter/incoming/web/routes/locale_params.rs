use actix_web::HttpResponse;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::api::ApiResponse;
use crate::shared::locale::{Locale, BASE_LOCALE};

/// Matches both `/api/projects` and `/{locale}/api/projects`.
#[derive(Debug, Deserialize)]
pub struct LocalePath {
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectPath {
    pub locale: Option<String>,
    pub id: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocaleQuery {
    /// `en`, `ka` or `ru`. Ignored when the path carries a locale.
    pub locale: Option<String>,
}

/// Route locale wins over `?locale=`; an absent or unknown query value
/// means the base locale. An unknown route locale is a 404.
pub fn resolve_locale(path_locale: Option<&str>, query: &LocaleQuery) -> Result<Locale, HttpResponse> {
    if let Some(segment) = path_locale {
        return Locale::from_segment(segment)
            .ok_or_else(|| ApiResponse::not_found("ROUTE_NOT_FOUND", "Unsupported locale"));
    }

    Ok(query
        .locale
        .as_deref()
        .and_then(Locale::parse)
        .unwrap_or(BASE_LOCALE))
}
