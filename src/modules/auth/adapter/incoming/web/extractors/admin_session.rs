use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::auth::adapter::incoming::web::session_cookie::session_token;
use crate::auth::application::ports::outgoing::SharedTokenProvider;
use crate::shared::api::ApiResponse;

/// An admin holding a valid `auth_token` cookie.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: i32,
    pub username: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<SharedTokenProvider>>() {
            Some(provider) => provider,
            None => {
                tracing::error!("Token provider is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let unauthorized = || {
            create_api_error(ApiResponse::unauthorized(
                "UNAUTHORIZED",
                "Authentication required",
            ))
        };

        let token = match session_token(req) {
            Some(t) => t,
            None => return ready(Err(unauthorized())),
        };

        // Expired, forged and malformed tokens are all treated as absent
        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AdminSession {
                admin_id: claims.sub,
                username: claims.username,
            })),
            Err(_) => ready(Err(unauthorized())),
        }
    }
}
