use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use mongodb::bson::oid::ObjectId;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::parse_session_token;

/// Name of the session cookie carrying the signed token.
pub const SESSION_COOKIE: &str = "token";

/// Extractor that validates the session cookie and provides the
/// authenticated user's claims. Validation is stateless and repeated on
/// every request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn user_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.0.sub).map_err(|_| {
            AppError::unauthorized(anyhow::anyhow!("Invalid user ID in session token"))
        })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let cookie = jar
            .get(SESSION_COOKIE)
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Missing session token")))?;

        let claims =
            parse_session_token(cookie.value(), &state.jwt_config).map_err(AppError::unauthorized)?;

        Ok(AuthUser(claims))
    }
}
