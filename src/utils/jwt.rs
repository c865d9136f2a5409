use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use mongodb::bson::oid::ObjectId;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::modules::users::model::Role;
use crate::utils::errors::AppError;

/// Why parsing a session token failed. The middleware collapses all of these
/// into 401, but callers that care can tell an expired session apart from a
/// forged or garbled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("session token has expired")]
    Expired,
    #[error("session token signature is invalid")]
    InvalidSignature,
    #[error("session token is malformed")]
    Malformed,
}

pub fn create_session_token(
    user_id: ObjectId,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.session_ttl as usize;

    let claims = Claims {
        sub: user_id.to_hex(),
        role,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create session token: {}", e)))
}

/// Validates the signature and expiry, and deserializes the role claim into
/// the closed [`Role`] enum. A token carrying an unknown role is rejected as
/// malformed rather than passed through as an untyped string.
pub fn parse_session_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })
}
