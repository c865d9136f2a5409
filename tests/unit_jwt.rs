use fithub::config::jwt::JwtConfig;
use fithub::modules::auth::model::Claims;
use fithub::modules::users::model::Role;
use fithub::utils::jwt::{TokenError, create_session_token, parse_session_token};
use jsonwebtoken::{EncodingKey, Header, encode};
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        session_ttl: 86400,
    }
}

fn now() -> usize {
    chrono::Utc::now().timestamp() as usize
}

#[test]
fn test_create_session_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = ObjectId::new();

    let result = create_session_token(user_id, Role::User, &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_parse_round_trip_preserves_identity_and_role() {
    let jwt_config = get_test_jwt_config();
    let user_id = ObjectId::new();

    let token = create_session_token(user_id, Role::Administrator, &jwt_config).unwrap();
    let claims = parse_session_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_hex());
    assert_eq!(claims.role, Role::Administrator);
    assert_eq!(claims.exp - claims.iat, jwt_config.session_ttl as usize);
}

#[test]
fn test_parse_round_trip_user_role() {
    let jwt_config = get_test_jwt_config();
    let token = create_session_token(ObjectId::new(), Role::User, &jwt_config).unwrap();

    let claims = parse_session_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.role, Role::User);
}

#[test]
fn test_expired_token_fails_with_expired_kind() {
    let jwt_config = get_test_jwt_config();
    let claims = Claims {
        sub: ObjectId::new().to_hex(),
        role: Role::Administrator,
        exp: now() - 7200,
        iat: now() - 10000,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    let err = parse_session_token(&token, &jwt_config).unwrap_err();
    assert_eq!(err, TokenError::Expired);
}

#[test]
fn test_foreign_signature_fails_with_invalid_signature_kind() {
    let jwt_config = get_test_jwt_config();
    let other_config = JwtConfig {
        secret: "a_different_secret_entirely".to_string(),
        session_ttl: 86400,
    };

    let token = create_session_token(ObjectId::new(), Role::User, &other_config).unwrap();

    let err = parse_session_token(&token, &jwt_config).unwrap_err();
    assert_eq!(err, TokenError::InvalidSignature);
}

#[test]
fn test_garbage_tokens_fail_as_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = [
        "",
        "not-a-token",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
    ];

    for token in malformed_tokens {
        let err = parse_session_token(token, &jwt_config).unwrap_err();
        assert_eq!(err, TokenError::Malformed, "token {token:?} should be malformed");
    }
}

#[test]
fn test_unknown_role_is_rejected_at_parse_time() {
    #[derive(Serialize)]
    struct RawClaims {
        sub: String,
        role: String,
        exp: usize,
        iat: usize,
    }

    let jwt_config = get_test_jwt_config();
    let claims = RawClaims {
        sub: ObjectId::new().to_hex(),
        role: "superuser".to_string(),
        exp: now() + 3600,
        iat: now(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    let err = parse_session_token(&token, &jwt_config).unwrap_err();
    assert_eq!(err, TokenError::Malformed);
}

#[test]
fn test_different_users_get_different_tokens() {
    let jwt_config = get_test_jwt_config();
    let id1 = ObjectId::new();
    let id2 = ObjectId::new();

    let token1 = create_session_token(id1, Role::User, &jwt_config).unwrap();
    let token2 = create_session_token(id2, Role::User, &jwt_config).unwrap();

    assert_ne!(token1, token2);
    assert_eq!(parse_session_token(&token1, &jwt_config).unwrap().sub, id1.to_hex());
    assert_eq!(parse_session_token(&token2, &jwt_config).unwrap().sub, id2.to_hex());
}
