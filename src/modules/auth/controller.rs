use axum::Json;
use axum::extract::{Query, State};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::SESSION_COOKIE;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse, SignupRequest, StatusResponse, VerifyQuery};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new account and send the verification email
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User registered, verification email sent", body = StatusResponse),
        (status = 400, description = "Malformed body or email already exists", body = ErrorResponse),
        (status = 500, description = "Store or mail relay failure", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn signup_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    AuthService::signup(&state.users, &state.email_config, dto).await?;
    Ok(Json(StatusResponse::success(
        "User registered successfully. Check your email for verification.",
    )))
}

/// Redeem an email verification token
#[utoipa::path(
    get,
    path = "/verify",
    params(VerifyQuery),
    responses(
        (status = 200, description = "Email verified", body = StatusResponse),
        (status = 400, description = "Missing or unknown token", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, query))]
pub async fn verify_email(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> Result<Json<StatusResponse>, AppError> {
    AuthService::verify_email(&state.users, &query.token).await?;
    Ok(Json(StatusResponse::success("Email verified successfully")))
}

/// Log in and receive the session cookie
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = LoginResponse),
        (status = 401, description = "Invalid credentials or unverified email", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let token = AuthService::login(&state.users, &state.jwt_config, dto).await?;

    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .path("/")
        .max_age(Duration::seconds(state.jwt_config.session_ttl))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            status: "success".to_string(),
            token,
        }),
    ))
}
