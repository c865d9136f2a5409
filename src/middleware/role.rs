//! Role-based authorization middleware.
//!
//! Routes are gated by wrapping them with `axum::middleware::from_fn_with_state`
//! and an allow-list of roles. A missing or invalid session cookie is 401;
//! a valid session whose role is not in the allow-list is 403.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Checks that the authenticated user holds one of the allowed roles before
/// invoking the downstream handler.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<Role>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if !allowed_roles.contains(&auth_user.role()) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required roles: {:?}, but user has role: {}",
            allowed_roles,
            auth_user.role()
        )));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Gate for the admin surface.
pub async fn require_administrator(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(State(state), req, next, vec![Role::Administrator]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
