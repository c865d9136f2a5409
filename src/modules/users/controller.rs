use askama::Template;
use axum::Json;
use axum::extract::{Query, State};
use axum::response::Html;
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::StatusResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{ChangePasswordDto, CreateUserDto, IdQuery, PublicUser, UpdateProfileDto};
use super::service::UserService;

#[derive(Template)]
#[template(path = "admin_users.html")]
struct AdminUsersPage {
    users: Vec<UserRow>,
}

struct UserRow {
    id: String,
    email: String,
    verified: bool,
    role: String,
}

impl From<PublicUser> for UserRow {
    fn from(user: PublicUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            verified: user.verified,
            role: user.role.to_string(),
        }
    }
}

/// Admin listing page: all users rendered as HTML.
#[instrument(skip(state))]
pub async fn admin_users_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let users = UserService::list_users(&state.users).await?;

    let page = AdminUsersPage {
        users: users.into_iter().map(UserRow::from).collect(),
    };
    let html = page.render().map_err(AppError::internal)?;

    Ok(Html(html))
}

/// Create a user (admin)
#[utoipa::path(
    post,
    path = "/admin/users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = StatusResponse),
        (status = 400, description = "Malformed body or email already exists", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse)
    ),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn admin_create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Json<StatusResponse>, AppError> {
    UserService::create_user(&state.users, dto).await?;
    Ok(Json(StatusResponse::success("User added successfully")))
}

/// Delete a user by id (admin)
#[utoipa::path(
    delete,
    path = "/admin/users",
    params(IdQuery),
    responses(
        (status = 200, description = "User deleted (idempotent)", body = StatusResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse)
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn admin_delete_user(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<StatusResponse>, AppError> {
    UserService::delete_user(&state.users, &query.id).await?;
    Ok(Json(StatusResponse::success("User deleted successfully")))
}

/// Update profile fields
#[utoipa::path(
    put,
    path = "/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = StatusResponse),
        (status = 400, description = "Malformed body or id", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    ),
    tag = "Profile"
)]
#[instrument(skip(state, dto))]
pub async fn update_profile(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<StatusResponse>, AppError> {
    UserService::update_profile(&state.users, dto).await?;
    Ok(Json(StatusResponse::success(
        "User profile updated successfully",
    )))
}

/// Change the account password
#[utoipa::path(
    post,
    path = "/profile",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = StatusResponse),
        (status = 400, description = "Malformed body or id", body = ErrorResponse),
        (status = 401, description = "Old password does not match", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    ),
    tag = "Profile"
)]
#[instrument(skip(state, dto))]
pub async fn change_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<Json<StatusResponse>, AppError> {
    UserService::change_password(&state.users, dto).await?;
    Ok(Json(StatusResponse::success("Password changed successfully")))
}
