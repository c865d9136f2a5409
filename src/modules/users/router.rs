use crate::modules::users::controller::{
    admin_create_user, admin_delete_user, admin_users_page, change_password, update_profile,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

pub fn init_profile_router() -> Router<AppState> {
    Router::new().route("/profile", put(update_profile).post(change_password))
}

/// Routes nested under the role-gated `/admin` tree.
pub fn init_admin_users_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(admin_users_page)
            .post(admin_create_user)
            .delete(admin_delete_user),
    )
}
