use crate::modules::auth::controller::{login_user, signup_user, verify_email};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, get_service},
};
use tower_http::services::ServeFile;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route(
            "/signup",
            get_service(ServeFile::new("public/signup.html")).post(signup_user),
        )
        .route("/verify", get(verify_email))
        .route(
            "/login",
            get_service(ServeFile::new("public/login.html")).post(login_user),
        )
}
