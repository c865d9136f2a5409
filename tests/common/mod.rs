#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use tower::ServiceExt;

use fithub::modules::users::model::{Role, User};
use fithub::router::init_router;
use fithub::state::AppState;
use fithub::utils::jwt::create_session_token;
use fithub::utils::password::hash_password;

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
}

/// Full application router backed by the in-memory store.
pub fn test_app() -> TestApp {
    let state = AppState::in_memory();
    let router = init_router(state.clone());
    TestApp { state, router }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Insert a user directly into the store, the way signup would leave it.
pub async fn insert_user(
    state: &AppState,
    email: &str,
    password: &str,
    role: Role,
    verified: bool,
) -> ObjectId {
    let user = User {
        id: None,
        email: email.to_string(),
        password: hash_password(password).unwrap(),
        verified,
        verification_token: None,
        role,
    };
    state.users.insert_one(&user).await.unwrap()
}

/// A `Cookie` header value carrying a fresh session token.
pub fn session_cookie(state: &AppState, user_id: ObjectId, role: Role) -> String {
    let token = create_session_token(user_id, role, &state.jwt_config).unwrap();
    format!("token={token}")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
