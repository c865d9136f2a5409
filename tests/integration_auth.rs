mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mongodb::bson::Bson;
use serde_json::json;

use common::{body_json, get_request, insert_user, json_request, test_app};
use fithub::modules::users::model::Role;
use fithub::store::Filter;
use fithub::utils::password::verify_password;

#[tokio::test]
async fn test_signup_creates_unverified_user_with_hashed_password() {
    let app = test_app();

    let response = app
        .send(json_request(
            "POST",
            "/signup",
            json!({"email": "lifter@example.com", "password": "squatsarelife"}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");

    let user = app
        .state
        .users
        .find_one(Filter::Eq(
            "email",
            Bson::String("lifter@example.com".to_string()),
        ))
        .await
        .unwrap()
        .expect("user should be stored");

    assert!(!user.verified);
    assert_eq!(user.role, Role::User);
    assert_ne!(user.password, "squatsarelife");
    assert!(verify_password("squatsarelife", &user.password).unwrap());

    let token = user.verification_token.expect("token should be issued");
    assert_eq!(token.len(), 32);
}

#[tokio::test]
async fn test_signup_rejects_duplicate_email() {
    let app = test_app();
    insert_user(
        &app.state,
        "taken@example.com",
        "password123",
        Role::User,
        true,
    )
    .await;

    let response = app
        .send(json_request(
            "POST",
            "/signup",
            json!({"email": "taken@example.com", "password": "anotherpass1"}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_rejects_malformed_json() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_rejects_missing_password() {
    let app = test_app();

    let response = app
        .send(json_request(
            "POST",
            "/signup",
            json!({"email": "nopass@example.com"}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_verify_email_marks_verified_and_clears_token() {
    let app = test_app();
    app.send(json_request(
        "POST",
        "/signup",
        json!({"email": "verifyme@example.com", "password": "password123"}),
    ))
    .await;

    let user = app
        .state
        .users
        .find_one(Filter::Eq(
            "email",
            Bson::String("verifyme@example.com".to_string()),
        ))
        .await
        .unwrap()
        .unwrap();
    let token = user.verification_token.unwrap();

    let response = app.send(get_request(&format!("/verify?token={token}"))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let user = app
        .state
        .users
        .find_one(Filter::Eq(
            "email",
            Bson::String("verifyme@example.com".to_string()),
        ))
        .await
        .unwrap()
        .unwrap();
    assert!(user.verified);
    assert_eq!(user.verification_token, None);

    // redeemed tokens cannot be replayed
    let response = app.send(get_request(&format!("/verify?token={token}"))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_verify_email_requires_token() {
    let app = test_app();

    let response = app.send(get_request("/verify")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.send(get_request("/verify?token=unknowntoken")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = test_app();
    insert_user(
        &app.state,
        "member@example.com",
        "password123",
        Role::User,
        true,
    )
    .await;

    let response = app
        .send(json_request(
            "POST",
            "/login",
            json!({"email": "member@example.com", "password": "password123"}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Secure"));
    assert!(set_cookie.contains("SameSite=Lax"));

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_login_rejects_unverified_account() {
    let app = test_app();
    insert_user(
        &app.state,
        "pending@example.com",
        "password123",
        Role::User,
        false,
    )
    .await;

    let response = app
        .send(json_request(
            "POST",
            "/login",
            json!({"email": "pending@example.com", "password": "password123"}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = test_app();
    insert_user(
        &app.state,
        "member@example.com",
        "password123",
        Role::User,
        true,
    )
    .await;

    let wrong_password = app
        .send(json_request(
            "POST",
            "/login",
            json!({"email": "member@example.com", "password": "wrongpassword"}),
        ))
        .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown_email = app
        .send(json_request(
            "POST",
            "/login",
            json!({"email": "ghost@example.com", "password": "password123"}),
        ))
        .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_then_verify_then_login_flow() {
    let app = test_app();

    app.send(json_request(
        "POST",
        "/signup",
        json!({"email": "journey@example.com", "password": "password123"}),
    ))
    .await;

    let user = app
        .state
        .users
        .find_one(Filter::Eq(
            "email",
            Bson::String("journey@example.com".to_string()),
        ))
        .await
        .unwrap()
        .unwrap();
    let token = user.verification_token.unwrap();

    app.send(get_request(&format!("/verify?token={token}"))).await;

    let response = app
        .send(json_request(
            "POST",
            "/login",
            json!({"email": "journey@example.com", "password": "password123"}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}
