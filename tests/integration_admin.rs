mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mongodb::bson::{Bson, oid::ObjectId};
use serde_json::json;

use common::{body_json, body_string, insert_user, session_cookie, test_app};
use fithub::modules::users::model::Role;
use fithub::store::{Filter, ListQuery};
use fithub::utils::password::verify_password;

fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_admin_routes_require_a_session() {
    let app = test_app();

    for uri in ["/admin", "/admin/users", "/admin/products"] {
        let response = app.send(get_with_cookie(uri, None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn test_admin_routes_reject_invalid_and_expired_cookies() {
    let app = test_app();

    let response = app
        .send(get_with_cookie("/admin/users", Some("token=garbage")))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_reject_regular_users() {
    let app = test_app();
    let user_id = insert_user(
        &app.state,
        "member@example.com",
        "password123",
        Role::User,
        true,
    )
    .await;
    let cookie = session_cookie(&app.state, user_id, Role::User);

    for uri in ["/admin", "/admin/users", "/admin/products"] {
        let response = app.send(get_with_cookie(uri, Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }
}

#[tokio::test]
async fn test_admin_users_page_lists_users_for_administrators() {
    let app = test_app();
    let admin_id = insert_user(
        &app.state,
        "admin@example.com",
        "password123",
        Role::Administrator,
        true,
    )
    .await;
    insert_user(
        &app.state,
        "member@example.com",
        "password123",
        Role::User,
        true,
    )
    .await;
    let cookie = session_cookie(&app.state, admin_id, Role::Administrator);

    let response = app.send(get_with_cookie("/admin/users", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let html = body_string(response).await;
    assert!(html.contains("admin@example.com"));
    assert!(html.contains("member@example.com"));
    // the listing never leaks credential material
    assert!(!html.contains("$2b$"));
}

#[tokio::test]
async fn test_admin_products_page_lists_catalog() {
    let app = test_app();
    let admin_id = insert_user(
        &app.state,
        "admin@example.com",
        "password123",
        Role::Administrator,
        true,
    )
    .await;
    let cookie = session_cookie(&app.state, admin_id, Role::Administrator);

    let create = Request::builder()
        .method("POST")
        .uri("/admin/products")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, &cookie)
        .body(Body::from(
            json!({"name": "Kettlebell", "price": 45.0}).to_string(),
        ))
        .unwrap();
    let response = app.send(create).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .send(get_with_cookie("/admin/products", Some(&cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Kettlebell"));
}

#[tokio::test]
async fn test_admin_creates_user_with_hashed_password() {
    let app = test_app();
    let admin_id = insert_user(
        &app.state,
        "admin@example.com",
        "password123",
        Role::Administrator,
        true,
    )
    .await;
    let cookie = session_cookie(&app.state, admin_id, Role::Administrator);

    let request = Request::builder()
        .method("POST")
        .uri("/admin/users")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, &cookie)
        .body(Body::from(
            json!({"email": "coach@example.com", "password": "trainhard1"}).to_string(),
        ))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");

    let user = app
        .state
        .users
        .find_one(Filter::Eq(
            "email",
            Bson::String("coach@example.com".to_string()),
        ))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.role, Role::User);
    assert!(!user.verified);
    assert_ne!(user.password, "trainhard1");
    assert!(verify_password("trainhard1", &user.password).unwrap());
}

#[tokio::test]
async fn test_admin_deletes_user_idempotently() {
    let app = test_app();
    let admin_id = insert_user(
        &app.state,
        "admin@example.com",
        "password123",
        Role::Administrator,
        true,
    )
    .await;
    let victim_id = insert_user(
        &app.state,
        "leaving@example.com",
        "password123",
        Role::User,
        true,
    )
    .await;
    let cookie = session_cookie(&app.state, admin_id, Role::Administrator);

    let delete = |id: String, cookie: String| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/admin/users?id={id}"))
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.send(delete(victim_id.to_hex(), cookie.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.send(delete(victim_id.to_hex(), cookie.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.send(delete(ObjectId::new().to_hex(), cookie.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.send(delete("not-an-id".to_string(), cookie)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let remaining = app.state.users.find(&ListQuery::default()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].email, "admin@example.com");
}
