//! User API integration tests
//!
//! Signup, login, profile fetch and profile update, plus token handling.

use axum::http::{header, HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use chatnest::backend::auth::sessions::{Claims, SessionKeys};

use crate::common::{assert_error, TestApp, TEST_SECRET};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"status": "ok"}));
}

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/user/create")
        .json(&json!({
            "username": "alice",
            "email": "a@x.com",
            "password": "secret1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["msg"], "User created successfully!");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_signup_short_username() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/user/create")
        .json(&json!({
            "username": "al",
            "email": "a@x.com",
            "password": "secret1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(
        &response.json(),
        400,
        "\"username\" length must be at least 3 characters long",
    );
}

#[tokio::test]
async fn test_signup_invalid_email_and_long_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/user/create")
        .json(&json!({
            "username": "alice",
            "email": "not-an-email",
            "password": "secret1"
        }))
        .await;
    assert_error(&response.json(), 400, "\"email\" must be a valid email");

    let response = app
        .server
        .post("/user/create")
        .json(&json!({
            "username": "alice",
            "email": "a@x.com",
            "password": "x".repeat(21)
        }))
        .await;
    assert_error(
        &response.json(),
        400,
        "\"password\" length must be less than or equal to 20 characters long",
    );
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::new().await;
    app.signup("alice", "a@x.com", "secret1").await;

    let response = app
        .server
        .post("/user/create")
        .json(&json!({
            "username": "alice2",
            "email": "a@x.com",
            "password": "secret2"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&response.json(), 400, "Email already registered");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.server.post("/user/create").text("{not json").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_login_returns_verifiable_token() {
    let app = TestApp::new().await;
    let id = app.signup("alice", "a@x.com", "secret1").await;

    let response = app
        .server
        .post("/user/login")
        .json(&json!({ "email": "a@x.com", "password": "secret1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["msg"], "User alice log in successfully!");

    let keys = SessionKeys::new(TEST_SECRET, Duration::hours(24));
    let claims = keys.verify(body["jwt"].as_str().unwrap()).unwrap();
    assert_eq!(claims.id, id);
    assert_eq!(claims.email, "a@x.com");
    assert!(!claims.is_admin);
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email() {
    let app = TestApp::new().await;
    app.signup("alice", "a@x.com", "secret1").await;

    for (email, password) in [("a@x.com", "wrong12"), ("nobody@x.com", "secret1")] {
        let response = app
            .server
            .post("/user/login")
            .json(&json!({ "email": email, "password": password }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        assert_error(&response.json(), 401, "Incorrect email or password");
    }
}

#[tokio::test]
async fn test_get_profile_hides_password() {
    let app = TestApp::new().await;
    let (id, token) = app.user("alice", "a@x.com").await;
    app.topic(&token, "Rust").await;

    let response = app.server.get("/user/get").authorization_bearer(&token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Query user successfully!");
    assert_eq!(body["user"]["id"], id.to_string());
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["isAdmin"], false);
    assert_eq!(body["user"]["topics"][0]["name"], "Rust");

    let raw = body.to_string();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("$2"));
}

#[tokio::test]
async fn test_missing_and_malformed_tokens() {
    let app = TestApp::new().await;

    let response = app.server.get("/user/get").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["status"], 401);

    let response = app
        .server
        .get("/user/get")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .get("/user/get")
        .authorization_bearer("invalid_token")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new().await;
    let id = app.signup("alice", "a@x.com", "secret1").await;

    let issued = Utc::now() - Duration::hours(48);
    let claims = Claims {
        id,
        email: "a@x.com".to_string(),
        is_admin: false,
        iat: issued.timestamp(),
        exp: (issued + Duration::hours(24)).timestamp(),
    };
    let token = SessionKeys::new(TEST_SECRET, Duration::hours(24))
        .sign(&claims)
        .unwrap();

    let response = app.server.get("/user/get").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new().await;
    let id = app.signup("alice", "a@x.com", "secret1").await;

    let token = SessionKeys::new("some-other-secret", Duration::hours(24))
        .issue(id, "a@x.com", true)
        .unwrap();

    let response = app.server.get("/user/get_all").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_username() {
    let app = TestApp::new().await;
    let (id, token) = app.user("alice", "a@x.com").await;

    let response = app
        .server
        .post("/user/update")
        .authorization_bearer(&token)
        .json(&json!({ "newUsername": "alicia" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": id, "username": "alicia", "msg": "Username updated successfully!"})
    );

    let response = app
        .server
        .post("/user/login")
        .json(&json!({ "email": "a@x.com", "password": "secret1" }))
        .await;
    assert_eq!(response.json::<Value>()["msg"], "User alicia log in successfully!");
}

#[tokio::test]
async fn test_update_password() {
    let app = TestApp::new().await;
    let (id, token) = app.user("alice", "a@x.com").await;

    let response = app
        .server
        .post("/user/update")
        .authorization_bearer(&token)
        .json(&json!({ "password": "wrong12", "newPassword": "secret2" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&response.json(), 400, "Incorrect old password");

    let response = app
        .server
        .post("/user/update")
        .authorization_bearer(&token)
        .json(&json!({ "password": "secret1", "newPassword": "secret2" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": id, "msg": "Password updated successfully"})
    );

    let response = app
        .server
        .post("/user/login")
        .json(&json!({ "email": "a@x.com", "password": "secret1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    app.login("a@x.com", "secret2").await;
}

#[tokio::test]
async fn test_update_with_nothing_to_do() {
    let app = TestApp::new().await;
    let (_, token) = app.user("alice", "a@x.com").await;

    let response = app
        .server
        .post("/user/update")
        .authorization_bearer(&token)
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(
        &response.json(),
        400,
        "Nothing to update: provide \"newUsername\", or \"password\" and \"newPassword\"",
    );
}
