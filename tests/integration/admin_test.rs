//! Admin API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{assert_error, TestApp, ADMIN_EMAIL};

#[tokio::test]
async fn test_ban_and_enable_flow() {
    let app = TestApp::new().await;
    let (alice, _) = app.user("alice", "a@x.com").await;
    let admin = app.admin_token().await;

    let response = app
        .server
        .post("/user/ban")
        .authorization_bearer(&admin)
        .json(&json!({ "id": alice }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": alice, "msg": format!("User with id {} banned successfully.", alice)})
    );

    let response = app
        .server
        .post("/user/login")
        .json(&json!({ "email": "a@x.com", "password": "secret1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_error(&response.json(), 401, "Incorrect email or password");

    let response = app
        .server
        .post("/user/enable")
        .authorization_bearer(&admin)
        .json(&json!({ "id": alice }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["msg"],
        format!("User with id {} enabled successfully.", alice)
    );

    app.login("a@x.com", "secret1").await;
}

#[tokio::test]
async fn test_banned_user_token_stops_working() {
    let app = TestApp::new().await;
    let (alice, token) = app.user("alice", "a@x.com").await;
    let admin = app.admin_token().await;

    app.server
        .post("/user/ban")
        .authorization_bearer(&admin)
        .json(&json!({ "id": alice }))
        .await
        .assert_status_ok();

    let response = app.server.get("/user/get").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(
        &response.json(),
        400,
        &format!("User with id {} does not exist or is banned", alice),
    );
}

#[tokio::test]
async fn test_repeated_transitions_are_rejected() {
    let app = TestApp::new().await;
    let (alice, _) = app.user("alice", "a@x.com").await;
    let admin = app.admin_token().await;

    let response = app
        .server
        .post("/user/enable")
        .authorization_bearer(&admin)
        .json(&json!({ "id": alice }))
        .await;
    assert_error(
        &response.json(),
        400,
        &format!("User with id {} already enabled.", alice),
    );

    for expected_status in [StatusCode::OK, StatusCode::BAD_REQUEST] {
        let response = app
            .server
            .post("/user/ban")
            .authorization_bearer(&admin)
            .json(&json!({ "id": alice }))
            .await;
        assert_eq!(response.status_code(), expected_status);
    }

    let response = app
        .server
        .post("/user/ban")
        .authorization_bearer(&admin)
        .json(&json!({ "id": alice }))
        .await;
    assert_error(
        &response.json(),
        400,
        &format!("User with id {} already banned.", alice),
    );
}

#[tokio::test]
async fn test_unknown_and_missing_ids() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let stranger = Uuid::new_v4();

    let response = app
        .server
        .post("/user/ban")
        .authorization_bearer(&admin)
        .json(&json!({ "id": stranger }))
        .await;
    assert_error(
        &response.json(),
        400,
        &format!("User with id {} does not exist.", stranger),
    );

    let response = app
        .server
        .post("/user/enable")
        .authorization_bearer(&admin)
        .json(&json!({ "id": "not-a-uuid" }))
        .await;
    assert_error(&response.json(), 400, "User with id not-a-uuid does not exist.");

    let response = app
        .server
        .post("/user/ban")
        .authorization_bearer(&admin)
        .json(&json!({}))
        .await;
    assert_error(&response.json(), 400, "\"id\" is required");
}

#[tokio::test]
async fn test_non_admin_is_forbidden() {
    let app = TestApp::new().await;
    let (alice, token) = app.user("alice", "a@x.com").await;

    let response = app.server.get("/user/get_all").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_error(&response.json(), 403, "You are not admin user");

    let response = app
        .server
        .post("/user/ban")
        .authorization_bearer(&token)
        .json(&json!({ "id": alice }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_get_all_includes_disabled_content() {
    let app = TestApp::new().await;
    let (alice, token) = app.user("alice", "a@x.com").await;
    let kept = app.topic(&token, "Kept").await;
    let gone = app.topic(&token, "Gone").await;

    app.server
        .post("/conversation/generate")
        .authorization_bearer(&token)
        .json(&json!({ "topicId": kept, "role": "user", "text": "hello" }))
        .await
        .assert_status_ok();
    app.server
        .post("/topic/delete")
        .authorization_bearer(&token)
        .json(&json!({ "id": gone }))
        .await
        .assert_status_ok();

    let admin = app.admin_token().await;
    let response = app.server.get("/user/get_all").authorization_bearer(&admin).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["msg"], "Query all users successfully!");

    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|user| user["email"] == ADMIN_EMAIL && user["isAdmin"] == true));

    let alice = users
        .iter()
        .find(|user| user["id"] == alice.to_string())
        .unwrap();
    let topics = alice["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0]["name"], "Kept");
    assert_eq!(topics[0]["conversations"][0]["text"], "hello");
    assert_eq!(topics[1]["name"], "Gone");
    assert_eq!(topics[1]["enabled"], false);
    assert!(!body.to_string().contains("password"));
}
