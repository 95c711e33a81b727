//! Conversation API integration tests
//!
//! Reply generation runs against a `wiremock` stand-in for the chat
//! completions endpoint.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{assert_error, config_with_generator, TestApp};

fn completion(content: &str) -> Value {
    json!({
        "id": "cmpl-1",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

async fn topic_texts(app: &TestApp, token: &str, id: &str) -> Vec<(String, String)> {
    let response = app
        .server
        .get(&format!("/topic/get/{}", id))
        .authorization_bearer(token)
        .await;
    let body: Value = response.json();
    body["topic"]["conversations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| {
            (
                entry["role"].as_str().unwrap().to_string(),
                entry["text"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_generate_without_generator_saves_entry() {
    let app = TestApp::new().await;
    let (_, token) = app.user("alice", "a@x.com").await;
    let id = app.topic(&token, "Chat").await;

    let response = app
        .server
        .post("/conversation/generate")
        .authorization_bearer(&token)
        .json(&json!({ "topicId": id, "role": "user", "text": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Conversation saved successfully!");
    assert!(body["id"].is_string());
    assert!(body.get("reply").is_none());

    assert_eq!(
        topic_texts(&app, &token, &id).await,
        vec![("user".to_string(), "hello".to_string())]
    );
}

#[tokio::test]
async fn test_generate_appends_generated_reply() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "messages": [{ "role": "user", "content": "What is Rust?" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("A language.")))
        .expect(1)
        .mount(&mock)
        .await;

    let app = TestApp::with_config(config_with_generator(&mock.uri())).await;
    let (_, token) = app.user("alice", "a@x.com").await;
    let id = app.topic(&token, "Chat").await;

    let response = app
        .server
        .post("/conversation/generate")
        .authorization_bearer(&token)
        .json(&json!({ "topicId": id, "role": "user", "text": "What is Rust?" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["reply"]["role"], "assistant");
    assert_eq!(body["reply"]["text"], "A language.");
    assert_eq!(body["reply"]["topicId"], id);

    assert_eq!(
        topic_texts(&app, &token, &id).await,
        vec![
            ("user".to_string(), "What is Rust?".to_string()),
            ("assistant".to_string(), "A language.".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_non_user_roles_skip_generation() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&mock)
        .await;

    let app = TestApp::with_config(config_with_generator(&mock.uri())).await;
    let (_, token) = app.user("alice", "a@x.com").await;
    let id = app.topic(&token, "Chat").await;

    for role in ["system", "assistant"] {
        let response = app
            .server
            .post("/conversation/generate")
            .authorization_bearer(&token)
            .json(&json!({ "topicId": id, "role": role, "text": "context" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.json::<Value>().get("reply").is_none());
    }
}

#[tokio::test]
async fn test_generator_failure_keeps_user_entry() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock)
        .await;

    let app = TestApp::with_config(config_with_generator(&mock.uri())).await;
    let (_, token) = app.user("alice", "a@x.com").await;
    let id = app.topic(&token, "Chat").await;

    let response = app
        .server
        .post("/conversation/generate")
        .authorization_bearer(&token)
        .json(&json!({ "topicId": id, "role": "user", "text": "still here?" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_error(&response.json(), 502, "Failed to generate a reply");

    assert_eq!(
        topic_texts(&app, &token, &id).await,
        vec![("user".to_string(), "still here?".to_string())]
    );
}

#[tokio::test]
async fn test_entries_keep_insertion_order() {
    let app = TestApp::new().await;
    let (_, token) = app.user("alice", "a@x.com").await;
    let id = app.topic(&token, "Chat").await;

    let script = [("system", "be brief"), ("user", "one"), ("assistant", "two"), ("user", "three")];
    for (role, text) in script {
        app.server
            .post("/conversation/generate")
            .authorization_bearer(&token)
            .json(&json!({ "topicId": id, "role": role, "text": text }))
            .await
            .assert_status_ok();
    }

    let expected: Vec<(String, String)> = script
        .iter()
        .map(|(role, text)| (role.to_string(), text.to_string()))
        .collect();
    assert_eq!(topic_texts(&app, &token, &id).await, expected);
}

#[tokio::test]
async fn test_generate_validation() {
    let app = TestApp::new().await;
    let (_, token) = app.user("alice", "a@x.com").await;
    let id = app.topic(&token, "Chat").await;

    let cases = [
        (json!({ "role": "user", "text": "hi" }), "\"topicId\" is required"),
        (
            json!({ "topicId": id, "role": "robot", "text": "hi" }),
            "\"role\" must be one of [user, assistant, system]",
        ),
        (
            json!({ "topicId": id, "role": "user", "text": "   " }),
            "\"text\" is not allowed to be empty",
        ),
    ];

    for (payload, message) in cases {
        let response = app
            .server
            .post("/conversation/generate")
            .authorization_bearer(&token)
            .json(&payload)
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_error(&response.json(), 400, message);
    }
}

#[tokio::test]
async fn test_generate_into_foreign_or_deleted_topic() {
    let app = TestApp::new().await;
    let (_, alice) = app.user("alice", "a@x.com").await;
    let (_, bob) = app.user("bob", "b@x.com").await;
    let id = app.topic(&alice, "Private").await;
    let expected = format!("Topic with id {} does not exist.", id);

    let response = app
        .server
        .post("/conversation/generate")
        .authorization_bearer(&bob)
        .json(&json!({ "topicId": id, "role": "user", "text": "hi" }))
        .await;
    assert_error(&response.json(), 400, &expected);

    app.server
        .post("/topic/delete")
        .authorization_bearer(&alice)
        .json(&json!({ "id": id }))
        .await
        .assert_status_ok();

    let response = app
        .server
        .post("/conversation/generate")
        .authorization_bearer(&alice)
        .json(&json!({ "topicId": id, "role": "user", "text": "hi" }))
        .await;
    assert_error(&response.json(), 400, &expected);
}
