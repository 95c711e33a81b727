//! Common test utilities and helpers
//!
//! Every test gets its own application over a private in-memory SQLite
//! database, with the cheapest bcrypt cost and a seeded admin account.

use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

use chatnest::backend::server::config::{
    load_in_memory_database, GeneratorConfig, SeedAccount, ServerConfig,
};
use chatnest::backend::server::create_app_with_pool;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_EMAIL: &str = "root@chatnest.test";
pub const ADMIN_PASSWORD: &str = "rootpass";

/// Configuration used by [`TestApp::new`]
pub fn test_config() -> ServerConfig {
    ServerConfig {
        jwt_secret: TEST_SECRET.to_string(),
        bcrypt_cost: 4,
        admin_account: Some(SeedAccount {
            username: "root".to_string(),
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            is_admin: true,
        }),
        ..ServerConfig::default()
    }
}

/// Test configuration pointing the reply generator at `base_url`
pub fn config_with_generator(base_url: &str) -> ServerConfig {
    ServerConfig {
        generator: Some(GeneratorConfig {
            base_url: base_url.to_string(),
            model: "test-model".to_string(),
            api_key: None,
        }),
        ..test_config()
    }
}

/// A running application plus direct access to its database
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        let pool = load_in_memory_database()
            .await
            .expect("Failed to open in-memory database");
        let app = create_app_with_pool(&config, pool.clone())
            .await
            .expect("Failed to create app");
        let server = TestServer::new(app).expect("Failed to start test server");

        Self { server, pool }
    }

    /// Sign up a user and return its id
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Uuid {
        let response = self
            .server
            .post("/user/create")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        body["id"]
            .as_str()
            .and_then(|id| Uuid::parse_str(id).ok())
            .expect("signup response should carry an id")
    }

    /// Log in and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .server
            .post("/user/login")
            .json(&json!({ "email": email, "password": password }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        body["jwt"]
            .as_str()
            .expect("login response should carry a jwt")
            .to_string()
    }

    /// Sign up and log in a regular user, returning (id, token)
    pub async fn user(&self, username: &str, email: &str) -> (Uuid, String) {
        let id = self.signup(username, email, "secret1").await;
        let token = self.login(email, "secret1").await;
        (id, token)
    }

    /// Token of the seeded admin
    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Create a topic for the token's owner and return its id
    pub async fn topic(&self, token: &str, name: &str) -> String {
        let response = self
            .server
            .post("/topic/create")
            .authorization_bearer(token)
            .json(&json!({ "name": name }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        body["id"]
            .as_str()
            .expect("topic response should carry an id")
            .to_string()
    }
}

/// Assert the uniform error envelope
pub fn assert_error(body: &Value, status: u16, message: &str) {
    assert_eq!(body["status"], status, "unexpected envelope: {}", body);
    assert_eq!(body["error"], message, "unexpected envelope: {}", body);
}
