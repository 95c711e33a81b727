/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` impl the auth middleware extracts its keys with.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The SQLite connection pool
 * - Session token keys
 * - The password hasher (carries the bcrypt cost)
 * - The optional reply generator
 *
 * Everything is cheap to clone: the pool and the keys are reference
 * counted, and the generator sits behind an `Arc<dyn ReplyGenerator>` so
 * tests can swap in their own implementation.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::conversations::generator::ReplyGenerator;

/// Application state shared by every handler
///
/// # Usage
///
/// ```rust,no_run
/// use chatnest::backend::server::state::AppState;
/// use axum::extract::State;
///
/// async fn handler(State(state): State<AppState>) {
///     let pool = &state.db;
///     // ...
/// }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Keys used to issue and verify session tokens
    pub sessions: Arc<SessionKeys>,

    /// Password hashing with the configured cost
    pub passwords: PasswordHasher,

    /// Reply generator
    ///
    /// `None` when no generation backend is configured; conversation
    /// entries are then stored without a reply.
    pub generator: Option<Arc<dyn ReplyGenerator>>,
}

impl AppState {
    pub fn new(db: SqlitePool, sessions: SessionKeys, passwords: PasswordHasher) -> Self {
        Self {
            db,
            sessions: Arc::new(sessions),
            passwords,
            generator: None,
        }
    }

    /// Attach a reply generator
    pub fn with_generator(mut self, generator: Arc<dyn ReplyGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }
}

/// Implement FromRef for the session keys, used by the auth middleware
impl FromRef<AppState> for Arc<SessionKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

#[cfg(test)]
impl AppState {
    /// State over a migrated in-memory database, with the cheapest bcrypt cost
    pub(crate) async fn for_tests() -> Self {
        use crate::backend::server::config::{load_in_memory_database, run_migrations};

        let db = load_in_memory_database().await.unwrap();
        run_migrations(&db).await.unwrap();

        Self::new(
            db,
            SessionKeys::new("test-secret", chrono::Duration::hours(24)),
            PasswordHasher::new(4),
        )
    }
}
