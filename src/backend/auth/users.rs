/**
 * User Model and Database Operations
 *
 * This module handles the `users` table. Users are never deleted; banning
 * clears the `enabled` flag, and self-service lookups only see enabled rows.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::models::{TopicView, UserProfile};

/// User row as stored in the database
///
/// Deliberately not `Serialize`: convert with [`User::into_profile`] before
/// returning anything to a client.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name (3-20 chars)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// False while banned
    pub enabled: bool,
    /// Grants access to the admin routes
    pub is_admin: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Client-facing view of this user, without the password hash
    pub fn into_profile(self, topics: Vec<TopicView>) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username,
            email: self.email,
            enabled: self.enabled,
            is_admin: self.is_admin,
            created_at: self.created_at,
            updated_at: self.updated_at,
            topics,
        }
    }
}

/// Fields for a new user row
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Create a new user
///
/// New users start enabled. Fails with a unique-constraint database error
/// when the email is already registered.
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, password_hash, enabled, is_admin, created_at, updated_at)
        VALUES (?, ?, ?, ?, 1, ?, ?, ?)
        RETURNING id, username, email, password_hash, enabled, is_admin, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(new_user.is_admin)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email, enabled or not
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, enabled, is_admin, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get an enabled user by email
pub async fn get_enabled_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, enabled, is_admin, created_at, updated_at
        FROM users
        WHERE email = ? AND enabled = 1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID, enabled or not
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, enabled, is_admin, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get an enabled user by ID
pub async fn get_enabled_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, enabled, is_admin, created_at, updated_at
        FROM users
        WHERE id = ? AND enabled = 1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List every user, oldest first
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, enabled, is_admin, created_at, updated_at
        FROM users
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Replace a user's username
pub async fn update_username(pool: &SqlitePool, id: Uuid, username: &str) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET username = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, username, email, password_hash, enabled, is_admin, created_at, updated_at
        "#,
    )
    .bind(username)
    .bind(Utc::now())
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Replace a user's password hash
pub async fn update_password_hash(
    pool: &SqlitePool,
    id: Uuid,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET password_hash = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(password_hash)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Move a user's enabled flag to `enabled`
///
/// The update only matches rows currently in the opposite state, so two
/// concurrent bans cannot both succeed.
///
/// # Returns
/// `true` if the flag changed, `false` if the user is missing or already in
/// the requested state
pub async fn set_user_enabled(pool: &SqlitePool, id: Uuid, enabled: bool) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET enabled = ?, updated_at = ?
        WHERE id = ? AND enabled = ?
        "#,
    )
    .bind(enabled)
    .bind(Utc::now())
    .bind(id)
    .bind(!enabled)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Whether a database error is a unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
