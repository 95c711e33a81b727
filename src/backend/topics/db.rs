//! Database operations for topics
//!
//! Topics are soft-deleted: deleting clears `enabled`, and every
//! owner-facing query filters on it.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::models::{ConversationView, TopicView};

/// Topic row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Topic {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    /// Client-facing view, optionally carrying the topic's conversations
    pub fn into_view(self, conversations: Option<Vec<ConversationView>>) -> TopicView {
        TopicView {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            enabled: self.enabled,
            created_at: self.created_at,
            updated_at: self.updated_at,
            conversations,
        }
    }
}

/// Create a topic owned by `user_id`
pub async fn create_topic(pool: &SqlitePool, user_id: Uuid, name: &str) -> Result<Topic, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Topic>(
        r#"
        INSERT INTO topics (id, user_id, name, enabled, created_at, updated_at)
        VALUES (?, ?, ?, 1, ?, ?)
        RETURNING id, user_id, name, enabled, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(name)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get an enabled topic, but only if `user_id` owns it
pub async fn get_owned_topic(
    pool: &SqlitePool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<Topic>, sqlx::Error> {
    sqlx::query_as::<_, Topic>(
        r#"
        SELECT id, user_id, name, enabled, created_at, updated_at
        FROM topics
        WHERE id = ? AND user_id = ? AND enabled = 1
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Enabled topics of one user, oldest first
pub async fn list_enabled_topics_for_user(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Vec<Topic>, sqlx::Error> {
    sqlx::query_as::<_, Topic>(
        r#"
        SELECT id, user_id, name, enabled, created_at, updated_at
        FROM topics
        WHERE user_id = ? AND enabled = 1
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Every topic, deleted ones included, oldest first
pub async fn list_all_topics(pool: &SqlitePool) -> Result<Vec<Topic>, sqlx::Error> {
    sqlx::query_as::<_, Topic>(
        r#"
        SELECT id, user_id, name, enabled, created_at, updated_at
        FROM topics
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Rename an enabled topic owned by `user_id`
///
/// Returns `None` if no such topic exists.
pub async fn rename_topic(
    pool: &SqlitePool,
    id: Uuid,
    user_id: Uuid,
    name: &str,
) -> Result<Option<Topic>, sqlx::Error> {
    sqlx::query_as::<_, Topic>(
        r#"
        UPDATE topics
        SET name = ?, updated_at = ?
        WHERE id = ? AND user_id = ? AND enabled = 1
        RETURNING id, user_id, name, enabled, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(Utc::now())
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Soft-delete an enabled topic owned by `user_id`
///
/// The topic's conversations are disabled in the same transaction.
///
/// # Returns
/// `true` if the topic was deleted by this call
pub async fn disable_topic(pool: &SqlitePool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE topics
        SET enabled = 0, updated_at = ?
        WHERE id = ? AND user_id = ? AND enabled = 1
        "#,
    )
    .bind(now)
    .bind(id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() != 1 {
        tx.rollback().await?;
        return Ok(false);
    }

    sqlx::query(
        r#"
        UPDATE conversations
        SET enabled = 0, updated_at = ?
        WHERE topic_id = ? AND enabled = 1
        "#,
    )
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(true)
}
