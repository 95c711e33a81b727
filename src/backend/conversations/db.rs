//! Database operations for conversations
//!
//! Conversation entries are append-only. Reads return them in insertion
//! order, which `rowid` breaks ties on when two entries share a timestamp.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::models::{ConversationView, Role};

/// Conversation row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Conversation {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub role: Role,
    pub text: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationView {
    fn from(row: Conversation) -> Self {
        ConversationView {
            id: row.id,
            topic_id: row.topic_id,
            role: row.role,
            text: row.text,
            enabled: row.enabled,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Append an entry to a topic
pub async fn append_conversation(
    pool: &SqlitePool,
    topic_id: Uuid,
    role: Role,
    text: &str,
) -> Result<Conversation, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Conversation>(
        r#"
        INSERT INTO conversations (id, topic_id, role, text, enabled, created_at, updated_at)
        VALUES (?, ?, ?, ?, 1, ?, ?)
        RETURNING id, topic_id, role, text, enabled, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(topic_id)
    .bind(role)
    .bind(text)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Enabled entries of one topic, in insertion order
pub async fn list_enabled_conversations(
    pool: &SqlitePool,
    topic_id: Uuid,
) -> Result<Vec<Conversation>, sqlx::Error> {
    sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, topic_id, role, text, enabled, created_at, updated_at
        FROM conversations
        WHERE topic_id = ? AND enabled = 1
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .bind(topic_id)
    .fetch_all(pool)
    .await
}

/// Every entry of every topic, in insertion order
pub async fn list_all_conversations(pool: &SqlitePool) -> Result<Vec<Conversation>, sqlx::Error> {
    sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, topic_id, role, text, enabled, created_at, updated_at
        FROM conversations
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .fetch_all(pool)
    .await
}
