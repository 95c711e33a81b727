//! Conversation Entry
//!
//! One message (role + text) inside a topic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// A single message within a topic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub id: Uuid,
    /// Topic this entry belongs to
    pub topic_id: Uuid,
    pub role: Role,
    pub text: String,
    /// False once the entry has been removed
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
