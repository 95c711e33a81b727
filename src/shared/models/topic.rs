//! Topic
//!
//! A named conversation thread owned by one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::conversation::ConversationView;

/// Default name given to topics created without one
pub const DEFAULT_TOPIC_NAME: &str = "New Topic";

/// A conversation thread
///
/// `conversations` is only populated by routes that load the thread's
/// messages (topic detail, admin listing) and is omitted otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopicView {
    pub id: Uuid,
    /// Owner of the topic
    pub user_id: Uuid,
    pub name: String,
    /// False once the topic has been deleted
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversations: Option<Vec<ConversationView>>,
}
