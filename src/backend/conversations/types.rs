//! Request and response types for `/conversation/*`

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::models::ConversationView;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub topic_id: Option<String>,
    /// `user`, `assistant` or `system`
    pub role: Option<String>,
    pub text: Option<String>,
}

/// Saved entry id, plus the assistant's answer when one was generated
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateResponse {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<ConversationView>,
    pub msg: String,
}
