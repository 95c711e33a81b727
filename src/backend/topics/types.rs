//! Request and response types for the `/topic/*` routes

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::models::TopicView;

/// Create request; the whole body may be omitted
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct CreateTopicRequest {
    pub name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RenameTopicRequest {
    pub id: Option<String>,
    pub new_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct DeleteTopicRequest {
    pub id: Option<String>,
}

/// Returned by create and rename
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicNameResponse {
    pub id: Uuid,
    pub name: String,
    pub msg: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicIdResponse {
    pub id: Uuid,
    pub msg: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicResponse {
    pub topic: TopicView,
    pub msg: String,
}
