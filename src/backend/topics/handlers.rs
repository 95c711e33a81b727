//! Topic HTTP Handlers
//!
//! Every handler requires an enabled caller and only ever touches the
//! caller's own topics. A topic that belongs to someone else, or was
//! deleted, is reported exactly like one that never existed.

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use super::db;
use super::types::{
    CreateTopicRequest, DeleteTopicRequest, RenameTopicRequest, TopicIdResponse,
    TopicNameResponse, TopicResponse,
};
use crate::backend::conversations::db::list_enabled_conversations;
use crate::backend::error::BackendError;
use crate::backend::middleware::{require_active_user, AuthUser, JsonBody};
use crate::backend::server::state::AppState;
use crate::shared::models::topic::DEFAULT_TOPIC_NAME;
use crate::shared::validation;

/// Error for a topic the caller cannot see
pub fn topic_not_found(raw_id: &str) -> BackendError {
    BackendError::invalid_state(format!("Topic with id {} does not exist.", raw_id))
}

/// Parse a client-supplied topic id, treating garbage as a missing topic
pub fn parse_topic_id(raw_id: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw_id.trim()).map_err(|_| topic_not_found(raw_id))
}

/// Create a topic
///
/// POST /topic/create, body `{name?}` or no body at all. The name defaults
/// to "New Topic".
pub async fn create_topic(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    JsonBody(request): JsonBody<CreateTopicRequest>,
) -> Result<Json<TopicNameResponse>, BackendError> {
    let name = match request.name.as_deref() {
        Some(name) => validation::topic_name("name", name)?,
        None => DEFAULT_TOPIC_NAME,
    };

    let user = require_active_user(&state.db, caller.user_id).await?;
    let topic = db::create_topic(&state.db, user.id, name).await?;

    tracing::info!("User {} created topic {}", user.id, topic.id);

    Ok(Json(TopicNameResponse {
        id: topic.id,
        name: topic.name,
        msg: "Topic created successfully!".to_string(),
    }))
}

/// Rename a topic
///
/// POST /topic/edit, body `{id, newName}`
pub async fn rename_topic(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    JsonBody(request): JsonBody<RenameTopicRequest>,
) -> Result<Json<TopicNameResponse>, BackendError> {
    let raw_id = validation::required("id", request.id.as_deref())?;
    let new_name = validation::required("newName", request.new_name.as_deref())?;
    let new_name = validation::topic_name("newName", new_name)?;

    let user = require_active_user(&state.db, caller.user_id).await?;
    let id = parse_topic_id(raw_id)?;

    let topic = db::rename_topic(&state.db, id, user.id, new_name)
        .await?
        .ok_or_else(|| topic_not_found(raw_id))?;

    tracing::info!("User {} renamed topic {}", user.id, topic.id);

    Ok(Json(TopicNameResponse {
        id: topic.id,
        name: topic.name,
        msg: "Topic renamed successfully!".to_string(),
    }))
}

/// Soft-delete a topic
///
/// POST /topic/delete, body `{id}`. The topic and its conversations stay in
/// the database with `enabled = false`.
pub async fn delete_topic(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    JsonBody(request): JsonBody<DeleteTopicRequest>,
) -> Result<Json<TopicIdResponse>, BackendError> {
    let raw_id = validation::required("id", request.id.as_deref())?;

    let user = require_active_user(&state.db, caller.user_id).await?;
    let id = parse_topic_id(raw_id)?;

    if !db::disable_topic(&state.db, id, user.id).await? {
        return Err(topic_not_found(raw_id));
    }

    tracing::info!("User {} deleted topic {}", user.id, id);

    Ok(Json(TopicIdResponse {
        id,
        msg: "Topic deleted successfully!".to_string(),
    }))
}

/// Get a topic with its conversation history
///
/// GET /topic/get/{id}
pub async fn get_topic(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(raw_id): Path<String>,
) -> Result<Json<TopicResponse>, BackendError> {
    let user = require_active_user(&state.db, caller.user_id).await?;
    let id = parse_topic_id(&raw_id)?;

    let topic = db::get_owned_topic(&state.db, id, user.id)
        .await?
        .ok_or_else(|| topic_not_found(&raw_id))?;

    let conversations = list_enabled_conversations(&state.db, topic.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(TopicResponse {
        topic: topic.into_view(Some(conversations)),
        msg: "Query topic successfully!".to_string(),
    }))
}
