/**
 * Conversation Handlers
 *
 * POST /conversation/generate appends an entry to one of the caller's
 * topics. When the entry is a user message and a reply generator is
 * configured, the topic's history is sent to the generator and its answer
 * is appended as an assistant entry.
 *
 * The user's entry is committed before generation starts, so a generator
 * failure (502) never loses what the user wrote.
 */

use axum::{extract::State, response::Json};

use super::db::{append_conversation, list_enabled_conversations};
use super::types::{GenerateRequest, GenerateResponse};
use crate::backend::error::BackendError;
use crate::backend::middleware::{require_active_user, AuthUser, JsonBody};
use crate::backend::server::state::AppState;
use crate::backend::topics::db::get_owned_topic;
use crate::backend::topics::handlers::{parse_topic_id, topic_not_found};
use crate::shared::models::{ConversationView, Role};
use crate::shared::{validation, SharedError};

/// Save a conversation entry and, for user messages, generate a reply
///
/// # Errors
///
/// * `400 Bad Request` - If a field fails validation, the caller is missing
///   or banned, or the topic is not one of the caller's enabled topics
/// * `502 Bad Gateway` - If the reply generator fails
/// * `500 Internal Server Error` - If a database query fails
pub async fn generate(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    JsonBody(request): JsonBody<GenerateRequest>,
) -> Result<Json<GenerateResponse>, BackendError> {
    let raw_topic_id = validation::required("topicId", request.topic_id.as_deref())?;
    let raw_role = validation::required("role", request.role.as_deref())?;
    let role = Role::parse(raw_role).ok_or_else(|| {
        SharedError::validation("role", "\"role\" must be one of [user, assistant, system]")
    })?;
    let text = validation::required("text", request.text.as_deref())?;
    validation::not_blank("text", text)?;

    let user = require_active_user(&state.db, caller.user_id).await?;
    let topic_id = parse_topic_id(raw_topic_id)?;
    let topic = get_owned_topic(&state.db, topic_id, user.id)
        .await?
        .ok_or_else(|| topic_not_found(raw_topic_id))?;

    let entry = append_conversation(&state.db, topic.id, role, text).await?;
    tracing::info!("Saved {} entry {} in topic {}", role, entry.id, topic.id);

    let reply = match (&state.generator, role) {
        (Some(generator), Role::User) => {
            let history: Vec<ConversationView> = list_enabled_conversations(&state.db, topic.id)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();

            let answer = generator.generate(&history).await?;
            let saved = append_conversation(&state.db, topic.id, Role::Assistant, &answer).await?;
            tracing::info!("Saved generated reply {} in topic {}", saved.id, topic.id);

            Some(ConversationView::from(saved))
        }
        _ => None,
    };

    Ok(Json(GenerateResponse {
        id: entry.id,
        reply,
        msg: "Conversation saved successfully!".to_string(),
    }))
}
