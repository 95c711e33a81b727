/**
 * Admin Handlers
 *
 * Routes reserved for callers whose token carries the admin flag:
 *
 * - `GET /user/get_all` - every user with every topic and conversation,
 *   disabled ones included
 * - `POST /user/ban` / `POST /user/enable` - move a user's enabled flag
 *
 * The `AdminUser` extractor rejects non-admin callers with 403 before any
 * of these run.
 */

use std::collections::HashMap;

use axum::{extract::State, response::Json};
use uuid::Uuid;

use crate::backend::auth::handlers::types::{TargetUserRequest, TargetUserResponse, UsersResponse};
use crate::backend::auth::users::{get_user_by_id, list_users, set_user_enabled};
use crate::backend::conversations::db::list_all_conversations;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AdminUser, JsonBody};
use crate::backend::server::state::AppState;
use crate::backend::topics::db::list_all_topics;
use crate::shared::models::{ConversationView, TopicView};
use crate::shared::validation;

/// List every user
///
/// Users, topics and conversations are loaded with one query each and
/// stitched together in memory.
pub async fn get_all_users(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> Result<Json<UsersResponse>, BackendError> {
    tracing::info!("Admin {} listing all users", admin.user_id);

    let mut conversations: HashMap<Uuid, Vec<ConversationView>> = HashMap::new();
    for entry in list_all_conversations(&state.db).await? {
        conversations
            .entry(entry.topic_id)
            .or_default()
            .push(entry.into());
    }

    let mut topics: HashMap<Uuid, Vec<TopicView>> = HashMap::new();
    for topic in list_all_topics(&state.db).await? {
        let entries = conversations.remove(&topic.id).unwrap_or_default();
        topics
            .entry(topic.user_id)
            .or_default()
            .push(topic.into_view(Some(entries)));
    }

    let users = list_users(&state.db)
        .await?
        .into_iter()
        .map(|user| {
            let owned = topics.remove(&user.id).unwrap_or_default();
            user.into_profile(owned)
        })
        .collect();

    Ok(Json(UsersResponse {
        users,
        msg: "Query all users successfully!".to_string(),
    }))
}

/// Ban a user
///
/// # Errors
///
/// * `400 Bad Request` - If the id is missing, unknown, or already banned
pub async fn ban_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    JsonBody(request): JsonBody<TargetUserRequest>,
) -> Result<Json<TargetUserResponse>, BackendError> {
    let id = validation::required("id", request.id.as_deref())?;
    tracing::info!("Admin {} banning user {}", admin.user_id, id);

    transition(&state, id, false).await?;

    Ok(Json(TargetUserResponse {
        id: id.to_string(),
        msg: format!("User with id {} banned successfully.", id),
    }))
}

/// Re-enable a banned user
///
/// # Errors
///
/// * `400 Bad Request` - If the id is missing, unknown, or already enabled
pub async fn enable_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    JsonBody(request): JsonBody<TargetUserRequest>,
) -> Result<Json<TargetUserResponse>, BackendError> {
    let id = validation::required("id", request.id.as_deref())?;
    tracing::info!("Admin {} enabling user {}", admin.user_id, id);

    transition(&state, id, true).await?;

    Ok(Json(TargetUserResponse {
        id: id.to_string(),
        msg: format!("User with id {} enabled successfully.", id),
    }))
}

/// Move user `raw_id` to `enabled`, reporting why if nothing changed
async fn transition(state: &AppState, raw_id: &str, enabled: bool) -> Result<(), BackendError> {
    let missing = || BackendError::invalid_state(format!("User with id {} does not exist.", raw_id));

    let id = Uuid::parse_str(raw_id.trim()).map_err(|_| missing())?;

    if set_user_enabled(&state.db, id, enabled).await? {
        return Ok(());
    }

    // Nothing changed: either the user is missing or already in that state.
    match get_user_by_id(&state.db, id).await? {
        None => Err(missing()),
        Some(_) if enabled => Err(BackendError::invalid_state(format!(
            "User with id {} already enabled.",
            raw_id
        ))),
        Some(_) => Err(BackendError::invalid_state(format!(
            "User with id {} already banned.",
            raw_id
        ))),
    }
}
