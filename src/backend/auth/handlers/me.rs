/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /user/get, which returns the
 * authenticated caller's profile together with their enabled topics.
 *
 * # Authentication
 *
 * The route sits behind the auth middleware; the caller's id comes from the
 * verified token. A banned caller is rejected even with a valid token.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::{require_active_user, AuthUser};
use crate::backend::server::state::AppState;
use crate::backend::topics::db::list_enabled_topics_for_user;

/// Get current user handler
///
/// # Arguments
///
/// * `State(state)` - Application state
/// * `AuthUser(caller)` - Identity from the verified session token
///
/// # Errors
///
/// * `400 Bad Request` - If the caller no longer exists or is banned
/// * `500 Internal Server Error` - If a database query fails
///
/// # Example Response
///
/// ```json
/// {
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "username": "alice",
///     "email": "a@x.com",
///     "enabled": true,
///     "isAdmin": false,
///     "createdAt": "2024-06-01T12:00:00Z",
///     "updatedAt": "2024-06-01T12:00:00Z",
///     "topics": []
///   },
///   "msg": "Query user successfully!"
/// }
/// ```
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = require_active_user(&state.db, caller.user_id).await?;

    let topics = list_enabled_topics_for_user(&state.db, user.id)
        .await?
        .into_iter()
        .map(|topic| topic.into_view(None))
        .collect();

    Ok(Json(UserResponse {
        user: user.into_profile(topics),
        msg: "Query user successfully!".to_string(),
    }))
}
