/**
 * Profile Update Handler
 *
 * POST /user/update changes either the caller's username or their password.
 *
 * # Modes
 *
 * - `newUsername` present: rename. Wins when both modes are supplied.
 * - `password` and `newPassword` present: verify the current password,
 *   then store the hash of the new one.
 * - Neither: rejected, nothing is written.
 *
 * Every field that is present is validated before any mode is chosen.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{UpdateProfileRequest, UpdateProfileResponse};
use crate::backend::auth::users::{update_password_hash, update_username};
use crate::backend::error::BackendError;
use crate::backend::middleware::{require_active_user, AuthUser, JsonBody};
use crate::backend::server::state::AppState;
use crate::shared::{validation, SharedError};

const NOTHING_TO_UPDATE: &str =
    "Nothing to update: provide \"newUsername\", or \"password\" and \"newPassword\"";

/// Profile update handler
///
/// # Arguments
///
/// * `State(state)` - Application state
/// * `AuthUser(caller)` - Identity from the verified session token
/// * `JsonBody(request)` - Fields to change
///
/// # Errors
///
/// * `400 Bad Request` - If a field fails validation, no mode applies, the
///   current password is wrong, or the caller is missing or banned
/// * `500 Internal Server Error` - If the database or hashing fails
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    JsonBody(request): JsonBody<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, BackendError> {
    if let Some(password) = request.password.as_deref() {
        validation::password("password", password)?;
    }
    if let Some(new_password) = request.new_password.as_deref() {
        validation::password("newPassword", new_password)?;
    }
    if let Some(new_username) = request.new_username.as_deref() {
        validation::username("newUsername", new_username)?;
    }

    let user = require_active_user(&state.db, caller.user_id).await?;

    if let Some(new_username) = request.new_username.as_deref() {
        let renamed = update_username(&state.db, user.id, new_username).await?;
        tracing::info!("User {} renamed to {}", renamed.id, renamed.username);

        return Ok(Json(UpdateProfileResponse::Renamed {
            id: renamed.id,
            username: renamed.username,
            msg: "Username updated successfully!".to_string(),
        }));
    }

    match (request.password.as_deref(), request.new_password.as_deref()) {
        (Some(password), Some(new_password)) => {
            if !state.passwords.verify(password, &user.password_hash).await? {
                tracing::warn!("Password change for user {} with wrong old password", user.id);
                return Err(BackendError::invalid_state("Incorrect old password"));
            }

            let password_hash = state.passwords.hash(new_password).await?;
            update_password_hash(&state.db, user.id, &password_hash).await?;
            tracing::info!("Password updated for user {}", user.id);

            Ok(Json(UpdateProfileResponse::PasswordChanged {
                id: user.id,
                msg: "Password updated successfully".to_string(),
            }))
        }
        _ => Err(SharedError::validation("newUsername", NOTHING_TO_UPDATE).into()),
    }
}
