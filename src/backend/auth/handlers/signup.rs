/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /user/create.
 *
 * # Registration Process
 *
 * 1. Validate username, email and password
 * 2. Hash password using bcrypt
 * 3. Create user in database (enabled, not admin)
 * 4. Return the new user's id
 *
 * The email uniqueness check is the database's unique index; a collision is
 * reported as a validation error.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{SignupRequest, UserIdResponse};
use crate::backend::auth::users::{create_user, is_unique_violation, NewUser};
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::server::state::AppState;
use crate::shared::{validation, SharedError};

/// Sign up handler
///
/// # Arguments
///
/// * `State(state)` - Application state (pool and password hasher)
/// * `JsonBody(request)` - Signup request containing username, email and password
///
/// # Errors
///
/// * `400 Bad Request` - If a field fails validation or the email is already registered
/// * `500 Internal Server Error` - If password hashing or user creation fails
///
/// # Example Request
///
/// ```http
/// POST /user/create HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "email": "a@x.com", "password": "secret1"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"id": "123e4567-e89b-12d3-a456-426614174000", "msg": "User created successfully!"}
/// ```
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<Json<UserIdResponse>, BackendError> {
    let username = validation::required("username", request.username.as_deref())?;
    validation::username("username", username)?;
    let email = validation::required("email", request.email.as_deref())?;
    validation::email("email", email)?;
    let password = validation::required("password", request.password.as_deref())?;
    validation::password("password", password)?;

    tracing::info!("Signup request for username: {}, email: {}", username, email);

    let password_hash = state.passwords.hash(password).await?;

    let new_user = NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash,
        is_admin: false,
    };

    let user = create_user(&state.db, new_user).await.map_err(|e| {
        if is_unique_violation(&e) {
            tracing::warn!("Email already exists: {}", email);
            BackendError::from(SharedError::validation("email", "Email already registered"))
        } else {
            BackendError::from(e)
        }
    })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok(Json(UserIdResponse {
        id: user.id,
        msg: "User created successfully!".to_string(),
    }))
}
