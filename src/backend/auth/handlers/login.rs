/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /user/login.
 *
 * # Authentication Process
 *
 * 1. Validate email and password format
 * 2. Look up an enabled user by email
 * 3. Verify password using bcrypt
 * 4. Issue a session token
 *
 * # Security
 *
 * - Unknown email, banned account and wrong password all produce the same
 *   401 response, so the route cannot be used to probe for accounts
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::users::get_enabled_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::server::state::AppState;
use crate::shared::validation;

const BAD_CREDENTIALS: &str = "Incorrect email or password";

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (pool, hasher, session keys)
/// * `JsonBody(request)` - Login request containing email and password
///
/// # Errors
///
/// * `400 Bad Request` - If the email or password fails validation
/// * `401 Unauthorized` - If the credentials do not match an enabled user
/// * `500 Internal Server Error` - If the database, hashing or token signing fails
///
/// # Example Response
///
/// ```json
/// {"jwt": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "msg": "User alice log in successfully!"}
/// ```
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let email = validation::required("email", request.email.as_deref())?;
    validation::email("email", email)?;
    let password = validation::required("password", request.password.as_deref())?;
    validation::password("password", password)?;

    tracing::info!("Login attempt for email: {}", email);

    let user = match get_enabled_user_by_email(&state.db, email).await? {
        Some(user) => user,
        None => {
            tracing::warn!("Login failed, no enabled user for email: {}", email);
            return Err(BackendError::unauthorized(BAD_CREDENTIALS));
        }
    };

    if !state.passwords.verify(password, &user.password_hash).await? {
        tracing::warn!("Login failed, wrong password for user: {}", user.id);
        return Err(BackendError::unauthorized(BAD_CREDENTIALS));
    }

    let jwt = state.sessions.issue(user.id, &user.email, user.is_admin)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(Json(LoginResponse {
        jwt,
        msg: format!("User {} log in successfully!", user.username),
    }))
}
