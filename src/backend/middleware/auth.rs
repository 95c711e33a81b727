/**
 * Authentication Middleware
 *
 * This module protects routes that require a session token. The middleware
 * extracts the bearer token from the `Authorization` header, verifies it,
 * and attaches the caller's identity to the request extensions, where the
 * `AuthUser` and `AdminUser` extractors pick it up.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::sessions::{SessionError, SessionKeys};
use crate::backend::auth::users::{get_enabled_user_by_id, User};
use crate::backend::error::BackendError;

/// Caller identity taken from a verified session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub is_admin: bool,
}

/// Read the token out of an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Missing authorization token")
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("Invalid authorization header format")
        })?;

    Ok(token)
}

/// Verify the request's bearer token and return the identity it carries
pub fn authenticate(keys: &SessionKeys, headers: &HeaderMap) -> Result<AuthenticatedUser, BackendError> {
    let token = bearer_token(headers)?;

    let claims = keys.verify(token).map_err(|e| match e {
        SessionError::Expired => {
            tracing::warn!("Expired token presented");
            BackendError::unauthorized("Session expired, please log in again")
        }
        SessionError::Invalid(err) => {
            tracing::warn!("Invalid token: {:?}", err);
            BackendError::unauthorized("Invalid token")
        }
    })?;

    Ok(AuthenticatedUser {
        user_id: claims.id,
        email: claims.email,
        is_admin: claims.is_admin,
    })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the Authorization header
/// 2. Verifies its signature and expiry
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Returns 401 if the token is missing or invalid. Whether the account is
/// still enabled is checked by the handlers that load it.
pub async fn auth_middleware(
    State(keys): State<Arc<SessionKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(&keys, request.headers())?;
    tracing::debug!("Authenticated request from user {}", user.user_id);

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Load the caller's account, requiring it to exist and be enabled
///
/// A banned user keeps a valid token until it expires, so every handler that
/// acts on behalf of the caller goes through this check.
pub async fn require_active_user(pool: &SqlitePool, user_id: Uuid) -> Result<User, BackendError> {
    get_enabled_user_by_id(pool, user_id).await?.ok_or_else(|| {
        tracing::warn!("User {} does not exist or is banned", user_id);
        BackendError::invalid_state(format!(
            "User with id {} does not exist or is banned",
            user_id
        ))
    })
}

fn identity_from_parts(parts: &Parts) -> Result<AuthenticatedUser, BackendError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| {
            tracing::warn!("AuthenticatedUser not found in request extensions");
            BackendError::unauthorized("Missing authorization token")
        })
}

/// Axum extractor for the authenticated caller
///
/// Only valid on routes behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        identity_from_parts(parts).map(AuthUser)
    }
}

/// Axum extractor for an authenticated caller whose token carries the admin flag
#[derive(Clone, Debug)]
pub struct AdminUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = identity_from_parts(parts)?;
        if !user.is_admin {
            tracing::warn!("Non-admin user {} called an admin route", user.user_id);
            return Err(BackendError::forbidden("You are not admin user"));
        }
        Ok(AdminUser(user))
    }
}
