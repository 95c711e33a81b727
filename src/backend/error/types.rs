/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the HTTP API. Every handler
 * returns `Result<_, BackendError>`, and each variant maps to exactly one
 * status code.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `Validation` - malformed payload or schema violation (400)
 * - `InvalidState` - missing target or no-op transition (400)
 * - `Unauthorized` - bad credentials, missing or invalid token (401)
 * - `Forbidden` - non-admin caller on an admin route (403)
 *
 * ## Server Errors
 *
 * - `Upstream` - the reply generator failed (502)
 * - `Database`, `Hashing`, `TokenSigning`, `Internal` - unexpected failures
 *   (500). Their details are logged and never sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message returned to clients for every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use chatnest::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::forbidden("You are not admin user");
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
///
/// let err = BackendError::invalid_state("User with id 42 does not exist.");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. unknown route)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Payload failed schema validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Target entity missing, or already in the requested state
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated, but not allowed
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Reply generation backend failed
    #[error("Upstream error: {message}")]
    Upstream {
        /// Human-readable error message
        message: String,
    },

    /// Database query failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failed
    #[error("Hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Session token could not be signed
    #[error("Token signing error: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    /// Any other unexpected failure
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the logs
        message: String,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new not-found / wrong-state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new authorization error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Validation`, `InvalidState` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `Upstream` - 502 Bad Gateway
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Validation(_) | Self::InvalidState { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Database(_) | Self::Hashing(_) | Self::TokenSigning(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error is a server-side failure
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error() && !matches!(self, Self::Upstream { .. })
    }

    /// Get the message sent to the client
    ///
    /// Internal failures collapse to [`INTERNAL_ERROR_MESSAGE`].
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. }
            | Self::InvalidState { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::Upstream { message } => message.clone(),
            Self::Validation(err) => err.to_string(),
            Self::Database(_) | Self::Hashing(_) | Self::TokenSigning(_) | Self::Internal { .. } => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("blocking task failed: {}", err))
    }
}
