//! Shared Error Types
//!
//! Errors raised while checking request payloads. They are produced by the
//! validation helpers in [`crate::shared::validation`] and converted into a
//! `400 Bad Request` envelope by the backend.
//!
//! # Error Categories
//!
//! - `SerializationError` - the body was not the JSON shape the route expects
//! - `ValidationError` - a field broke its schema (length, format, presence)
//!
//! # Usage
//!
//! ```rust
//! use chatnest::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "\"email\" must be a valid email");
//! assert_eq!(error.to_string(), "\"email\" must be a valid email");
//! ```
use thiserror::Error;

/// Request payload errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Field validation error
    ///
    /// The message is already phrased for the client and names the field,
    /// so `Display` prints it unchanged.
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
