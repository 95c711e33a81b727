//! Shared Module
//!
//! Types used on both sides of the HTTP API: the JSON models returned to
//! clients, payload validation, and the validation error type. Nothing here
//! depends on the HTTP stack.

/// Shared error types
pub mod error;

/// Request field validation
pub mod validation;

/// JSON models for users, topics and conversations
pub mod models;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use models::{ConversationView, Role, TopicView, UserProfile};
