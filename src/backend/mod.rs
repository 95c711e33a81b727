//! Backend Module
//!
//! This module contains all server-side code for the ChatNest API.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, startup and seeding
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, JWT sessions, `/user/*` handlers
//! - **`topics`** - Conversation threads owned by a user
//! - **`conversations`** - Messages within a topic and reply generation
//! - **`middleware`** - Bearer-token authentication and JSON body extraction
//! - **`error`** - Backend error taxonomy and its JSON rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state, init, bootstrap
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts and sessions
//! ├── topics/         - Topic handlers and persistence
//! ├── conversations/  - Conversation handlers, persistence, generator
//! ├── middleware/     - Request middleware and extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the SQLite pool, the session keys,
//! the password hasher and the optional reply generator. Requests are
//! otherwise stateless: the caller's identity travels in the bearer token.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Topics (conversation threads)
pub mod topics;

/// Conversation entries and reply generation
pub mod conversations;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
