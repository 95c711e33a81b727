//! ChatNest - Main Library
//!
//! ChatNest is the backend of a chat web application: user accounts with
//! JWT sessions, an admin console for banning and re-enabling users, and
//! per-user topics holding conversation threads, optionally answered by an
//! OpenAI-compatible reply generator.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that cross the HTTP boundary
//!   - JSON models (users, topics, conversations)
//!   - Payload validation and its error type
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and middleware
//!   - SQLite persistence through sqlx
//!   - Password hashing, session tokens, reply generation
//!
//! # Usage
//!
//! ```rust,no_run
//! use chatnest::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation
//! - `backend::error::BackendError` for everything a handler can fail with;
//!   it renders as `{"error": <message>, "status": <code>}`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
