//! Server Module
//!
//! This module contains the code that initializes and configures the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration and database pool
//! ├── state.rs        - AppState and FromRef implementations
//! ├── bootstrap.rs    - Admin / VIP account seeding
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: connect, then run the embedded migrations
//! 3. **Seeding**: create missing admin / VIP accounts
//! 4. **State Creation**: session keys, password hasher, reply generator
//! 5. **Router Creation**: routes, fallback and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Startup account seeding
pub mod bootstrap;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, create_app_with_pool, StartupError};
pub use state::AppState;
