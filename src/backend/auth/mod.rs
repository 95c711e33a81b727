//! Authentication Module
//!
//! This module handles user accounts, password hashing, session tokens and
//! the `/user/*` HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, email and password → user created (enabled, not admin)
//! 2. **Login**: email and password → credentials verified → JWT returned
//! 3. **Protected routes**: `Authorization: Bearer <jwt>` → token verified by
//!    the auth middleware → caller identity available to handlers
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage and never serialized
//! - Tokens are HS256 JWTs carrying `{id, email, isAdmin, iat, exp}`
//! - Tokens expire after 24 hours by default
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for the user routes
pub mod handlers;

pub use handlers::{ban_user, enable_user, get_all_users, get_profile, login, signup, update_profile};
pub use password::PasswordHasher;
pub use sessions::{Claims, SessionError, SessionKeys};
