//! User Handlers Module
//!
//! This module contains all HTTP handlers for the `/user/*` routes.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── me.rs       - Get current user handler
//! ├── update.rs   - Username / password change handler
//! └── admin.rs    - List, ban and enable users (admin only)
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /user/create
//! - **`login`** - POST /user/login
//! - **`get_profile`** - GET /user/get
//! - **`update_profile`** - POST /user/update
//! - **`get_all_users`** - GET /user/get_all (admin)
//! - **`ban_user`** - POST /user/ban (admin)
//! - **`enable_user`** - POST /user/enable (admin)

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// Profile update handler
pub mod update;

/// Admin handlers
pub mod admin;

pub use types::{LoginRequest, SignupRequest, UpdateProfileRequest, UserResponse};

pub use admin::{ban_user, enable_user, get_all_users};
pub use login::login;
pub use me::get_profile;
pub use signup::signup;
pub use update::update_profile;
