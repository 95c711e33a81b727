//! Middleware Module
//!
//! HTTP middleware and request extractors.
//!
//! - **`auth`** - bearer-token verification for protected routes, plus the
//!   `AuthUser` / `AdminUser` extractors handlers use to read the caller
//! - **`json`** - JSON body extractor that reports bad payloads in the API's
//!   error envelope

pub mod auth;
pub mod json;

pub use auth::{auth_middleware, require_active_user, AdminUser, AuthUser, AuthenticatedUser};
pub use json::JsonBody;
