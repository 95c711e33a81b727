//! Topics Module
//!
//! Named conversation threads owned by a single user.
//!
//! - **`db`** - `topics` table access (owner-scoped, soft delete)
//! - **`types`** - request and response bodies
//! - **`handlers`** - `/topic/*` routes

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{create_topic, delete_topic, get_topic, rename_topic};
