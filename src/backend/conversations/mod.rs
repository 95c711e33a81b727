//! Conversations Module
//!
//! Messages inside a topic, and the optional assistant reply generation.
//!
//! - **`db`** - append-only `conversations` table access
//! - **`generator`** - `ReplyGenerator` trait and the chat completions client
//! - **`types`** - request and response bodies
//! - **`handlers`** - `/conversation/*` routes

pub mod db;
pub mod generator;
pub mod handlers;
pub mod types;

pub use generator::{ChatCompletionsGenerator, GeneratorError, ReplyGenerator};
pub use handlers::generate;
