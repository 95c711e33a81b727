//! Wire Models
//!
//! JSON shapes returned by the API for users, topics and conversations.
//! Field names are camelCase to match what the web frontend reads
//! (`isAdmin`, `userId`, `topicId`, `createdAt`, ...).
//!
//! None of these types carries a password or password hash; database rows
//! are converted into them before anything leaves the server.

/// Speaker tag for a conversation entry
pub mod role;

/// User profile as seen by clients
pub mod user;

/// Topic (conversation thread)
pub mod topic;

/// Single conversation entry
pub mod conversation;

pub use conversation::ConversationView;
pub use role::Role;
pub use topic::TopicView;
pub use user::UserProfile;
