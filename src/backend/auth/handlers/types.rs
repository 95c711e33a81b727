/**
 * User Handler Types
 *
 * Request and response bodies for the user routes. Request fields are
 * optional at the serde level so that a missing field surfaces as a
 * `"<field>" is required` validation error rather than a parse failure.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::models::UserProfile;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct SignupRequest {
    /// Display name (3-20 chars)
    pub username: Option<String>,
    pub email: Option<String>,
    /// Plaintext password (6-20 chars), hashed before storage
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Profile update request
///
/// Either `newUsername`, or `password` together with `newPassword`.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// Current password, required for a password change
    pub password: Option<String>,
    pub new_password: Option<String>,
    pub new_username: Option<String>,
}

/// Body of the admin ban / enable routes
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct TargetUserRequest {
    /// Target user id, kept as a string so unparseable ids can be echoed back
    pub id: Option<String>,
}

/// Response carrying the id of the affected user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserIdResponse {
    pub id: Uuid,
    pub msg: String,
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    /// Session token for the `Authorization: Bearer` header
    pub jwt: String,
    pub msg: String,
}

/// Profile update response
///
/// A rename echoes the new username; a password change only the id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum UpdateProfileResponse {
    Renamed { id: Uuid, username: String, msg: String },
    PasswordChanged { id: Uuid, msg: String },
}

/// Profile fetch response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub user: UserProfile,
    pub msg: String,
}

/// Admin listing response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UsersResponse {
    pub users: Vec<UserProfile>,
    pub msg: String,
}

/// Admin ban / enable response
///
/// `id` is echoed as sent by the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TargetUserResponse {
    pub id: String,
    pub msg: String,
}
