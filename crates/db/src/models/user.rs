//! User entity model and DTOs.

use quill_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Full user record as held by the store.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    /// Display name shown next to posts and comments.
    pub name: String,
}

impl User {
    /// Strip the password hash for API responses.
    pub fn into_response(self) -> UserResponse {
        UserResponse {
            id: self.id,
            username: self.username,
            name: self.name,
        }
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub name: String,
}

/// DTO for creating a new user. The password arrives already hashed; the
/// store never sees a plaintext password.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub name: String,
}
