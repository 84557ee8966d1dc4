//! Post entity model and DTOs.

use quill_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Post record as held by the store.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: DbId,
    /// Id of the authoring user.
    pub user_id: DbId,
    pub title: String,
    pub body: String,
}

/// DTO for creating a new post.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub user_id: DbId,
    pub title: String,
    pub body: String,
}

/// Post joined with its author's display name, as returned by list and
/// get endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithAuthor {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub body: String,
    pub author_name: String,
}
