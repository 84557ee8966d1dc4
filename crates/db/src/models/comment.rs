//! Comment entity model and DTOs.

use quill_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Comment record as held by the store. Always attached to a post.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub user_id: DbId,
    pub body: String,
}

/// DTO for creating a new comment.
///
/// `post_id` is accepted in the payload for wire compatibility but is
/// always overwritten with the path parameter by the comments endpoint, so
/// the submitted value is never trusted.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    #[serde(default)]
    pub post_id: Option<DbId>,
    pub user_id: DbId,
    pub body: String,
}

/// Comment joined with its author's display name, as returned by the
/// per-post comment listing.
#[derive(Debug, Clone, Serialize)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub post_id: DbId,
    pub user_id: DbId,
    pub body: String,
    pub author_name: String,
}
