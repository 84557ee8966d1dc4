//! Repository for comments under a post.

use quill_core::error::CoreError;
use quill_core::pagination::{PageRequest, Paginated};
use quill_core::types::DbId;

use crate::models::comment::{Comment, CommentWithAuthor, CreateComment};
use crate::store::BlogStore;

/// Provides CRUD and pagination operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment under `post_id`, returning the created record.
    ///
    /// The `post_id` argument always wins over whatever the payload says;
    /// fails with `NotFound` when the post does not exist.
    pub fn create(
        store: &BlogStore,
        post_id: DbId,
        input: CreateComment,
    ) -> Result<Comment, CoreError> {
        store.insert_comment(post_id, input)
    }

    /// Find a comment by id, regardless of which post it belongs to.
    pub fn find_by_id(store: &BlogStore, id: DbId) -> Option<Comment> {
        store.comment_by_id(id)
    }

    /// One page of the comments belonging to `post_id`, in insertion order
    /// (ascending id), each joined with its author's display name.
    /// `total_count` covers only that post's comments.
    pub fn list_for_post(
        store: &BlogStore,
        post_id: DbId,
        page: PageRequest,
    ) -> Paginated<CommentWithAuthor> {
        let all: Vec<CommentWithAuthor> = store
            .comments_for_post(post_id)
            .into_iter()
            .map(|comment| {
                let author_name = store
                    .user_by_id(comment.user_id)
                    .map(|u| u.name)
                    .unwrap_or_else(|| "unknown".to_string());
                CommentWithAuthor {
                    id: comment.id,
                    post_id: comment.post_id,
                    user_id: comment.user_id,
                    body: comment.body,
                    author_name,
                }
            })
            .collect();

        page.paginate(all)
    }
}
