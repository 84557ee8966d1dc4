//! Route definitions for the `/posts` resource and its nested comments.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comments, posts};
use crate::state::AppState;

/// Routes mounted at `/posts`. All require a valid Bearer token (enforced
/// by the `AuthUser` extractor in each handler).
///
/// The first path segment is named `{id}` everywhere (matchit requires one
/// name per position); the comment handlers read it as the post id.
///
/// ```text
/// GET  /                               -> list_posts
/// POST /                               -> create_post
/// GET  /{id}                           -> get_post
/// GET  /{id}/comments                  -> list_comments
/// POST /{id}/comments                  -> add_comment
/// GET  /{id}/comments/{comment_id}     -> get_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/{id}", get(posts::get_post))
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route("/{id}/comments/{comment_id}", get(comments::get_comment))
}
