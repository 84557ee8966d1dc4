//! Handlers for the `/posts/{post_id}/comments` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use quill_core::error::CoreError;
use quill_core::pagination::Paginated;
use quill_core::types::DbId;
use quill_db::models::comment::{Comment, CommentWithAuthor, CreateComment};
use quill_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/posts/{post_id}/comments?page=&page_size=
///
/// Paginated comments for one post, insertion order. The post is checked
/// first so a missing post yields an explanatory 404 rather than an empty
/// page.
pub async fn list_comments(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(post_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<CommentWithAuthor>>> {
    if !state.store.post_exists(post_id) {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "post",
            id: post_id,
        }));
    }

    let page = params.into_page()?;
    Ok(Json(CommentRepo::list_for_post(&state.store, post_id, page)))
}

/// GET /api/posts/{post_id}/comments/{comment_id}
///
/// A single comment. A comment that exists but hangs off a different post
/// is a 400 mismatch, not a 404.
pub async fn get_comment(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((post_id, comment_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Comment>> {
    let comment =
        CommentRepo::find_by_id(&state.store, comment_id).ok_or(AppError::Core(
            CoreError::NotFound {
                entity: "comment",
                id: comment_id,
            },
        ))?;

    if comment.post_id != post_id {
        return Err(AppError::Core(CoreError::Validation(
            "Comment does not belong to the specified post".into(),
        )));
    }

    Ok(Json(comment))
}

/// POST /api/posts/{post_id}/comments
///
/// Create a comment under the post named in the path. Any `post_id` in the
/// payload is overwritten with the path value -- deliberate, documented
/// behaviour. 404 when the post does not exist (enforced by the store).
pub async fn add_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(post_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentRepo::create(&state.store, post_id, input)?;

    tracing::info!(
        comment_id = comment.id,
        post_id,
        user_id = user.user_id,
        "Comment created"
    );

    let location = format!("/api/posts/{post_id}/comments/{}", comment.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(comment),
    ))
}
