//! Handlers for the `/posts` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use quill_core::error::CoreError;
use quill_core::pagination::Paginated;
use quill_core::types::DbId;
use quill_db::models::post::{CreatePost, PostWithAuthor};
use quill_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/posts?page=&page_size=
///
/// Paginated post listing, newest first, bodies truncated for preview,
/// each item carrying the author's display name.
pub async fn list_posts(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<PostWithAuthor>>> {
    let page = params.into_page()?;
    Ok(Json(PostRepo::list(&state.store, page)))
}

/// GET /api/posts/{id}
///
/// Full post body with author name; 404 when the id is unknown.
pub async fn get_post(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<PostWithAuthor>> {
    let post = PostRepo::find_by_id(&state.store, id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "post", id }))?;
    Ok(Json(post))
}

/// POST /api/posts
///
/// Create a post. Returns 201 with a `Location` header pointing at the
/// created resource and the post as the body.
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::create(&state.store, input)?;

    tracing::info!(post_id = post.id, user_id = user.user_id, "Post created");

    let location = format!("/api/posts/{}", post.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(post),
    ))
}
