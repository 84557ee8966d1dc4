pub mod auth;
pub mod health;
pub mod posts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/login                          POST (no auth)
/// /posts                               GET, POST
/// /posts/{id}                          GET
/// /posts/{post_id}/comments            GET, POST
/// /posts/{post_id}/comments/{comment_id}  GET
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/posts", posts::router())
}
