//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent directly to the router via `tower::ServiceExt::oneshot`
//! without a TCP listener, through the same middleware stack production uses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use quill_api::auth::jwt::JwtConfig;
use quill_api::auth::password::hash_password;
use quill_api::config::ServerConfig;
use quill_api::router::build_app_router;
use quill_api::state::AppState;
use quill_db::BlogStore;

/// Plaintext password of the seeded `admin` user in tests.
pub const ADMIN_PASSWORD: &str = "password";

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: Some("integration-test-secret-long-enough".to_string()),
            access_token_expiry_mins: 30,
        },
    }
}

/// Build the full application router over the given store, mirroring the
/// router construction in `main.rs`.
pub fn build_test_app(store: BlogStore) -> Router {
    build_test_app_with_config(store, test_config())
}

/// Same as [`build_test_app`] but with an explicit config (used by tests
/// that need e.g. a missing JWT secret).
pub fn build_test_app_with_config(store: BlogStore, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A store populated with the demo seed: `admin` user + 50 posts.
pub fn seeded_store() -> BlogStore {
    let store = BlogStore::new();
    let hash = hash_password(ADMIN_PASSWORD).expect("hashing should succeed");
    quill_db::seed::run(&store, hash).expect("seeding should succeed");
    store
}

/// Log in via the API and return the bearer token string.
pub async fn login_admin(app: Router) -> String {
    let body = serde_json::json!({ "username": "admin", "password": ADMIN_PASSWORD });
    let response = post_json(app, "/api/auth/login", body, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must contain token")
        .to_string()
}

/// Send a GET request, optionally with a bearer token.
pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).expect("request must build");
    app.oneshot(request).await.expect("request must succeed")
}

/// Send a POST request with a JSON body, optionally with a bearer token.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("request must build");
    app.oneshot(request).await.expect("request must succeed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be valid JSON")
}
