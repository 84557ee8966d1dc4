//! Handlers for the `/auth` resource (login).

use axum::extract::State;
use axum::Json;
use quill_core::error::CoreError;
use quill_db::models::user::UserResponse;
use quill_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// POST /api/auth/login
///
/// Authenticate with username + password. Returns a signed access token.
/// Unknown usernames and wrong passwords produce the same 401 message so
/// the endpoint does not leak which usernames exist. A missing signing
/// secret is a 400 configuration error, not an authentication failure.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = UserRepo::find_by_username(&state.store, &input.username).ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        ))
    })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let token = generate_access_token(user.id, &user.username, &state.config.jwt)?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: user.into_response(),
    }))
}
