//! Authentication API endpoints.

use axum::{extract::State, http::HeaderMap, Json};

use super::{success, ApiResult};
use crate::auth;
use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, UserProfile};
use crate::AppState;

/// POST /api/auth/register - Create a regular (non-admin) account.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<UserProfile> {
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }

    if state
        .repo
        .get_user_by_email(&request.email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    let password_hash = auth::hash_password(&request.password)?;
    let user = state
        .repo
        .create_user(&request.email, &password_hash, &request.full_name, false)
        .await?;

    success(user.into())
}

/// POST /api/auth/login - Exchange credentials for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let user = state.repo.get_user_by_email(&request.email).await?;

    let Some(user) = user else {
        return Err(AppError::Unauthorized(
            "Incorrect email or password".to_string(),
        ));
    };

    if !user.is_active || !auth::verify_password(&request.password, &user.password_hash) {
        return Err(AppError::Unauthorized(
            "Incorrect email or password".to_string(),
        ));
    }

    // Opportunistic cleanup; stale sessions also fail validation individually.
    state.repo.purge_expired_sessions().await.ok();

    let session = state
        .repo
        .create_session(&user.id, state.config.session_ttl_minutes)
        .await?;

    success(LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
    })
}

/// POST /api/auth/logout - Revoke the presented session token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    if let Some(token) = auth::bearer_token_from_headers(&headers) {
        state.repo.delete_session(&token).await?;
    }
    success(())
}
