//! Session-based authentication.
//!
//! Admin requests carry a server-issued bearer token; the token is looked up
//! and expiry-checked on every request. Public reads and the contact form
//! pass through without a token.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use crate::errors::AppError;
use crate::AppState;

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a plain password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Session middleware applied to the whole `/api` tree. Routes that do not
/// need an admin session (public reads, the auth exchange, contact
/// submission) pass through.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !requires_auth(request.method(), request.uri().path()) {
        return next.run(request).await;
    }

    let Some(token) = bearer_token(&request) else {
        return AppError::Unauthorized("Missing bearer token".to_string()).into_response();
    };

    match validate_session(&state, &token).await {
        Ok(()) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}

/// Extract the bearer token from the Authorization header.
fn bearer_token(request: &Request) -> Option<String> {
    bearer_token_from_headers(request.headers())
}

/// Extract the bearer token from a header map.
pub fn bearer_token_from_headers(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Decide whether a request needs an admin session.
///
/// Public surface: every resource GET, the contact form POST, and the auth
/// exchange itself. Everything else under /api is admin-only.
fn requires_auth(method: &Method, path: &str) -> bool {
    let path = path.strip_prefix("/api").unwrap_or(path);

    if path.starts_with("/auth") {
        // Login and registration create sessions; logout revokes the
        // presented token, which is authorization enough.
        return false;
    }
    if path.starts_with("/admin") {
        return true;
    }
    if path == "/contact" || path.starts_with("/contact/") {
        // The public site may submit messages; reading them is admin-only.
        return *method != Method::POST;
    }

    *method != Method::GET
}

/// Check a presented token against the session store.
async fn validate_session(state: &AppState, token: &str) -> Result<(), AppError> {
    let session = state
        .repo
        .get_session(token)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired session".to_string()))?;

    let expires_at = DateTime::parse_from_rfc3339(&session.expires_at)
        .map_err(|_| AppError::Unauthorized("Invalid or expired session".to_string()))?;

    if expires_at.with_timezone(&Utc) < Utc::now() {
        state.repo.delete_session(token).await.ok();
        return Err(AppError::Unauthorized(
            "Invalid or expired session".to_string(),
        ));
    }

    let user = state
        .repo
        .get_user(&session.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Not authorized as admin".to_string()))?;

    if !user.is_active || !user.is_admin {
        return Err(AppError::Unauthorized("Not authorized as admin".to_string()));
    }

    Ok(())
}
