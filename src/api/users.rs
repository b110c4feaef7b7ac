//! Admin user management endpoints.

use axum::extract::{Path, State};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::UserProfile;
use crate::AppState;

/// GET /api/admin/users - List all user accounts.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserProfile>> {
    let users = state.repo.list_users().await?;
    success(users.into_iter().map(UserProfile::from).collect())
}

/// PATCH /api/admin/users/:id/toggle-admin - Flip a user's admin flag.
pub async fn toggle_user_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserProfile> {
    let user = state
        .repo
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    let is_admin = !user.is_admin;
    state.repo.set_user_admin(&id, is_admin).await?;

    let mut profile = UserProfile::from(user);
    profile.is_admin = is_admin;
    success(profile)
}
