//! Staff API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateStaffRequest, StaffMember, UpdateStaffRequest};
use crate::AppState;

/// GET /api/staff - List all staff members.
pub async fn list_staff(State(state): State<AppState>) -> ApiResult<Vec<StaffMember>> {
    let staff = state.repo.list_staff().await?;
    success(staff)
}

/// GET /api/staff/:id - Get a single staff member.
pub async fn get_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StaffMember> {
    match state.repo.get_staff(&id).await? {
        Some(member) => success(member),
        None => Err(AppError::NotFound(format!("Staff member {} not found", id))),
    }
}

/// POST /api/staff - Create a new staff member.
pub async fn create_staff(
    State(state): State<AppState>,
    Json(request): Json<CreateStaffRequest>,
) -> ApiResult<StaffMember> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("Role is required".to_string()));
    }

    let member = state.repo.create_staff(&request).await?;
    success(member)
}

/// PUT /api/staff/:id - Update a staff member.
pub async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStaffRequest>,
) -> ApiResult<StaffMember> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let member = state.repo.update_staff(&id, &request).await?;
    success(member)
}

/// DELETE /api/staff/:id - Delete a staff member.
pub async fn delete_staff(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_staff(&id).await?;
    success(())
}
