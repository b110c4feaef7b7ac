//! Donation API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateDonationRequest, Donation, DonationStatus, UpdateDonationRequest};
use crate::AppState;

/// Query parameters for listing donations.
#[derive(Debug, Default, Deserialize)]
pub struct ListDonationsQuery {
    pub status: Option<String>,
}

/// GET /api/donations - List donations, most recent first.
pub async fn list_donations(
    State(state): State<AppState>,
    Query(query): Query<ListDonationsQuery>,
) -> ApiResult<Vec<Donation>> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(DonationStatus::from_str(raw).ok_or_else(|| {
            AppError::Validation(format!("Unknown donation status: {}", raw))
        })?),
        None => None,
    };

    let donations = state.repo.list_donations(status).await?;
    success(donations)
}

/// GET /api/donations/:id - Get a single donation.
pub async fn get_donation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Donation> {
    match state.repo.get_donation(&id).await? {
        Some(donation) => success(donation),
        None => Err(AppError::NotFound(format!("Donation {} not found", id))),
    }
}

/// POST /api/donations - Record a new donation.
pub async fn create_donation(
    State(state): State<AppState>,
    Json(request): Json<CreateDonationRequest>,
) -> ApiResult<Donation> {
    if request.donor_name.trim().is_empty() {
        return Err(AppError::Validation("Donor name is required".to_string()));
    }
    if request.amount < 0.0 {
        return Err(AppError::Validation(
            "Amount must not be negative".to_string(),
        ));
    }

    let donation = state.repo.create_donation(&request).await?;
    success(donation)
}

/// PUT /api/donations/:id - Update a donation.
pub async fn update_donation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateDonationRequest>,
) -> ApiResult<Donation> {
    if request.amount < 0.0 {
        return Err(AppError::Validation(
            "Amount must not be negative".to_string(),
        ));
    }

    let donation = state.repo.update_donation(&id, &request).await?;
    success(donation)
}

/// DELETE /api/donations/:id - Delete a donation.
pub async fn delete_donation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_donation(&id).await?;
    success(())
}
