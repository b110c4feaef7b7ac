//! Contact message API endpoints.
//!
//! Submission is public; everything else is admin-only (enforced by the
//! session middleware).

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{ContactMessage, CreateContactRequest, UpdateContactRequest};
use crate::AppState;

/// Query parameters for listing contact messages.
#[derive(Debug, Default, Deserialize)]
pub struct ListContactQuery {
    pub is_read: Option<bool>,
}

/// GET /api/contact - List contact messages, most recent first.
pub async fn list_contact_messages(
    State(state): State<AppState>,
    Query(query): Query<ListContactQuery>,
) -> ApiResult<Vec<ContactMessage>> {
    let messages = state.repo.list_contact_messages(query.is_read).await?;
    success(messages)
}

/// GET /api/contact/:id - Get a single contact message.
pub async fn get_contact_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ContactMessage> {
    match state.repo.get_contact_message(&id).await? {
        Some(message) => success(message),
        None => Err(AppError::NotFound(format!("Message {} not found", id))),
    }
}

/// POST /api/contact - Submit a contact message from the public form.
pub async fn create_contact_message(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> ApiResult<ContactMessage> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let message = state.repo.create_contact_message(&request).await?;
    success(message)
}

/// PUT /api/contact/:id - Mark a contact message read or unread.
pub async fn update_contact_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateContactRequest>,
) -> ApiResult<ContactMessage> {
    let message = state.repo.update_contact_message(&id, &request).await?;
    success(message)
}

/// DELETE /api/contact/:id - Delete a contact message.
pub async fn delete_contact_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_contact_message(&id).await?;
    success(())
}
