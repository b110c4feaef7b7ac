//! Event API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateEventRequest, Event, UpdateEventRequest};
use crate::AppState;

/// Query parameters for listing events.
#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    /// Active events only by default, matching the public site.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ListEventsQuery {
    fn default() -> Self {
        Self { is_active: true }
    }
}

/// GET /api/events - List events, newest first.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> ApiResult<Vec<Event>> {
    let events = state.repo.list_events(Some(query.is_active)).await?;
    success(events)
}

/// GET /api/events/:id - Get a single event.
pub async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Event> {
    match state.repo.get_event(&id).await? {
        Some(event) => success(event),
        None => Err(AppError::NotFound(format!("Event {} not found", id))),
    }
}

/// POST /api/events - Create a new event.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<Event> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let event = state.repo.create_event(&request).await?;
    success(event)
}

/// PUT /api/events/:id - Update an event.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateEventRequest>,
) -> ApiResult<Event> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let event = state.repo.update_event(&id, &request).await?;
    success(event)
}

/// DELETE /api/events/:id - Delete an event.
pub async fn delete_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_event(&id).await?;
    success(())
}
