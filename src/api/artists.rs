//! Artist API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Artist, CreateArtistRequest, UpdateArtistRequest};
use crate::AppState;

/// Query parameters for listing artists.
#[derive(Debug, Default, Deserialize)]
pub struct ListArtistsQuery {
    pub is_featured: Option<bool>,
}

/// GET /api/artists - List artists ordered by name.
pub async fn list_artists(
    State(state): State<AppState>,
    Query(query): Query<ListArtistsQuery>,
) -> ApiResult<Vec<Artist>> {
    let artists = state.repo.list_artists(query.is_featured).await?;
    success(artists)
}

/// GET /api/artists/:id - Get a single artist.
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Artist> {
    match state.repo.get_artist(&id).await? {
        Some(artist) => success(artist),
        None => Err(AppError::NotFound(format!("Artist {} not found", id))),
    }
}

/// POST /api/artists - Create a new artist.
pub async fn create_artist(
    State(state): State<AppState>,
    Json(request): Json<CreateArtistRequest>,
) -> ApiResult<Artist> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let artist = state.repo.create_artist(&request).await?;
    success(artist)
}

/// PUT /api/artists/:id - Update an artist.
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateArtistRequest>,
) -> ApiResult<Artist> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let artist = state.repo.update_artist(&id, &request).await?;
    success(artist)
}

/// DELETE /api/artists/:id - Delete an artist.
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_artist(&id).await?;
    success(())
}
