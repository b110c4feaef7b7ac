//! Merchandise API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateMerchandiseRequest, MerchandiseItem, UpdateMerchandiseRequest};
use crate::AppState;

/// Query parameters for listing merchandise.
#[derive(Debug, Deserialize)]
pub struct ListMerchandiseQuery {
    /// Available items only by default, matching the store page.
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub category: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ListMerchandiseQuery {
    fn default() -> Self {
        Self {
            is_available: true,
            category: None,
        }
    }
}

/// GET /api/merchandise - List merchandise items ordered by name.
pub async fn list_merchandise(
    State(state): State<AppState>,
    Query(query): Query<ListMerchandiseQuery>,
) -> ApiResult<Vec<MerchandiseItem>> {
    let items = state
        .repo
        .list_merchandise(Some(query.is_available), query.category.as_deref())
        .await?;
    success(items)
}

/// GET /api/merchandise/:id - Get a single merchandise item.
pub async fn get_merchandise_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MerchandiseItem> {
    match state.repo.get_merchandise(&id).await? {
        Some(item) => success(item),
        None => Err(AppError::NotFound(format!(
            "Merchandise item {} not found",
            id
        ))),
    }
}

/// POST /api/merchandise - Create a new merchandise item.
pub async fn create_merchandise_item(
    State(state): State<AppState>,
    Json(request): Json<CreateMerchandiseRequest>,
) -> ApiResult<MerchandiseItem> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let item = state.repo.create_merchandise(&request).await?;
    success(item)
}

/// PUT /api/merchandise/:id - Update a merchandise item.
pub async fn update_merchandise_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMerchandiseRequest>,
) -> ApiResult<MerchandiseItem> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let item = state.repo.update_merchandise(&id, &request).await?;
    success(item)
}

/// DELETE /api/merchandise/:id - Delete a merchandise item.
pub async fn delete_merchandise_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_merchandise(&id).await?;
    success(())
}
