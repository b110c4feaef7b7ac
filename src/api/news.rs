//! News API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateNewsRequest, NewsArticle, UpdateNewsRequest};
use crate::AppState;

/// Query parameters for listing news articles.
#[derive(Debug, Default, Deserialize)]
pub struct ListNewsQuery {
    pub is_published: Option<bool>,
}

/// GET /api/news - List news articles, newest first.
pub async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<ListNewsQuery>,
) -> ApiResult<Vec<NewsArticle>> {
    let articles = state.repo.list_news(query.is_published).await?;
    success(articles)
}

/// GET /api/news/:id - Get a single news article.
pub async fn get_news_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<NewsArticle> {
    match state.repo.get_news(&id).await? {
        Some(article) => success(article),
        None => Err(AppError::NotFound(format!("News article {} not found", id))),
    }
}

/// POST /api/news - Create a news article.
pub async fn create_news_article(
    State(state): State<AppState>,
    Json(request): Json<CreateNewsRequest>,
) -> ApiResult<NewsArticle> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let article = state.repo.create_news(&request).await?;
    success(article)
}

/// PUT /api/news/:id - Update a news article.
pub async fn update_news_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateNewsRequest>,
) -> ApiResult<NewsArticle> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let article = state.repo.update_news(&id, &request).await?;
    success(article)
}

/// DELETE /api/news/:id - Delete a news article.
pub async fn delete_news_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_news(&id).await?;
    success(())
}
