//! Dashboard statistics endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::SiteStats;
use crate::AppState;

/// GET /api/admin/stats - Aggregated counts for the dashboard overview.
///
/// One fetch serves both the shell's stat cards and any tab that only needs
/// counts, instead of re-listing every collection.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<SiteStats> {
    let stats = state.repo.site_stats().await?;
    success(stats)
}
