//! Dashboard summary statistics.

use serde::{Deserialize, Serialize};

/// Aggregated counts shown on the dashboard overview; computed in one query
/// pass so the shell does not have to re-list every collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteStats {
    #[serde(default)]
    pub total_staff: i64,
    #[serde(default)]
    pub total_events: i64,
    #[serde(default)]
    pub total_donations: i64,
    #[serde(default)]
    pub total_merchandise: i64,
    #[serde(default)]
    pub total_artists: i64,
    #[serde(default)]
    pub total_news: i64,
    /// Sum over completed donations only.
    #[serde(default)]
    pub total_donated: f64,
    #[serde(default)]
    pub total_messages: i64,
    #[serde(default)]
    pub unread_messages: i64,
}
