//! Dashboard shell: tab selection from the URL hash and summary stats.

use super::{ApiClient, ClientError};
use crate::models::SiteStats;

/// The dashboard's single-active-view tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Dashboard,
    Staff,
    Events,
    Donations,
    Merchandise,
    Artists,
    News,
}

impl AdminTab {
    /// Derive the active tab from a URL hash fragment. Unknown or empty
    /// fragments land on the dashboard overview.
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#') {
            "staff" => AdminTab::Staff,
            "events" => AdminTab::Events,
            "donations" => AdminTab::Donations,
            "merchandise" => AdminTab::Merchandise,
            "artists" => AdminTab::Artists,
            "news" => AdminTab::News,
            _ => AdminTab::Dashboard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "dashboard",
            AdminTab::Staff => "staff",
            AdminTab::Events => "events",
            AdminTab::Donations => "donations",
            AdminTab::Merchandise => "merchandise",
            AdminTab::Artists => "artists",
            AdminTab::News => "news",
        }
    }
}

/// Owns navigation state and the overview numbers; exactly one management
/// tab is active at a time.
pub struct DashboardShell {
    active_tab: AdminTab,
    stats: Option<SiteStats>,
}

impl DashboardShell {
    pub fn new() -> Self {
        Self {
            active_tab: AdminTab::Dashboard,
            stats: None,
        }
    }

    pub fn active_tab(&self) -> AdminTab {
        self.active_tab
    }

    /// Re-derive the active tab; called on initialization and on every hash
    /// change.
    pub fn on_hash_change(&mut self, hash: &str) {
        self.active_tab = AdminTab::from_hash(hash);
    }

    /// Load the overview counts from the shared stats endpoint.
    pub async fn load_stats(&mut self, client: &ApiClient) -> Result<SiteStats, ClientError> {
        let stats = client.site_stats().await?;
        self.stats = Some(stats.clone());
        Ok(stats)
    }

    pub fn stats(&self) -> Option<&SiteStats> {
        self.stats.as_ref()
    }
}

impl Default for DashboardShell {
    fn default() -> Self {
        Self::new()
    }
}
