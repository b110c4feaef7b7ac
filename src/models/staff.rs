//! Staff member model matching the admin StaffManagement interface.

use serde::{Deserialize, Serialize};

/// A staff member shown on the team section and managed from the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default = "super::now_rfc3339")]
    pub created_at: String,
    #[serde(default = "super::now_rfc3339")]
    pub updated_at: String,
}

/// Request body for creating a new staff member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaffRequest {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub bio: String,
}

/// Request body for updating an existing staff member (full record, last write wins).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStaffRequest {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub bio: String,
}
