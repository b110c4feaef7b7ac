//! Event model matching the admin EventsManagement interface.

use serde::{Deserialize, Serialize};

/// A foundation event, past or upcoming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "super::now_rfc3339")]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub registration_required: bool,
    /// No attendance cap when absent.
    #[serde(default)]
    pub max_attendees: Option<i64>,
    #[serde(default)]
    pub attendees_count: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "super::now_rfc3339")]
    pub created_at: String,
    #[serde(default = "super::now_rfc3339")]
    pub updated_at: String,
}

impl Event {
    /// Attendee cell text: count with a "/ max" suffix only when a cap is set.
    pub fn attendees_display(&self) -> String {
        match self.max_attendees {
            Some(max) => format!("{} / {}", self.attendees_count, max),
            None => self.attendees_count.to_string(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Request body for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "super::now_rfc3339")]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub registration_required: bool,
    #[serde(default)]
    pub max_attendees: Option<i64>,
}

/// Request body for updating an existing event (full record, last write wins).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "super::now_rfc3339")]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub registration_required: bool,
    /// Absent or null clears the attendance cap.
    #[serde(default)]
    pub max_attendees: Option<i64>,
    #[serde(default)]
    pub attendees_count: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
