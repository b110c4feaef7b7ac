//! Contact message model for the public contact form.

use serde::{Deserialize, Serialize};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default = "super::now_rfc3339")]
    pub created_at: String,
}

/// Request body for submitting a contact message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub phone: String,
}

/// Request body for marking a contact message read or unread.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactRequest {
    pub is_read: bool,
}
