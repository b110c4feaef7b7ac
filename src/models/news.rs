//! News article model matching the admin NewsManagement interface.

use serde::{Deserialize, Serialize};

/// A news article written by foundation staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "super::now_rfc3339")]
    pub published_at: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default = "super::now_rfc3339")]
    pub created_at: String,
    #[serde(default = "super::now_rfc3339")]
    pub updated_at: String,
}

/// Request body for creating a news article.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "super::now_rfc3339")]
    pub published_at: String,
    #[serde(default)]
    pub is_published: bool,
}

/// Request body for updating an existing news article (full record, last write wins).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNewsRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "super::now_rfc3339")]
    pub published_at: String,
    #[serde(default)]
    pub is_published: bool,
}
