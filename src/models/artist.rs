//! Artist model matching the admin ArtistsManagement interface.

use serde::{Deserialize, Serialize};

/// An artist supported by the foundation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub image_url: String,
    /// Opaque JSON text; the backend never parses it.
    #[serde(default)]
    pub social_links: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "super::now_rfc3339")]
    pub created_at: String,
    #[serde(default = "super::now_rfc3339")]
    pub updated_at: String,
}

/// Request body for creating a new artist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtistRequest {
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub social_links: String,
    #[serde(default)]
    pub is_featured: bool,
}

/// Request body for updating an existing artist (full record, last write wins).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateArtistRequest {
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub social_links: String,
    #[serde(default)]
    pub is_featured: bool,
}
