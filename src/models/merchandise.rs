//! Merchandise model matching the admin MerchandiseManagement interface.

use serde::{Deserialize, Serialize};

/// An item sold in the foundation store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchandiseItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock_quantity: i64,
    /// Set independently of stock; an item can be pulled while still in stock.
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default = "super::now_rfc3339")]
    pub created_at: String,
    #[serde(default = "super::now_rfc3339")]
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

/// Request body for creating a new merchandise item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMerchandiseRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

/// Request body for updating an existing merchandise item (full record, last write wins).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMerchandiseRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default = "default_true")]
    pub is_available: bool,
}
