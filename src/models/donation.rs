//! Donation model matching the admin DonationsManagement interface.

use serde::{Deserialize, Serialize};

/// Payment lifecycle state of a donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Completed,
    Pending,
    Failed,
    Refunded,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Completed => "completed",
            DonationStatus::Pending => "pending",
            DonationStatus::Failed => "failed",
            DonationStatus::Refunded => "refunded",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(DonationStatus::Completed),
            "pending" => Some(DonationStatus::Pending),
            "failed" => Some(DonationStatus::Failed),
            "refunded" => Some(DonationStatus::Refunded),
            _ => None,
        }
    }
}

impl Default for DonationStatus {
    fn default() -> Self {
        DonationStatus::Pending
    }
}

/// A donation received through the site or recorded manually by an admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub donor_name: String,
    #[serde(default)]
    pub donor_email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub status: DonationStatus,
    /// Informal reference to a donor account; never validated.
    #[serde(default)]
    pub donor_id: i64,
    #[serde(default = "super::now_rfc3339")]
    pub created_at: String,
}

impl Donation {
    /// Amount cell text, e.g. "USD 25.00".
    pub fn amount_display(&self) -> String {
        format!("{} {:.2}", self.currency, self.amount)
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Request body for recording a new donation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDonationRequest {
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub donor_name: String,
    #[serde(default)]
    pub donor_email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub status: DonationStatus,
    #[serde(default)]
    pub donor_id: i64,
}

/// Request body for updating an existing donation (full record, last write wins).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDonationRequest {
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub donor_name: String,
    #[serde(default)]
    pub donor_email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub status: DonationStatus,
    #[serde(default)]
    pub donor_id: i64,
}
