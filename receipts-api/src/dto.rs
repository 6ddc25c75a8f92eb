//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

/// Receipt submission body.
///
/// Every field is optional at the wire so that field presence is checked by
/// the explicit validation pass and reported as structured violations, not
/// as an opaque decode failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    /// Merchant name.
    pub retailer: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub purchase_date: Option<String>,
    /// 24-hour time of day, `HH:MM`.
    pub purchase_time: Option<String>,
    /// Purchased lines; at least one required.
    pub items: Option<Vec<ItemDto>>,
    /// Total amount as decimal text.
    pub total: Option<String>,
}

/// One purchased line in a submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub short_description: Option<String>,
    pub price: Option<String>,
}

/// Response to a processed receipt.
#[derive(Debug, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Points lookup response.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
