//! Receipt and item types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Textual format for purchase dates (`2022-01-01`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Textual format for purchase times (`13:01`, 24-hour).
pub const TIME_FORMAT: &str = "%H:%M";

/// A submitted purchase receipt.
///
/// Immutable once constructed; scoring is a pure function of these fields.
/// Monetary amounts stay as the submitted text so the content digest covers
/// exactly what the caller sent; the scoring engine parses them on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Merchant name, free text.
    pub retailer: String,
    /// Calendar date of purchase (no time-of-day).
    pub purchase_date: NaiveDate,
    /// Time of day of purchase (no date).
    pub purchase_time: NaiveTime,
    /// Purchased lines, order preserved.
    pub items: Vec<Item>,
    /// Total amount as decimal text.
    pub total: String,
}

/// One purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub short_description: String,
    /// Line price as decimal text.
    pub price: String,
}
