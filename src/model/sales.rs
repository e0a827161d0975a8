//! Sales line item entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a checkout basket.
///
/// `transaction_id` is unique per line; `basket_id` groups the lines rung up
/// together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub transaction_id: String,
    pub basket_id: String,
    pub date: NaiveDate,
    pub store_id: String,
    pub sku: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// Per-unit discount off `unit_price`.
    pub discount: Decimal,
    pub revenue: Decimal,
    /// Cost of goods for the line.
    pub cost: Decimal,
    pub profit: Decimal,
    pub profit_margin: Decimal,
}
