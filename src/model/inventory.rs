//! Daily inventory snapshot entity and stock status classification

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days-of-supply value used when there is no sales rate, and the upper cap.
pub const DAYS_OF_SUPPLY_CAP: u32 = 999;

/// Stock above `reorder_quantity × OVERSTOCK_FACTOR` counts as overstock.
pub const OVERSTOCK_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Overstock")]
    Overstock,
}

impl StockStatus {
    /// Classify a stock level against a product's reorder parameters.
    ///
    /// Rules are evaluated in order: empty, at or below the reorder point,
    /// above 1.5× the reorder quantity, otherwise in stock.
    pub fn classify(quantity_on_hand: u32, reorder_point: u32, reorder_quantity: u32) -> Self {
        if quantity_on_hand == 0 {
            StockStatus::OutOfStock
        } else if quantity_on_hand <= reorder_point {
            StockStatus::LowStock
        } else if f64::from(quantity_on_hand) > f64::from(reorder_quantity) * OVERSTOCK_FACTOR {
            StockStatus::Overstock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
            StockStatus::Overstock => "Overstock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole days until stockout at `daily_rate`, capped at [`DAYS_OF_SUPPLY_CAP`].
pub fn days_of_supply(quantity_on_hand: u32, daily_rate: f64) -> u32 {
    if daily_rate > 0.0 {
        let days = (f64::from(quantity_on_hand) / daily_rate).floor();
        if days >= f64::from(DAYS_OF_SUPPLY_CAP) {
            DAYS_OF_SUPPLY_CAP
        } else {
            days as u32
        }
    } else {
        DAYS_OF_SUPPLY_CAP
    }
}

/// Stock valued at unit cost, rounded to cents.
pub fn value_on_hand(quantity_on_hand: u32, unit_cost: Decimal) -> Decimal {
    (Decimal::from(quantity_on_hand) * unit_cost).round_dp(2)
}

/// One row per (date, store, SKU) stocked that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub date: NaiveDate,
    pub store_id: String,
    pub sku: String,
    pub quantity_on_hand: u32,
    pub quantity_sold: u32,
    pub status: StockStatus,
    pub days_of_supply: u32,
    pub value_on_hand: Decimal,
}
