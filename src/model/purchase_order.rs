//! Purchase order entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseOrderStatus {
    Delivered,
    #[serde(rename = "Partially Delivered")]
    PartiallyDelivered,
    #[serde(rename = "In Transit")]
    InTransit,
}

impl fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PurchaseOrderStatus::Delivered => "Delivered",
            PurchaseOrderStatus::PartiallyDelivered => "Partially Delivered",
            PurchaseOrderStatus::InTransit => "In Transit",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub po_number: String,
    pub order_date: NaiveDate,
    pub expected_delivery: NaiveDate,
    pub store_id: String,
    pub sku: String,
    pub supplier_id: String,
    pub order_quantity: u32,
    pub unit_cost: Decimal,
    pub total_cost: Decimal,
    pub status: PurchaseOrderStatus,
}
