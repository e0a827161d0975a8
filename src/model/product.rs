//! Product entity
//!
//! One SKU in the department → category → SKU hierarchy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub department: String,
    pub category: String,
    pub product_name: String,

    // Foreign key to suppliers
    pub supplier_id: String,

    pub cost: Decimal,
    /// `cost × markup`, markup fixed per product.
    pub retail_price: Decimal,

    pub reorder_point: u32,
    pub reorder_quantity: u32,
    pub lead_time_days: u32,
    pub shelf_life_days: Option<u32>,
    pub weight_kg: f64,
    pub is_seasonal: bool,
}
