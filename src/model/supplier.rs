//! Supplier entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: String,
    pub supplier_name: String,
    pub country: String,
    /// Percentage, one decimal place.
    pub reliability_score: f64,
    /// Days.
    pub avg_lead_time: u32,
    /// Percentage, two decimal places.
    pub defect_rate: f64,
}
