//! Store entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A physical store location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: String,
    pub store_name: String,
    pub city: String,
    pub state: String,
    pub region: String,
    pub store_type: String, // Flagship, Standard, Airport, Outlet
    pub size_sqft: u32,
    pub opening_date: NaiveDate,
}
