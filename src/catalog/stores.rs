//! The fixed store network.

use crate::model::Store;
use chrono::NaiveDate;

// (id, name, city, state, region, type, sqft, opened y/m/d)
const STORES: [(&str, &str, &str, &str, &str, &str, u32, (i32, u32, u32)); 8] = [
    ("ST001", "Downtown Flagship", "Seattle", "WA", "Northwest", "Flagship", 15000, (2018, 3, 15)),
    ("ST002", "West Side Mall", "Portland", "OR", "Northwest", "Standard", 8000, (2019, 6, 1)),
    ("ST003", "Airport Plaza", "San Francisco", "CA", "West", "Airport", 5000, (2020, 1, 10)),
    ("ST004", "Suburban Center", "Los Angeles", "CA", "West", "Standard", 10000, (2017, 9, 20)),
    ("ST005", "Harbor View", "San Diego", "CA", "West", "Standard", 9000, (2019, 11, 15)),
    ("ST006", "Tech District", "Austin", "TX", "South", "Standard", 8500, (2020, 5, 1)),
    ("ST007", "University Square", "Denver", "CO", "Mountain", "Standard", 7000, (2018, 8, 10)),
    ("ST008", "Riverside Outlet", "Phoenix", "AZ", "Southwest", "Outlet", 12000, (2021, 2, 1)),
];

/// Build the store table. Stores involve no random draws.
pub fn build_stores() -> Vec<Store> {
    STORES
        .iter()
        .map(|&(id, name, city, state, region, store_type, size_sqft, (y, m, d))| Store {
            store_id: id.to_string(),
            store_name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            region: region.to_string(),
            store_type: store_type.to_string(),
            size_sqft,
            opening_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        })
        .collect()
}
