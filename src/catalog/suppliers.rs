//! Supplier roster generation.

use crate::model::Supplier;
use crate::money::round_to;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

pub const SUPPLIER_COUNT: u32 = 14;

const COUNTRIES: [(&str, u32); 5] = [
    ("USA", 40),
    ("China", 30),
    ("Germany", 10),
    ("Japan", 10),
    ("South Korea", 10),
];

/// Supplier identifier for a 1-based index.
pub fn supplier_id(index: u32) -> String {
    format!("SUP{:03}", index)
}

/// Draw [`SUPPLIER_COUNT`] suppliers.
pub fn build_suppliers<R: Rng + ?Sized>(rng: &mut R) -> Vec<Supplier> {
    // Weights are static and non-zero
    let country_dist = WeightedIndex::new(COUNTRIES.iter().map(|&(_, w)| w))
        .expect("country weights are valid");

    (1..=SUPPLIER_COUNT)
        .map(|i| {
            let country = COUNTRIES[country_dist.sample(rng)].0.to_string();
            let reliability_score = round_to(rng.gen_range(75.0..99.0), 1);
            let avg_lead_time = rng.gen_range(14..60);
            let defect_rate = round_to(rng.gen_range(0.1..5.0), 2);
            Supplier {
                supplier_id: supplier_id(i),
                supplier_name: format!("Supplier {} Inc.", i),
                country,
                reliability_score,
                avg_lead_time,
                defect_rate,
            }
        })
        .collect()
}
