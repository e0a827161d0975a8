//! Product catalog generation.

use super::suppliers::{supplier_id, SUPPLIER_COUNT};
use crate::model::Product;
use crate::money::{money, round_to};
use rand::seq::SliceRandom;
use rand::Rng;

/// Department → categories, in catalog order.
pub const DEPARTMENTS: [(&str, &[&str]); 4] = [
    ("Electronics", &["Computers", "Mobile Devices", "Audio", "Smart Home"]),
    ("Appliances", &["Kitchen", "Laundry", "Climate Control"]),
    ("Home & Living", &["Furniture", "Bedding", "Decor"]),
    ("Outdoor", &["Garden", "Patio", "BBQ & Grills"]),
];

/// First SKU number issued.
pub const FIRST_SKU: u32 = 1000;

const SHELF_LIFE_CHOICES: [Option<u32>; 4] = [None, Some(180), Some(365), Some(730)];
const SEASONAL_PROBABILITY: f64 = 0.3;

pub fn sku(number: u32) -> String {
    format!("SKU{:05}", number)
}

/// Draw 3 to 5 products for every (department, category) pair.
pub fn build_products<R: Rng + ?Sized>(rng: &mut R) -> Vec<Product> {
    let mut products = Vec::new();
    let mut next_sku = FIRST_SKU;

    for (department, categories) in DEPARTMENTS.iter() {
        for category in categories.iter() {
            let count = rng.gen_range(3..6);
            for i in 0..count {
                products.push(draw_product(rng, next_sku, department, category, i + 1));
                next_sku += 1;
            }
        }
    }

    products
}

fn draw_product<R: Rng + ?Sized>(
    rng: &mut R,
    number: u32,
    department: &str,
    category: &str,
    ordinal: u32,
) -> Product {
    let base_cost: f64 = rng.gen_range(20.0..800.0);
    let markup: f64 = rng.gen_range(1.3..2.5);
    let supplier = rng.gen_range(1..=SUPPLIER_COUNT);
    let reorder_point = rng.gen_range(10..50);
    let reorder_quantity = rng.gen_range(20..100);
    let lead_time_days = rng.gen_range(7..45);
    let shelf_life_days = SHELF_LIFE_CHOICES.choose(rng).copied().flatten();
    let weight_kg = round_to(rng.gen_range(0.5..25.0), 2);
    let is_seasonal = rng.gen_bool(SEASONAL_PROBABILITY);

    Product {
        sku: sku(number),
        department: department.to_string(),
        category: category.to_string(),
        product_name: format!("{} Item {}", category, ordinal),
        supplier_id: supplier_id(supplier),
        cost: money(base_cost),
        retail_price: money(base_cost * markup),
        reorder_point,
        reorder_quantity,
        lead_time_days,
        shelf_life_days,
        weight_kg,
        is_seasonal,
    }
}
