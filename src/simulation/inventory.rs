//! Daily inventory snapshot generation.
//!
//! Each (day, store, product) is independently stocked or skipped; stocked
//! combinations get a fresh base stock, a Poisson sales draw and a status.
//! Stock is not carried from one day to the next.

use super::calendar::{seasonal_factor, Horizon};
use crate::model::inventory::{days_of_supply, value_on_hand};
use crate::model::{InventorySnapshot, Product, StockStatus, Store};
use chrono::NaiveDate;
use rand::Rng;
use rand_distr::{Distribution, Poisson};

pub const STOCKED_PROBABILITY: f64 = 0.85;

/// Draw one snapshot row, or `None` when the product is not stocked today.
pub fn draw_snapshot<R: Rng + ?Sized>(
    rng: &mut R,
    date: NaiveDate,
    store: &Store,
    product: &Product,
) -> Option<InventorySnapshot> {
    if !rng.gen_bool(STOCKED_PROBABILITY) {
        return None;
    }

    let base_stock: u32 = rng.gen_range(5..150);
    let daily_rate = rng.gen_range(2.0..15.0) * seasonal_factor(date, product.is_seasonal);
    let quantity_sold = draw_daily_sales(rng, daily_rate);
    let quantity_on_hand = base_stock.saturating_sub(quantity_sold);

    Some(InventorySnapshot {
        date,
        store_id: store.store_id.clone(),
        sku: product.sku.clone(),
        quantity_on_hand,
        quantity_sold,
        status: StockStatus::classify(
            quantity_on_hand,
            product.reorder_point,
            product.reorder_quantity,
        ),
        days_of_supply: days_of_supply(quantity_on_hand, daily_rate),
        value_on_hand: value_on_hand(quantity_on_hand, product.cost),
    })
}

/// Poisson count with mean `rate`; zero for a non-positive rate.
pub fn draw_daily_sales<R: Rng + ?Sized>(rng: &mut R, rate: f64) -> u32 {
    match Poisson::new(rate) {
        Ok(dist) => {
            let draw: f64 = dist.sample(rng);
            draw.max(0.0) as u32
        }
        Err(_) => 0,
    }
}

/// Snapshots for every day × store × product, in that iteration order.
pub fn generate_inventory<R: Rng + ?Sized>(
    rng: &mut R,
    horizon: &Horizon,
    stores: &[Store],
    products: &[Product],
) -> Vec<InventorySnapshot> {
    let mut records = Vec::with_capacity(horizon.len() * stores.len() * products.len());
    for date in horizon.days() {
        for store in stores {
            for product in products {
                if let Some(row) = draw_snapshot(rng, date, store, product) {
                    records.push(row);
                }
            }
        }
    }
    records
}
