//! Weekly purchase order generation.

use super::calendar::{add_days, Horizon};
use crate::model::{Product, PurchaseOrder, PurchaseOrderStatus, Store};
use chrono::NaiveDate;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

pub const FIRST_PO_NUMBER: u64 = 5_000;

// Three delivered buckets plus partial; net 98% delivered.
const ARRIVED_STATUSES: [(PurchaseOrderStatus, u32); 4] = [
    (PurchaseOrderStatus::Delivered, 85),
    (PurchaseOrderStatus::Delivered, 10),
    (PurchaseOrderStatus::Delivered, 3),
    (PurchaseOrderStatus::PartiallyDelivered, 2),
];

/// Purchase orders placed on every 7th day of the horizon.
///
/// Orders whose expected delivery falls on or before `as_of` are settled
/// as delivered or partially delivered; the rest are in transit.
pub fn generate_purchase_orders<R: Rng + ?Sized>(
    rng: &mut R,
    horizon: &Horizon,
    stores: &[Store],
    products: &[Product],
    as_of: NaiveDate,
) -> Vec<PurchaseOrder> {
    if stores.is_empty() || products.is_empty() {
        return Vec::new();
    }

    // Static weights, all positive
    let status_dist = WeightedIndex::new(ARRIVED_STATUSES.iter().map(|&(_, w)| w))
        .expect("status weights are valid");

    let mut next_po = FIRST_PO_NUMBER;
    let mut orders = Vec::new();

    for order_date in horizon.weeks() {
        let count: u32 = rng.gen_range(5..15);
        for _ in 0..count {
            let (Some(product), Some(store)) = (products.choose(rng), stores.choose(rng)) else {
                continue;
            };

            let expected_delivery = add_days(order_date, product.lead_time_days);
            let status = if expected_delivery <= as_of {
                ARRIVED_STATUSES[status_dist.sample(rng)].0
            } else {
                PurchaseOrderStatus::InTransit
            };

            orders.push(PurchaseOrder {
                po_number: format!("PO{:06}", next_po),
                order_date,
                expected_delivery,
                store_id: store.store_id.clone(),
                sku: product.sku.clone(),
                supplier_id: product.supplier_id.clone(),
                order_quantity: product.reorder_quantity,
                unit_cost: product.cost,
                total_cost: (Decimal::from(product.reorder_quantity) * product.cost).round_dp(2),
                status,
            });
            next_po += 1;
        }
    }

    orders
}
