//! Sales transaction generation.
//!
//! Baskets are drawn per day without looking at inventory snapshots; a sale
//! may be recorded against a SKU that shows Out of Stock the same day.

use super::calendar::Horizon;
use crate::model::{Product, SalesRecord, Store};
use crate::money::margin_pct;
use chrono::NaiveDate;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

pub const FIRST_TRANSACTION_ID: u64 = 10_000;
pub const FIRST_BASKET_ID: u64 = 1;
pub const DISCOUNT_PROBABILITY: f64 = 0.15;

const LINES_PER_BASKET: [(u32, u32); 3] = [(1, 60), (2, 30), (3, 10)];
const LINE_QUANTITIES: [(u32, u32); 6] = [(1, 50), (1, 20), (1, 15), (2, 8), (2, 5), (3, 2)];

/// Price and margin figures for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAmounts {
    pub discount: Decimal,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
    pub profit_margin: Decimal,
}

impl LineAmounts {
    /// Amounts for `quantity` units sold at `unit_price - discount`.
    pub fn compute(quantity: u32, unit_price: Decimal, unit_cost: Decimal, discount: Decimal) -> Self {
        let qty = Decimal::from(quantity);
        let revenue = (qty * (unit_price - discount)).round_dp(2);
        let cost = (qty * unit_cost).round_dp(2);
        let profit = (revenue - cost).round_dp(2);
        Self {
            discount,
            revenue,
            cost,
            profit,
            profit_margin: margin_pct(profit, revenue),
        }
    }
}

/// Issues sequential identifiers across the whole horizon.
struct IdSequence {
    next_transaction: u64,
    next_basket: u64,
}

impl IdSequence {
    fn transaction(&mut self) -> String {
        let id = format!("TXN{:08}", self.next_transaction);
        self.next_transaction += 1;
        id
    }

    fn basket(&mut self) -> String {
        let id = format!("BSK{:08}", self.next_basket);
        self.next_basket += 1;
        id
    }
}

/// Sales lines for every day of the horizon.
pub fn generate_sales<R: Rng + ?Sized>(
    rng: &mut R,
    horizon: &Horizon,
    stores: &[Store],
    products: &[Product],
) -> Vec<SalesRecord> {
    if stores.is_empty() || products.is_empty() {
        return Vec::new();
    }

    // Static weights, all positive
    let lines_dist = WeightedIndex::new(LINES_PER_BASKET.iter().map(|&(_, w)| w))
        .expect("line count weights are valid");
    let qty_dist = WeightedIndex::new(LINE_QUANTITIES.iter().map(|&(_, w)| w))
        .expect("quantity weights are valid");

    let mut ids = IdSequence {
        next_transaction: FIRST_TRANSACTION_ID,
        next_basket: FIRST_BASKET_ID,
    };
    let mut records = Vec::new();

    for date in horizon.days() {
        let baskets: u32 = rng.gen_range(50..200);
        for _ in 0..baskets {
            let Some(store) = stores.choose(rng) else { continue };
            let basket_id = ids.basket();
            let lines = LINES_PER_BASKET[lines_dist.sample(rng)].0;

            for _ in 0..lines {
                let Some(product) = products.choose(rng) else { continue };
                let quantity = LINE_QUANTITIES[qty_dist.sample(rng)].0;
                let discount = draw_discount(rng, product.retail_price);
                records.push(build_line(
                    ids.transaction(),
                    basket_id.clone(),
                    date,
                    store,
                    product,
                    quantity,
                    discount,
                ));
            }
        }
    }

    records
}

/// Per-unit discount: 15% of lines get 10–30% off.
fn draw_discount<R: Rng + ?Sized>(rng: &mut R, retail_price: Decimal) -> Decimal {
    if !rng.gen_bool(DISCOUNT_PROBABILITY) {
        return Decimal::ZERO;
    }
    let fraction = Decimal::from_f64_retain(rng.gen_range(0.1..0.3)).unwrap_or_default();
    (retail_price * fraction).round_dp(2)
}

fn build_line(
    transaction_id: String,
    basket_id: String,
    date: NaiveDate,
    store: &Store,
    product: &Product,
    quantity: u32,
    discount: Decimal,
) -> SalesRecord {
    let amounts = LineAmounts::compute(quantity, product.retail_price, product.cost, discount);
    SalesRecord {
        transaction_id,
        basket_id,
        date,
        store_id: store.store_id.clone(),
        sku: product.sku.clone(),
        quantity,
        unit_price: product.retail_price,
        discount: amounts.discount,
        revenue: amounts.revenue,
        cost: amounts.cost,
        profit: amounts.profit,
        profit_margin: amounts.profit_margin,
    }
}
