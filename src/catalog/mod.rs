//! Catalog Builder
//!
//! Reference entities every other table points at: the store network, the
//! product hierarchy and the supplier roster. All draws come from the
//! catalog stream, so a given seed always produces the same catalog.

pub mod products;
pub mod stores;
pub mod suppliers;

use crate::model::{Product, Store, Supplier};
use crate::seed::{stage_rng, Stage};
use std::collections::HashMap;

pub use products::{build_products, DEPARTMENTS};
pub use stores::build_stores;
pub use suppliers::build_suppliers;

/// Stores, products and suppliers for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub stores: Vec<Store>,
    pub products: Vec<Product>,
    pub suppliers: Vec<Supplier>,
}

impl Catalog {
    /// Build the catalog for `seed`.
    pub fn build(seed: u64) -> Self {
        let mut rng = stage_rng(seed, Stage::Catalog);
        let stores = build_stores();
        let products = build_products(&mut rng);
        let suppliers = build_suppliers(&mut rng);

        log::debug!(
            "catalog built: {} stores, {} products, {} suppliers",
            stores.len(),
            products.len(),
            suppliers.len()
        );

        Self {
            stores,
            products,
            suppliers,
        }
    }

    pub fn product_index(&self) -> HashMap<&str, &Product> {
        self.products.iter().map(|p| (p.sku.as_str(), p)).collect()
    }
}
