//! Operational Simulator
//!
//! Produces the three operational tables from a catalog:
//! - daily inventory snapshots with stock status
//! - sales lines grouped into baskets
//! - weekly purchase orders
//!
//! Each table draws from its own seeded stream (see [`crate::seed`]).
//!
//! # Example
//!
//! ```rust
//! use retailsim::config::SimulationConfig;
//! use retailsim::simulation::Simulator;
//! use chrono::NaiveDate;
//!
//! let config = SimulationConfig {
//!     end_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
//!     as_of: NaiveDate::from_ymd_opt(2025, 1, 1),
//!     ..SimulationConfig::default()
//! };
//! let dataset = Simulator::new(&config).unwrap().run();
//! assert_eq!(dataset.stores.len(), 8);
//! ```

pub mod calendar;
pub mod inventory;
pub mod purchase_orders;
pub mod sales;

use crate::catalog::Catalog;
use crate::config::SimulationConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::seed::{stage_rng, Stage};
use crate::storage::RunInfo;
use chrono::NaiveDate;
use std::time::Instant;

pub use calendar::Horizon;
pub use inventory::generate_inventory;
pub use purchase_orders::generate_purchase_orders;
pub use sales::generate_sales;

#[cfg(feature = "metrics")]
use crate::metrics::METRICS;

/// One configured generation run.
#[derive(Debug, Clone)]
pub struct Simulator {
    seed: u64,
    horizon: Horizon,
    as_of: NaiveDate,
}

impl Simulator {
    /// Validate settings and fix the reference date for the run.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            seed: config.seed,
            horizon: Horizon::new(config.start_date, config.end_date),
            as_of: config.reference_date(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Parameters recorded in the storage manifest.
    pub fn run_info(&self) -> RunInfo {
        RunInfo {
            seed: self.seed,
            start_date: self.horizon.start,
            end_date: self.horizon.end,
            as_of: self.as_of,
        }
    }

    /// Build the catalog and all operational tables.
    pub fn run(&self) -> Dataset {
        log::info!(
            "generating dataset: seed={}, {} .. {} ({} days), as_of={}",
            self.seed,
            self.horizon.start,
            self.horizon.end,
            self.horizon.len(),
            self.as_of
        );

        let catalog = timed("catalog", || Catalog::build(self.seed));
        let inventory = timed("inventory", || self.inventory(&catalog));
        let sales = timed("sales", || self.sales(&catalog));
        let purchase_orders = timed("purchase_orders", || self.purchase_orders(&catalog));

        log::info!(
            "generated {} snapshots, {} sales lines, {} purchase orders",
            inventory.len(),
            sales.len(),
            purchase_orders.len()
        );

        Dataset::from_parts(catalog, inventory, sales, purchase_orders)
    }

    pub fn inventory(&self, catalog: &Catalog) -> Vec<crate::model::InventorySnapshot> {
        let mut rng = stage_rng(self.seed, Stage::Inventory);
        generate_inventory(&mut rng, &self.horizon, &catalog.stores, &catalog.products)
    }

    pub fn sales(&self, catalog: &Catalog) -> Vec<crate::model::SalesRecord> {
        let mut rng = stage_rng(self.seed, Stage::Sales);
        generate_sales(&mut rng, &self.horizon, &catalog.stores, &catalog.products)
    }

    pub fn purchase_orders(&self, catalog: &Catalog) -> Vec<crate::model::PurchaseOrder> {
        let mut rng = stage_rng(self.seed, Stage::PurchaseOrders);
        generate_purchase_orders(
            &mut rng,
            &self.horizon,
            &catalog.stores,
            &catalog.products,
            self.as_of,
        )
    }
}

/// Run one stage, logging its duration and recording metrics when enabled.
fn timed<T, F>(stage: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
    T: RowCount,
{
    let start = Instant::now();
    let out = f();
    let elapsed = start.elapsed();
    log::debug!("{} stage: {} rows in {:?}", stage, out.row_count(), elapsed);

    #[cfg(feature = "metrics")]
    METRICS.record_stage(stage, out.row_count() as u64, elapsed);

    out
}

trait RowCount {
    fn row_count(&self) -> usize;
}

impl<T> RowCount for Vec<T> {
    fn row_count(&self) -> usize {
        self.len()
    }
}

impl RowCount for Catalog {
    fn row_count(&self) -> usize {
        self.stores.len() + self.products.len() + self.suppliers.len()
    }
}
