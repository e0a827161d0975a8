//! # retailsim
//!
//! Seeded generator for a synthetic multi-store retail dataset: stores,
//! products, suppliers, daily inventory snapshots, sales lines and weekly
//! purchase orders, plus the aggregates a stock-control dashboard reads.
//!
//! Same seed and settings give the same tables. The pipeline is:
//!
//! 1. [`catalog::Catalog::build`] creates the reference tables.
//! 2. [`simulation::Simulator`] derives the operational tables from them.
//! 3. [`storage::write_dataset`] writes six CSV files and a checksum manifest.
//! 4. [`report::build_report`] aggregates a loaded [`Dataset`].

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod model;
pub mod money;
pub mod report;
pub mod seed;
pub mod simulation;
pub mod storage;

pub use config::SimulationConfig;
pub use dataset::Dataset;
pub use error::{Result, RetailError};
pub use simulation::Simulator;
