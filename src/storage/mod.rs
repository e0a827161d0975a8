//! Flat-file persistence
//!
//! Each table is one comma-delimited file with a header row. A
//! `manifest.json` records the run parameters, row counts and a SHA-256
//! checksum per file so a data directory can be verified later.

pub mod checksum;
pub mod csv_io;
pub mod manifest;
pub mod table;

use crate::dataset::Dataset;
use crate::error::{Result, RetailError};
use std::path::Path;

pub use checksum::{calculate_checksum, validate_checksum};
pub use csv_io::{read_table, write_table};
pub use manifest::{Manifest, RunInfo, TableEntry, MANIFEST_FILE};
pub use table::{KeyKind, Table, TableRecord};

#[cfg(feature = "metrics")]
use crate::metrics::METRICS;

/// Write all six tables and the manifest into `dir`.
pub fn write_dataset(dir: &Path, dataset: &Dataset, run: RunInfo) -> Result<Manifest> {
    std::fs::create_dir_all(dir).map_err(|e| RetailError::io(dir, e))?;

    let mut tables = Vec::with_capacity(Table::ALL.len());
    tables.push(write_one(dir, &dataset.stores)?);
    tables.push(write_one(dir, &dataset.products)?);
    tables.push(write_one(dir, &dataset.suppliers)?);
    tables.push(write_one(dir, &dataset.inventory)?);
    tables.push(write_one(dir, &dataset.sales)?);
    tables.push(write_one(dir, &dataset.purchase_orders)?);

    let manifest = Manifest { run, tables };
    manifest.write(dir)?;
    log::info!("wrote {} tables to {}", manifest.tables.len(), dir.display());
    Ok(manifest)
}

fn write_one<T: TableRecord>(dir: &Path, rows: &[T]) -> Result<TableEntry> {
    let file = T::TABLE.file_name();
    let path = dir.join(file);
    write_table(&path, rows)?;

    #[cfg(feature = "metrics")]
    METRICS.record_file(file);

    let entry = TableEntry {
        file: file.to_string(),
        rows: rows.len(),
        sha256: calculate_checksum(&path)?,
    };
    log::debug!("{}: {} rows, sha256 {}", entry.file, entry.rows, entry.sha256);
    Ok(entry)
}

/// Load all six tables from `dir`.
///
/// Fails as a whole if any table is missing or malformed; no partial
/// dataset is returned.
pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    let dataset = Dataset {
        stores: read_table(&dir.join(Table::Stores.file_name()))?,
        products: read_table(&dir.join(Table::Products.file_name()))?,
        suppliers: read_table(&dir.join(Table::Suppliers.file_name()))?,
        inventory: read_table(&dir.join(Table::Inventory.file_name()))?,
        sales: read_table(&dir.join(Table::Sales.file_name()))?,
        purchase_orders: read_table(&dir.join(Table::PurchaseOrders.file_name()))?,
    };
    log::info!(
        "loaded {} snapshots, {} sales lines, {} purchase orders from {}",
        dataset.inventory.len(),
        dataset.sales.len(),
        dataset.purchase_orders.len(),
        dir.display()
    );
    Ok(dataset)
}

/// Check every table in `dir` against its manifest checksum.
pub fn verify_dataset(dir: &Path) -> Result<Manifest> {
    let manifest = Manifest::read(dir)?;
    manifest.verify(dir)?;
    Ok(manifest)
}
