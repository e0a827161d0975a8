//! Run manifest written beside the tables.

use super::checksum::{calculate_checksum, validate_checksum};
use super::table::Table;
use crate::error::{Result, RetailError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Parameters that produced a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInfo {
    pub seed: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub as_of: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub file: String,
    pub rows: usize,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub run: RunInfo,
    pub tables: Vec<TableEntry>,
}

impl Manifest {
    pub fn entry(&self, table: Table) -> Option<&TableEntry> {
        self.tables.iter().find(|t| t.file == table.file_name())
    }

    pub fn write(&self, dir: &Path) -> Result<()> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|e| RetailError::io(path, e))
    }

    pub fn read(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(RetailError::MissingTable(path));
        }
        let json = std::fs::read_to_string(&path).map_err(|e| RetailError::io(&path, e))?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Recompute every table checksum and compare with the recorded one.
    ///
    /// All six tables must be listed; a manifest missing an entry fails
    /// even if the remaining files match.
    pub fn verify(&self, dir: &Path) -> Result<()> {
        for table in Table::ALL {
            let entry = self
                .entry(table)
                .ok_or_else(|| RetailError::MissingManifestEntry(table.file_name().to_string()))?;
            let current = calculate_checksum(&dir.join(&entry.file))?;
            validate_checksum(&entry.file, &entry.sha256, &current)?;
            log::debug!("{} checksum ok", entry.file);
        }
        Ok(())
    }
}
