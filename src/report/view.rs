//! Filtered, joined view of a dataset that every report section reads.

use crate::dataset::Dataset;
use crate::error::{Result, RetailError};
use crate::model::{InventorySnapshot, Product, SalesRecord, Store, Supplier};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Which slice of the data a report covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportFilter {
    /// Inclusive; applied to inventory and sales, not purchase orders.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub store_name: Option<String>,
    pub department: Option<String>,
}

impl ReportFilter {
    /// The `days` days ending at the latest snapshot date.
    pub fn last_days(dataset: &Dataset, days: u64) -> Self {
        let date_range = dataset.inventory_date_span().map(|(_, max)| {
            let from = max.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
            (from, max)
        });
        Self {
            date_range,
            ..Self::default()
        }
    }

    pub fn with_store(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = Some(store_name.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    fn contains(&self, date: NaiveDate) -> bool {
        match self.date_range {
            Some((from, to)) => from <= date && date <= to,
            None => true,
        }
    }
}

pub struct ReportView<'a> {
    pub dataset: &'a Dataset,
    pub products: HashMap<&'a str, &'a Product>,
    pub stores: HashMap<&'a str, &'a Store>,
    pub suppliers: HashMap<&'a str, &'a Supplier>,
    pub inventory: Vec<&'a InventorySnapshot>,
    pub sales: Vec<&'a SalesRecord>,
    /// Latest date among the filtered snapshots.
    pub latest_date: Option<NaiveDate>,
    /// Filtered snapshots on `latest_date`.
    pub current: Vec<&'a InventorySnapshot>,
}

impl<'a> ReportView<'a> {
    pub fn new(dataset: &'a Dataset, filter: &ReportFilter) -> Result<Self> {
        let products = dataset.products_by_sku();
        let stores = dataset.stores_by_id();
        let suppliers = dataset.suppliers_by_id();

        let store_id = match &filter.store_name {
            Some(name) => Some(
                dataset
                    .stores
                    .iter()
                    .find(|s| &s.store_name == name)
                    .map(|s| s.store_id.as_str())
                    .ok_or_else(|| RetailError::UnknownFilter {
                        kind: "store",
                        value: name.clone(),
                    })?,
            ),
            None => None,
        };

        let department_skus: Option<HashSet<&str>> = match &filter.department {
            Some(dept) => {
                let skus: HashSet<&str> = dataset
                    .products
                    .iter()
                    .filter(|p| &p.department == dept)
                    .map(|p| p.sku.as_str())
                    .collect();
                if skus.is_empty() {
                    return Err(RetailError::UnknownFilter {
                        kind: "department",
                        value: dept.clone(),
                    });
                }
                Some(skus)
            }
            None => None,
        };

        let keep = |date: NaiveDate, store: &str, sku: &str| {
            filter.contains(date)
                && store_id.map_or(true, |id| id == store)
                && department_skus.as_ref().map_or(true, |skus| skus.contains(sku))
        };

        let inventory: Vec<_> = dataset
            .inventory
            .iter()
            .filter(|r| keep(r.date, &r.store_id, &r.sku))
            .collect();
        let sales: Vec<_> = dataset
            .sales
            .iter()
            .filter(|r| keep(r.date, &r.store_id, &r.sku))
            .collect();

        let latest_date = inventory.iter().map(|r| r.date).max();
        let current = inventory
            .iter()
            .copied()
            .filter(|r| Some(r.date) == latest_date)
            .collect();

        Ok(Self {
            dataset,
            products,
            stores,
            suppliers,
            inventory,
            sales,
            latest_date,
            current,
        })
    }

    pub fn department_of(&self, sku: &str) -> Option<&'a str> {
        self.products.get(sku).copied().map(|p| p.department.as_str())
    }

    pub fn store_name_of(&self, store_id: &str) -> Option<&'a str> {
        self.stores.get(store_id).copied().map(|s| s.store_name.as_str())
    }
}
