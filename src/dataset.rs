//! The six tables of one generated run, held in memory.

use crate::catalog::Catalog;
use crate::model::{InventorySnapshot, Product, PurchaseOrder, SalesRecord, Store, Supplier};
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub stores: Vec<Store>,
    pub products: Vec<Product>,
    pub suppliers: Vec<Supplier>,
    pub inventory: Vec<InventorySnapshot>,
    pub sales: Vec<SalesRecord>,
    pub purchase_orders: Vec<PurchaseOrder>,
}

impl Dataset {
    pub fn from_parts(
        catalog: Catalog,
        inventory: Vec<InventorySnapshot>,
        sales: Vec<SalesRecord>,
        purchase_orders: Vec<PurchaseOrder>,
    ) -> Self {
        Self {
            stores: catalog.stores,
            products: catalog.products,
            suppliers: catalog.suppliers,
            inventory,
            sales,
            purchase_orders,
        }
    }

    pub fn products_by_sku(&self) -> HashMap<&str, &Product> {
        self.products.iter().map(|p| (p.sku.as_str(), p)).collect()
    }

    pub fn stores_by_id(&self) -> HashMap<&str, &Store> {
        self.stores.iter().map(|s| (s.store_id.as_str(), s)).collect()
    }

    pub fn suppliers_by_id(&self) -> HashMap<&str, &Supplier> {
        self.suppliers
            .iter()
            .map(|s| (s.supplier_id.as_str(), s))
            .collect()
    }

    /// Earliest and latest snapshot dates, if any snapshots exist.
    pub fn inventory_date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.inventory.iter().map(|r| r.date).min()?;
        let max = self.inventory.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}
