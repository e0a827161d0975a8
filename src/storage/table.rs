//! Table identities, file names and natural key rules.

use crate::model::{InventorySnapshot, Product, PurchaseOrder, SalesRecord, Store, Supplier};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The six persisted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Stores,
    Products,
    Suppliers,
    Inventory,
    Sales,
    PurchaseOrders,
}

impl Table {
    /// Write order; catalog tables first.
    pub const ALL: [Table; 6] = [
        Table::Stores,
        Table::Products,
        Table::Suppliers,
        Table::Inventory,
        Table::Sales,
        Table::PurchaseOrders,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Table::Stores => "retail_stores.csv",
            Table::Products => "retail_products.csv",
            Table::Suppliers => "retail_suppliers.csv",
            Table::Inventory => "retail_inventory.csv",
            Table::Sales => "retail_sales.csv",
            Table::PurchaseOrders => "retail_purchase_orders.csv",
        }
    }

    /// Header row; matches the record struct's field order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Stores => &[
                "store_id", "store_name", "city", "state", "region", "store_type", "size_sqft",
                "opening_date",
            ],
            Table::Products => &[
                "sku", "department", "category", "product_name", "supplier_id", "cost",
                "retail_price", "reorder_point", "reorder_quantity", "lead_time_days",
                "shelf_life_days", "weight_kg", "is_seasonal",
            ],
            Table::Suppliers => &[
                "supplier_id", "supplier_name", "country", "reliability_score", "avg_lead_time",
                "defect_rate",
            ],
            Table::Inventory => &[
                "date", "store_id", "sku", "quantity_on_hand", "quantity_sold", "status",
                "days_of_supply", "value_on_hand",
            ],
            Table::Sales => &[
                "transaction_id", "basket_id", "date", "store_id", "sku", "quantity",
                "unit_price", "discount", "revenue", "cost", "profit", "profit_margin",
            ],
            Table::PurchaseOrders => &[
                "po_number", "order_date", "expected_delivery", "store_id", "sku",
                "supplier_id", "order_quantity", "unit_cost", "total_cost", "status",
            ],
        }
    }

    /// Catalog tables must be byte-identical for a given seed.
    pub fn is_catalog(self) -> bool {
        matches!(self, Table::Stores | Table::Products | Table::Suppliers)
    }
}

/// Natural keys that join the tables together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Store,
    Sku,
    Supplier,
}

static STORE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ST\d{3}$").unwrap());
static SKU: Lazy<Regex> = Lazy::new(|| Regex::new(r"^SKU\d{5}$").unwrap());
static SUPPLIER_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^SUP\d{3}$").unwrap());

impl KeyKind {
    pub fn column(self) -> &'static str {
        match self {
            KeyKind::Store => "store_id",
            KeyKind::Sku => "sku",
            KeyKind::Supplier => "supplier_id",
        }
    }

    pub fn is_valid(self, value: &str) -> bool {
        match self {
            KeyKind::Store => STORE_ID.is_match(value),
            KeyKind::Sku => SKU.is_match(value),
            KeyKind::Supplier => SUPPLIER_ID.is_match(value),
        }
    }
}

/// A record type stored as one CSV table.
pub trait TableRecord: Serialize + DeserializeOwned {
    const TABLE: Table;

    /// Join keys carried by this row.
    fn natural_keys(&self) -> Vec<(KeyKind, &str)>;
}

impl TableRecord for Store {
    const TABLE: Table = Table::Stores;

    fn natural_keys(&self) -> Vec<(KeyKind, &str)> {
        vec![(KeyKind::Store, self.store_id.as_str())]
    }
}

impl TableRecord for Product {
    const TABLE: Table = Table::Products;

    fn natural_keys(&self) -> Vec<(KeyKind, &str)> {
        vec![(KeyKind::Sku, self.sku.as_str()), (KeyKind::Supplier, self.supplier_id.as_str())]
    }
}

impl TableRecord for Supplier {
    const TABLE: Table = Table::Suppliers;

    fn natural_keys(&self) -> Vec<(KeyKind, &str)> {
        vec![(KeyKind::Supplier, self.supplier_id.as_str())]
    }
}

impl TableRecord for InventorySnapshot {
    const TABLE: Table = Table::Inventory;

    fn natural_keys(&self) -> Vec<(KeyKind, &str)> {
        vec![(KeyKind::Store, self.store_id.as_str()), (KeyKind::Sku, self.sku.as_str())]
    }
}

impl TableRecord for SalesRecord {
    const TABLE: Table = Table::Sales;

    fn natural_keys(&self) -> Vec<(KeyKind, &str)> {
        vec![(KeyKind::Store, self.store_id.as_str()), (KeyKind::Sku, self.sku.as_str())]
    }
}

impl TableRecord for PurchaseOrder {
    const TABLE: Table = Table::PurchaseOrders;

    fn natural_keys(&self) -> Vec<(KeyKind, &str)> {
        vec![
            (KeyKind::Store, self.store_id.as_str()),
            (KeyKind::Sku, self.sku.as_str()),
            (KeyKind::Supplier, self.supplier_id.as_str()),
        ]
    }
}
