//! Record types for the six generated tables.
//!
//! Field names double as CSV column names, in declaration order.

pub mod inventory;
pub mod product;
pub mod purchase_order;
pub mod sales;
pub mod store;
pub mod supplier;

pub use inventory::{InventorySnapshot, StockStatus};
pub use product::Product;
pub use purchase_order::{PurchaseOrder, PurchaseOrderStatus};
pub use sales::SalesRecord;
pub use store::Store;
pub use supplier::Supplier;
