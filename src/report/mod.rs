//! Reporting layer
//!
//! Aggregates behind each dashboard panel, computed from a loaded
//! [`Dataset`] and a [`ReportFilter`]. Missing snapshot rows are treated as
//! "not tracked", never as zero stock.
//!
//! ```rust,no_run
//! use retailsim::report::{build_report, ReportFilter};
//! use retailsim::storage::load_dataset;
//! use std::path::Path;
//!
//! # fn main() -> retailsim::Result<()> {
//! let dataset = load_dataset(Path::new("data"))?;
//! let filter = ReportFilter::last_days(&dataset, 30).with_department("Outdoor");
//! let report = build_report(&dataset, &filter)?;
//! println!("revenue: {}", report.kpis.total_revenue);
//! # Ok(())
//! # }
//! ```

pub mod abc;
pub mod heatmap;
pub mod kpi;
pub mod reorder;
pub mod stockout;
pub mod supplier;
pub mod trends;
pub mod turnover;
pub mod view;

use crate::dataset::Dataset;
use crate::error::Result;
use serde::Serialize;

pub use abc::{AbcAnalysis, AbcClass};
pub use heatmap::HeatmapCell;
pub use kpi::Kpis;
pub use reorder::{Priority, ReorderPriorities};
pub use stockout::StockoutImpact;
pub use supplier::SupplierScore;
pub use trends::DailySales;
pub use turnover::DepartmentTurnover;
pub use view::{ReportFilter, ReportView};

/// Every dashboard section for one filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub filter: ReportFilter,
    pub kpis: Kpis,
    pub heatmap: Vec<HeatmapCell>,
    pub abc: AbcAnalysis,
    pub turnover: Vec<DepartmentTurnover>,
    pub stockouts: StockoutImpact,
    pub suppliers: Vec<SupplierScore>,
    pub reorder: ReorderPriorities,
    pub trends: Vec<DailySales>,
}

/// Compute all sections.
///
/// # Errors
///
/// Returns `RetailError::UnknownFilter` when the filter names a store or
/// department that is not in the dataset.
pub fn build_report(dataset: &Dataset, filter: &ReportFilter) -> Result<DashboardReport> {
    let view = ReportView::new(dataset, filter)?;
    log::debug!(
        "report view: {} snapshots, {} sales lines, latest date {:?}",
        view.inventory.len(),
        view.sales.len(),
        view.latest_date
    );

    Ok(DashboardReport {
        filter: filter.clone(),
        kpis: kpi::compute(&view),
        heatmap: heatmap::compute(&view),
        abc: abc::compute(&view),
        turnover: turnover::compute(&view),
        stockouts: stockout::compute(&view),
        suppliers: supplier::compute(&view),
        reorder: reorder::compute(&view),
        trends: trends::compute(&view),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InventorySnapshot, Product, SalesRecord, StockStatus, Store};
    use crate::model::inventory::value_on_hand;
    use crate::simulation::sales::LineAmounts;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn store(id: &str, name: &str) -> Store {
        Store {
            store_id: id.into(),
            store_name: name.into(),
            city: "Seattle".into(),
            state: "WA".into(),
            region: "Northwest".into(),
            store_type: "Standard".into(),
            size_sqft: 8000,
            opening_date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        }
    }

    fn product(sku: &str, department: &str) -> Product {
        Product {
            sku: sku.into(),
            department: department.into(),
            category: "Misc".into(),
            product_name: format!("{} item", sku),
            supplier_id: "SUP001".into(),
            cost: Decimal::from(100),
            retail_price: Decimal::from(150),
            reorder_point: 20,
            reorder_quantity: 50,
            lead_time_days: 10,
            shelf_life_days: None,
            weight_kg: 1.0,
            is_seasonal: false,
        }
    }

    fn snapshot(day: u32, store_id: &str, p: &Product, qty: u32) -> InventorySnapshot {
        InventorySnapshot {
            date: d(day),
            store_id: store_id.into(),
            sku: p.sku.clone(),
            quantity_on_hand: qty,
            quantity_sold: 3,
            status: StockStatus::classify(qty, p.reorder_point, p.reorder_quantity),
            days_of_supply: 1,
            value_on_hand: value_on_hand(qty, p.cost),
        }
    }

    fn sale(n: u32, day: u32, store_id: &str, p: &Product, qty: u32) -> SalesRecord {
        let a = LineAmounts::compute(qty, p.retail_price, p.cost, Decimal::ZERO);
        SalesRecord {
            transaction_id: format!("TXN{:08}", n),
            basket_id: format!("BSK{:08}", n),
            date: d(day),
            store_id: store_id.into(),
            sku: p.sku.clone(),
            quantity: qty,
            unit_price: p.retail_price,
            discount: a.discount,
            revenue: a.revenue,
            cost: a.cost,
            profit: a.profit,
            profit_margin: a.profit_margin,
        }
    }

    fn fixture() -> Dataset {
        let tv = product("SKU01000", "Electronics");
        let grill = product("SKU01001", "Outdoor");
        Dataset {
            stores: vec![store("ST001", "Downtown Flagship"), store("ST002", "West Side Mall")],
            inventory: vec![
                snapshot(1, "ST001", &tv, 0),
                snapshot(2, "ST001", &tv, 0),
                snapshot(2, "ST002", &tv, 80),
                snapshot(2, "ST001", &grill, 10),
                snapshot(2, "ST002", &grill, 65),
            ],
            sales: vec![
                sale(1, 1, "ST001", &tv, 2),
                sale(2, 2, "ST002", &tv, 1),
                sale(3, 2, "ST001", &grill, 1),
            ],
            products: vec![tv, grill],
            suppliers: Vec::new(),
            purchase_orders: Vec::new(),
        }
    }

    #[test]
    fn kpis_use_latest_day_for_stock_and_all_days_for_sales() {
        let data = fixture();
        let report = build_report(&data, &ReportFilter::default()).unwrap();
        let k = &report.kpis;
        assert_eq!(k.latest_date, Some(d(2)));
        assert_eq!(k.items_tracked, 4);
        // (0 + 80 + 10 + 65) × 100
        assert_eq!(k.inventory_value, Decimal::from(15_500));
        assert_eq!(k.total_revenue, Decimal::from(600));
        assert_eq!(k.total_profit, Decimal::from(200));
        assert_eq!(k.stockouts, 1);
        assert_eq!(k.low_stock, 1);
        assert!(!k.stockouts_critical);
    }

    #[test]
    fn store_and_department_filters_narrow_every_section() {
        let data = fixture();
        let filter = ReportFilter::default()
            .with_store("Downtown Flagship")
            .with_department("Electronics");
        let report = build_report(&data, &filter).unwrap();
        assert_eq!(report.kpis.sales_lines, 1);
        assert_eq!(report.kpis.items_tracked, 1);
        assert_eq!(report.stockouts.by_store, vec![("Downtown Flagship".to_string(), 2)]);
        assert_eq!(report.heatmap.len(), 1);
        assert_eq!(report.heatmap[0].out_of_stock, 1);
    }

    #[test]
    fn date_range_is_inclusive() {
        let data = fixture();
        let filter = ReportFilter {
            date_range: Some((d(1), d(1))),
            ..ReportFilter::default()
        };
        let report = build_report(&data, &filter).unwrap();
        assert_eq!(report.kpis.latest_date, Some(d(1)));
        assert_eq!(report.trends.len(), 1);
        assert_eq!(report.trends[0].transactions, 1);
    }

    #[test]
    fn unknown_filters_are_errors() {
        let data = fixture();
        let err = build_report(&data, &ReportFilter::default().with_store("Nowhere")).unwrap_err();
        assert!(err.to_string().contains("Nowhere"));
        assert!(build_report(&data, &ReportFilter::default().with_department("Toys")).is_err());
    }

    #[test]
    fn reorder_list_covers_items_at_or_below_reorder_point() {
        let data = fixture();
        let report = build_report(&data, &ReportFilter::default()).unwrap();
        let r = &report.reorder;
        // qty 0 → 100% critical, qty 10 → 50% medium
        assert_eq!((r.critical, r.high, r.medium), (1, 0, 1));
        assert_eq!(r.top[0].quantity_on_hand, 0);
        assert_eq!(r.top[0].store_name, "Downtown Flagship");
    }

    #[test]
    fn turnover_joins_sales_with_latest_stock() {
        let data = fixture();
        let report = build_report(&data, &ReportFilter::default()).unwrap();
        let electronics = report
            .turnover
            .iter()
            .find(|t| t.department == "Electronics")
            .unwrap();
        // COGS 300 over 8000 on hand
        assert_eq!(electronics.cogs, Decimal::from(300));
        assert_eq!(electronics.turnover_ratio, Decimal::new(375, 4));
    }

    #[test]
    fn stockout_loss_uses_mean_line_revenue_per_sku() {
        let data = fixture();
        let report = build_report(&data, &ReportFilter::default()).unwrap();
        // tv lines: 300, 150 → 225; grill: 150 → mean 187.5
        assert_eq!(report.stockouts.estimated_daily_loss, Decimal::new(18750, 2));
        assert_eq!(report.stockouts.total_lost_revenue, Decimal::from(375));
    }

    #[test]
    fn lost_revenue_multiplies_unrounded_daily_loss() {
        let tv = product("SKU01000", "Electronics");
        let mut sales = vec![
            sale(1, 1, "ST001", &tv, 1),
            sale(2, 1, "ST001", &tv, 1),
            sale(3, 2, "ST001", &tv, 1),
        ];
        for (line, revenue) in sales.iter_mut().zip([1000, 1000, 1001]) {
            line.revenue = Decimal::new(revenue, 2);
        }
        let data = Dataset {
            stores: vec![store("ST001", "Downtown Flagship")],
            inventory: (1..=3).map(|day| snapshot(day, "ST001", &tv, 0)).collect(),
            sales,
            products: vec![tv],
            ..Dataset::default()
        };

        let stockouts = build_report(&data, &ReportFilter::default()).unwrap().stockouts;
        // mean line revenue is 10.00333..., shown as 10.00
        assert_eq!(stockouts.estimated_daily_loss, Decimal::new(1000, 2));
        assert_eq!(stockouts.total_lost_revenue, Decimal::new(3001, 2));
        assert_eq!(stockouts.cells[0].estimated_lost_revenue, Decimal::new(3001, 2));
    }
}
