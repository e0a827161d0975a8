//! Stockout frequency and estimated lost revenue.

use super::kpi::mean;
use super::view::ReportView;
use crate::model::StockStatus;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockoutCell {
    pub store_name: String,
    pub department: String,
    pub stockout_days: u64,
    pub estimated_lost_revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockoutImpact {
    /// Mean over SKUs of each SKU's mean line revenue.
    pub estimated_daily_loss: Decimal,
    pub total_lost_revenue: Decimal,
    pub cells: Vec<StockoutCell>,
    /// Stockout days per store, most affected first.
    pub by_store: Vec<(String, u64)>,
    /// Lost revenue per department, by name.
    pub by_department: Vec<(String, Decimal)>,
}

pub fn compute(view: &ReportView<'_>) -> StockoutImpact {
    // unrounded; only reported figures are rounded to cents
    let daily_loss = estimated_daily_loss(view);

    let mut days: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    for row in view.inventory.iter().filter(|r| r.status == StockStatus::OutOfStock) {
        let (Some(store_name), Some(department)) =
            (view.store_name_of(&row.store_id), view.department_of(&row.sku))
        else {
            continue;
        };
        *days.entry((store_name, department)).or_default() += 1;
    }

    let mut per_store: BTreeMap<&str, u64> = BTreeMap::new();
    let mut per_department: BTreeMap<&str, Decimal> = BTreeMap::new();
    let mut total_lost_revenue = Decimal::ZERO;
    let mut cells = Vec::with_capacity(days.len());
    for ((store_name, department), stockout_days) in days {
        let lost = Decimal::from(stockout_days) * daily_loss;
        *per_store.entry(store_name).or_default() += stockout_days;
        *per_department.entry(department).or_default() += lost;
        total_lost_revenue += lost;
        cells.push(StockoutCell {
            store_name: store_name.to_string(),
            department: department.to_string(),
            stockout_days,
            estimated_lost_revenue: lost.round_dp(2),
        });
    }

    let mut by_store: Vec<(String, u64)> = per_store
        .into_iter()
        .map(|(name, days)| (name.to_string(), days))
        .collect();
    by_store.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let by_department = per_department
        .into_iter()
        .map(|(name, lost)| (name.to_string(), lost.round_dp(2)))
        .collect();

    StockoutImpact {
        estimated_daily_loss: daily_loss.round_dp(2),
        total_lost_revenue: total_lost_revenue.round_dp(2),
        cells,
        by_store,
        by_department,
    }
}

fn estimated_daily_loss(view: &ReportView<'_>) -> Decimal {
    let mut per_sku: HashMap<&str, (Decimal, u64)> = HashMap::new();
    for line in &view.sales {
        let entry = per_sku.entry(line.sku.as_str()).or_default();
        entry.0 += line.revenue;
        entry.1 += 1;
    }
    mean(per_sku.values().map(|(sum, n)| *sum / Decimal::from(*n)))
}
