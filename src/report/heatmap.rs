//! Stock on hand by department and store on the latest day.

use super::view::ReportView;
use crate::model::StockStatus;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub department: String,
    pub store_name: String,
    pub quantity_on_hand: u64,
    pub out_of_stock: usize,
}

/// One cell per (department, store) present in the latest snapshot,
/// ordered by department then store name.
pub fn compute(view: &ReportView<'_>) -> Vec<HeatmapCell> {
    let mut cells: BTreeMap<(&str, &str), (u64, usize)> = BTreeMap::new();
    for row in &view.current {
        let (Some(department), Some(store_name)) =
            (view.department_of(&row.sku), view.store_name_of(&row.store_id))
        else {
            continue;
        };
        let cell = cells.entry((department, store_name)).or_default();
        cell.0 += u64::from(row.quantity_on_hand);
        if row.status == StockStatus::OutOfStock {
            cell.1 += 1;
        }
    }

    cells
        .into_iter()
        .map(|((department, store_name), (quantity_on_hand, out_of_stock))| HeatmapCell {
            department: department.to_string(),
            store_name: store_name.to_string(),
            quantity_on_hand,
            out_of_stock,
        })
        .collect()
}
