//! Supplier scorecard over all purchase orders.

use super::view::ReportView;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

pub const SCORECARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierScore {
    pub supplier_id: String,
    pub supplier_name: String,
    pub po_count: usize,
    pub total_spend: Decimal,
    pub reliability_score: f64,
    pub defect_rate: f64,
    pub avg_lead_time: u32,
}

/// Top suppliers by purchase order spend.
///
/// Purchase orders are not subject to the report's date/store/department
/// filter; orders naming an unknown supplier are skipped.
pub fn compute(view: &ReportView<'_>) -> Vec<SupplierScore> {
    let mut totals: HashMap<&str, (usize, Decimal)> = HashMap::new();
    for po in &view.dataset.purchase_orders {
        let entry = totals.entry(po.supplier_id.as_str()).or_default();
        entry.0 += 1;
        entry.1 += po.total_cost;
    }

    let mut scores: Vec<SupplierScore> = totals
        .into_iter()
        .filter_map(|(supplier_id, (po_count, total_spend))| {
            let supplier = view.suppliers.get(supplier_id)?;
            Some(SupplierScore {
                supplier_id: supplier_id.to_string(),
                supplier_name: supplier.supplier_name.clone(),
                po_count,
                total_spend,
                reliability_score: supplier.reliability_score,
                defect_rate: supplier.defect_rate,
                avg_lead_time: supplier.avg_lead_time,
            })
        })
        .collect();

    scores.sort_by(|a, b| {
        b.total_spend
            .cmp(&a.total_spend)
            .then_with(|| a.supplier_id.cmp(&b.supplier_id))
    });
    scores.truncate(SCORECARD_SIZE);
    scores
}
