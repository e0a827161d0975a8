//! Daily sales totals.

use super::view::ReportView;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub revenue: Decimal,
    pub profit: Decimal,
    /// Sales lines rung up that day.
    pub transactions: usize,
}

pub fn compute(view: &ReportView<'_>) -> Vec<DailySales> {
    let mut days: BTreeMap<NaiveDate, DailySales> = BTreeMap::new();
    for line in &view.sales {
        let day = days.entry(line.date).or_insert_with(|| DailySales {
            date: line.date,
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            transactions: 0,
        });
        day.revenue += line.revenue;
        day.profit += line.profit;
        day.transactions += 1;
    }
    days.into_values().collect()
}
