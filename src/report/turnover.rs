//! Inventory turnover by department.

use super::view::ReportView;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentTurnover {
    pub department: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    /// Revenue minus profit over the filtered sales.
    pub cogs: Decimal,
    /// Value on hand on the latest snapshot day.
    pub value_on_hand: Decimal,
    pub turnover_ratio: Decimal,
}

/// COGS over latest stock value for departments with both sales and stock,
/// slowest-moving first.
pub fn compute(view: &ReportView<'_>) -> Vec<DepartmentTurnover> {
    let mut sales: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();
    for line in &view.sales {
        if let Some(department) = view.department_of(&line.sku) {
            let entry = sales.entry(department).or_default();
            entry.0 += line.revenue;
            entry.1 += line.profit;
        }
    }

    let mut stock: BTreeMap<&str, Decimal> = BTreeMap::new();
    for row in &view.current {
        if let Some(department) = view.department_of(&row.sku) {
            *stock.entry(department).or_default() += row.value_on_hand;
        }
    }

    let mut rows: Vec<DepartmentTurnover> = sales
        .into_iter()
        .filter_map(|(department, (revenue, profit))| {
            let value_on_hand = *stock.get(department)?;
            let cogs = revenue - profit;
            Some(DepartmentTurnover {
                department: department.to_string(),
                revenue,
                profit,
                cogs,
                value_on_hand,
                turnover_ratio: turnover_ratio(cogs, value_on_hand),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        a.turnover_ratio
            .cmp(&b.turnover_ratio)
            .then_with(|| a.department.cmp(&b.department))
    });
    rows
}

/// `cogs / value_on_hand` to 4 places; zero when nothing is on hand.
pub fn turnover_ratio(cogs: Decimal, value_on_hand: Decimal) -> Decimal {
    if value_on_hand.is_zero() {
        Decimal::ZERO
    } else {
        (cogs / value_on_hand).round_dp(4)
    }
}
