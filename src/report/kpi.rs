//! Headline indicators.

use super::view::ReportView;
use crate::model::StockStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// More stockouts than this on the latest day is critical.
pub const STOCKOUT_CRITICAL_THRESHOLD: usize = 10;
/// More low-stock rows than this on the latest day is a warning.
pub const LOW_STOCK_WARNING_THRESHOLD: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub latest_date: Option<NaiveDate>,
    pub inventory_value: Decimal,
    pub items_tracked: usize,
    pub total_revenue: Decimal,
    pub total_profit: Decimal,
    pub sales_lines: usize,
    pub avg_margin: Decimal,
    pub stockouts: usize,
    pub low_stock: usize,
    pub stockouts_critical: bool,
    pub low_stock_warning: bool,
}

pub fn compute(view: &ReportView<'_>) -> Kpis {
    let inventory_value = view.current.iter().map(|r| r.value_on_hand).sum();
    let total_revenue = view.sales.iter().map(|s| s.revenue).sum();
    let total_profit = view.sales.iter().map(|s| s.profit).sum();
    let avg_margin = mean(view.sales.iter().map(|s| s.profit_margin));

    let count_status = |status: StockStatus| view.current.iter().filter(|r| r.status == status).count();
    let stockouts = count_status(StockStatus::OutOfStock);
    let low_stock = count_status(StockStatus::LowStock);

    Kpis {
        latest_date: view.latest_date,
        inventory_value,
        items_tracked: view.current.len(),
        total_revenue,
        total_profit,
        sales_lines: view.sales.len(),
        avg_margin: avg_margin.round_dp(2),
        stockouts,
        low_stock,
        stockouts_critical: stockouts > STOCKOUT_CRITICAL_THRESHOLD,
        low_stock_warning: low_stock > LOW_STOCK_WARNING_THRESHOLD,
    }
}

/// Arithmetic mean, zero for an empty input.
pub(crate) fn mean(values: impl Iterator<Item = Decimal>) -> Decimal {
    let (sum, n) = values.fold((Decimal::ZERO, 0u64), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        Decimal::ZERO
    } else {
        sum / Decimal::from(n)
    }
}
