//! Reorder prioritisation of the latest snapshot.

use super::view::ReportView;
use serde::Serialize;
use std::fmt;

pub const TOP_REORDERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Medium up to 50% urgency, High up to 80%, Critical above.
    pub fn from_urgency(urgency_score: f64) -> Self {
        if urgency_score <= 50.0 {
            Priority::Medium
        } else if urgency_score <= 80.0 {
            Priority::High
        } else {
            Priority::Critical
        }
    }

    /// Recommended action window.
    pub fn action(&self) -> &'static str {
        match self {
            Priority::Critical => "Immediate Action Required",
            Priority::High => "Order Within 48hrs",
            Priority::Medium => "Order This Week",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        })
    }
}

/// Share of the reorder point already consumed, in percent.
///
/// A zero reorder point never triggers a reorder, so it scores zero.
pub fn urgency_score(quantity_on_hand: u32, reorder_point: u32) -> f64 {
    if reorder_point == 0 {
        return 0.0;
    }
    (f64::from(reorder_point) - f64::from(quantity_on_hand)) / f64::from(reorder_point) * 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderItem {
    pub store_name: String,
    pub product_name: String,
    pub department: String,
    pub quantity_on_hand: u32,
    pub reorder_point: u32,
    pub urgency_score: f64,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderPriorities {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    /// Most urgent items first.
    pub top: Vec<ReorderItem>,
}

pub fn compute(view: &ReportView<'_>) -> ReorderPriorities {
    let mut items: Vec<ReorderItem> = view
        .current
        .iter()
        .filter_map(|row| {
            let product = view.products.get(row.sku.as_str())?;
            if row.quantity_on_hand > product.reorder_point {
                return None;
            }
            let urgency = urgency_score(row.quantity_on_hand, product.reorder_point);
            Some(ReorderItem {
                store_name: view.store_name_of(&row.store_id).unwrap_or(&row.store_id).to_string(),
                product_name: product.product_name.clone(),
                department: product.department.clone(),
                quantity_on_hand: row.quantity_on_hand,
                reorder_point: product.reorder_point,
                urgency_score: urgency,
                priority: Priority::from_urgency(urgency),
            })
        })
        .collect();

    let count = |p: Priority| items.iter().filter(|i| i.priority == p).count();
    let (critical, high, medium) = (
        count(Priority::Critical),
        count(Priority::High),
        count(Priority::Medium),
    );

    items.sort_by(|a, b| {
        b.urgency_score
            .total_cmp(&a.urgency_score)
            .then_with(|| a.store_name.cmp(&b.store_name))
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    items.truncate(TOP_REORDERS);

    ReorderPriorities {
        critical,
        high,
        medium,
        top: items,
    }
}
