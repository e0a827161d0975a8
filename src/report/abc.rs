//! Pareto / ABC classification of SKUs by revenue.

use super::view::ReportView;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Cumulative revenue share (percent) up to which products are class A.
pub const CLASS_A_LIMIT_PCT: u32 = 80;
/// Cumulative revenue share (percent) up to which products are class B.
pub const CLASS_B_LIMIT_PCT: u32 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl AbcClass {
    /// Class for a product whose cumulative revenue share is `cumulative_pct`.
    pub fn from_cumulative_pct(cumulative_pct: Decimal) -> Self {
        if cumulative_pct <= Decimal::from(CLASS_A_LIMIT_PCT) {
            AbcClass::A
        } else if cumulative_pct <= Decimal::from(CLASS_B_LIMIT_PCT) {
            AbcClass::B
        } else {
            AbcClass::C
        }
    }
}

impl fmt::Display for AbcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedProduct {
    pub rank: usize,
    pub sku: String,
    pub revenue: Decimal,
    pub cumulative_pct: Decimal,
    pub class: AbcClass,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSummary {
    pub class: AbcClass,
    pub product_count: usize,
    pub revenue: Decimal,
    pub revenue_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbcAnalysis {
    pub products: Vec<RankedProduct>,
    pub summary: Vec<ClassSummary>,
}

pub fn compute(view: &ReportView<'_>) -> AbcAnalysis {
    let mut by_sku: HashMap<&str, Decimal> = HashMap::new();
    for line in &view.sales {
        *by_sku.entry(line.sku.as_str()).or_default() += line.revenue;
    }
    classify(by_sku.into_iter().map(|(sku, revenue)| (sku.to_string(), revenue)).collect())
}

/// Rank `(sku, revenue)` pairs and assign classes.
///
/// Ties in revenue are broken by SKU so the ranking is stable.
pub fn classify(mut revenues: Vec<(String, Decimal)>) -> AbcAnalysis {
    revenues.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let total: Decimal = revenues.iter().map(|(_, r)| *r).sum();

    let mut running = Decimal::ZERO;
    let products: Vec<RankedProduct> = revenues
        .into_iter()
        .enumerate()
        .map(|(i, (sku, revenue))| {
            running += revenue;
            let cumulative_pct = if total > Decimal::ZERO {
                running / total * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            RankedProduct {
                rank: i + 1,
                sku,
                revenue,
                class: AbcClass::from_cumulative_pct(cumulative_pct),
                cumulative_pct: cumulative_pct.round_dp(2),
            }
        })
        .collect();

    let summary = [AbcClass::A, AbcClass::B, AbcClass::C]
        .into_iter()
        .filter_map(|class| {
            let members: Vec<_> = products.iter().filter(|p| p.class == class).collect();
            if members.is_empty() {
                return None;
            }
            let revenue: Decimal = members.iter().map(|p| p.revenue).sum();
            let revenue_pct = if total > Decimal::ZERO {
                (revenue / total * Decimal::ONE_HUNDRED).round_dp(1)
            } else {
                Decimal::ZERO
            };
            Some(ClassSummary {
                class,
                product_count: members.len(),
                revenue,
                revenue_pct,
            })
        })
        .collect();

    AbcAnalysis { products, summary }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn classes_follow_cumulative_share() {
        let analysis = classify(vec![
            ("SKU01003".into(), d(5)),
            ("SKU01000".into(), d(70)),
            ("SKU01002".into(), d(10)),
            ("SKU01001".into(), d(15)),
        ]);
        let classes: Vec<_> = analysis.products.iter().map(|p| (p.sku.as_str(), p.class)).collect();
        assert_eq!(
            classes,
            vec![
                ("SKU01000", AbcClass::A), // 70%
                ("SKU01001", AbcClass::B), // 85%
                ("SKU01002", AbcClass::B), // 95%, inclusive
                ("SKU01003", AbcClass::C), // 100%
            ]
        );
        assert_eq!(analysis.products[3].cumulative_pct, d(100));
        assert_eq!(analysis.products[0].rank, 1);
    }

    #[test]
    fn ties_rank_by_sku() {
        let analysis = classify(vec![("SKU01001".into(), d(10)), ("SKU01000".into(), d(10))]);
        assert_eq!(analysis.products[0].sku, "SKU01000");
    }

    #[test]
    fn summary_shares_add_up() {
        let analysis = classify(vec![
            ("SKU01000".into(), d(80)),
            ("SKU01001".into(), d(15)),
            ("SKU01002".into(), d(5)),
        ]);
        let counts: Vec<_> = analysis.summary.iter().map(|s| (s.class, s.product_count)).collect();
        assert_eq!(counts, vec![(AbcClass::A, 1), (AbcClass::B, 1), (AbcClass::C, 1)]);
        assert_eq!(analysis.summary[0].revenue_pct, Decimal::new(800, 1));
    }

    #[test]
    fn empty_sales_give_empty_analysis() {
        let analysis = classify(Vec::new());
        assert!(analysis.products.is_empty());
        assert!(analysis.summary.is_empty());
    }
}
