//! Dashboard aggregates over a generated dataset

use chrono::{Days, NaiveDate};
use retailsim::model::StockStatus;
use retailsim::report::{build_report, AbcClass, Priority, ReportFilter};
use retailsim::{Dataset, RetailError, SimulationConfig, Simulator};
use rust_decimal::Decimal;

fn dataset() -> Dataset {
    let config = SimulationConfig {
        seed: 42,
        start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
        as_of: NaiveDate::from_ymd_opt(2024, 8, 1),
        ..SimulationConfig::default()
    };
    Simulator::new(&config).unwrap().run()
}

#[test]
fn test_default_window_is_last_30_days() {
    let data = dataset();
    let filter = ReportFilter::last_days(&data, 30);
    let (from, to) = filter.date_range.unwrap();
    assert_eq!(to, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
    assert_eq!(from, to.checked_sub_days(Days::new(30)).unwrap());

    let report = build_report(&data, &filter).unwrap();
    assert_eq!(report.kpis.latest_date, Some(to));
    assert!(report.trends.iter().all(|d| d.date >= from && d.date <= to));
}

#[test]
fn test_kpis_match_direct_sums() {
    let data = dataset();
    let report = build_report(&data, &ReportFilter::default()).unwrap();
    let latest = data.inventory_date_span().unwrap().1;

    let expected_value: Decimal = data
        .inventory
        .iter()
        .filter(|r| r.date == latest)
        .map(|r| r.value_on_hand)
        .sum();
    let expected_revenue: Decimal = data.sales.iter().map(|s| s.revenue).sum();
    let expected_stockouts = data
        .inventory
        .iter()
        .filter(|r| r.date == latest && r.status == StockStatus::OutOfStock)
        .count();

    assert_eq!(report.kpis.inventory_value, expected_value);
    assert_eq!(report.kpis.total_revenue, expected_revenue);
    assert_eq!(report.kpis.sales_lines, data.sales.len());
    assert_eq!(report.kpis.stockouts, expected_stockouts);
    assert_eq!(report.kpis.stockouts_critical, expected_stockouts > 10);
}

#[test]
fn test_abc_classes_are_monotone() {
    let data = dataset();
    let report = build_report(&data, &ReportFilter::default()).unwrap();
    let products = &report.abc.products;
    assert!(!products.is_empty());

    for pair in products.windows(2) {
        assert!(pair[0].class <= pair[1].class);
        assert!(pair[0].revenue >= pair[1].revenue);
        assert!(pair[0].cumulative_pct <= pair[1].cumulative_pct);
    }
    assert_eq!(products[0].class, AbcClass::A);
    let summed: usize = report.abc.summary.iter().map(|c| c.product_count).sum();
    assert_eq!(summed, products.len());
}

#[test]
fn test_reorder_priorities_follow_thresholds() {
    let data = dataset();
    let report = build_report(&data, &ReportFilter::default()).unwrap();
    let r = &report.reorder;

    let latest = data.inventory_date_span().unwrap().1;
    let products = data.products_by_sku();
    let at_or_below = data
        .inventory
        .iter()
        .filter(|row| row.date == latest)
        .filter(|row| row.quantity_on_hand <= products[row.sku.as_str()].reorder_point)
        .count();
    assert_eq!(r.critical + r.high + r.medium, at_or_below);

    assert!(r.top.len() <= 10);
    for item in &r.top {
        let expected = if item.urgency_score <= 50.0 {
            Priority::Medium
        } else if item.urgency_score <= 80.0 {
            Priority::High
        } else {
            Priority::Critical
        };
        assert_eq!(item.priority, expected);
    }
    for pair in r.top.windows(2) {
        assert!(pair[0].urgency_score >= pair[1].urgency_score);
    }
}

#[test]
fn test_turnover_sorted_and_supplier_scorecard_capped() {
    let data = dataset();
    let report = build_report(&data, &ReportFilter::default()).unwrap();

    for pair in report.turnover.windows(2) {
        assert!(pair[0].turnover_ratio <= pair[1].turnover_ratio);
    }
    assert!(report.suppliers.len() <= 10);
    for pair in report.suppliers.windows(2) {
        assert!(pair[0].total_spend >= pair[1].total_spend);
    }
}

#[test]
fn test_store_filter_limits_stockouts_to_that_store() {
    let data = dataset();
    let filter = ReportFilter::default().with_store("Airport Plaza");
    let report = build_report(&data, &filter).unwrap();

    assert!(report
        .stockouts
        .cells
        .iter()
        .all(|c| c.store_name == "Airport Plaza"));
    assert!(report.heatmap.iter().all(|c| c.store_name == "Airport Plaza"));
}

#[test]
fn test_unknown_store_and_department_are_errors() {
    let data = dataset();
    assert!(matches!(
        build_report(&data, &ReportFilter::default().with_store("Mars Base")),
        Err(RetailError::UnknownFilter { kind: "store", .. })
    ));
    assert!(matches!(
        build_report(&data, &ReportFilter::default().with_department("Groceries")),
        Err(RetailError::UnknownFilter { kind: "department", .. })
    ));
}

#[test]
fn test_report_serializes_to_json() {
    let data = dataset();
    let report = build_report(&data, &ReportFilter::last_days(&data, 7)).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("kpis").is_some());
    assert!(json["reorder"]["top"].is_array());
}

#[test]
fn test_empty_dataset_reports_zeroes() {
    let report = build_report(&Dataset::default(), &ReportFilter::default()).unwrap();
    assert_eq!(report.kpis.latest_date, None);
    assert_eq!(report.kpis.total_revenue, Decimal::ZERO);
    assert!(report.abc.products.is_empty());
    assert!(report.reorder.top.is_empty());
}
