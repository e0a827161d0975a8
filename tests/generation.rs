//! Whole-run generation properties

use chrono::NaiveDate;
use retailsim::model::StockStatus;
use retailsim::{Dataset, SimulationConfig, Simulator};
use std::collections::HashSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn two_week_config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        seed,
        start_date: date(2024, 6, 1),
        end_date: date(2024, 6, 14),
        as_of: Some(date(2024, 6, 20)),
        ..SimulationConfig::default()
    }
}

fn generate(seed: u64) -> Dataset {
    Simulator::new(&two_week_config(seed)).unwrap().run()
}

#[test]
fn test_same_seed_same_dataset() {
    assert_eq!(generate(42), generate(42));
}

#[test]
fn test_different_seed_different_catalog() {
    let a = generate(1);
    let b = generate(2);
    assert_ne!(a.products, b.products);
    // store network is fixed
    assert_eq!(a.stores, b.stores);
}

#[test]
fn test_catalog_shape() {
    let data = generate(42);
    assert_eq!(data.stores.len(), 8);
    assert_eq!(data.suppliers.len(), 14);

    let departments: HashSet<&str> = data.products.iter().map(|p| p.department.as_str()).collect();
    assert_eq!(departments.len(), 4);

    let supplier_ids: HashSet<&str> = data.suppliers.iter().map(|s| s.supplier_id.as_str()).collect();
    for p in &data.products {
        assert!(supplier_ids.contains(p.supplier_id.as_str()), "{} -> {}", p.sku, p.supplier_id);
        assert!(p.retail_price > p.cost);
    }
}

#[test]
fn test_natural_keys_are_unique() {
    let data = generate(42);
    let unique = |keys: Vec<&str>| keys.len() == keys.iter().collect::<HashSet<_>>().len();

    assert!(unique(data.products.iter().map(|p| p.sku.as_str()).collect()));
    assert!(unique(data.stores.iter().map(|s| s.store_id.as_str()).collect()));
    assert!(unique(data.suppliers.iter().map(|s| s.supplier_id.as_str()).collect()));
    assert!(unique(data.sales.iter().map(|s| s.transaction_id.as_str()).collect()));
    assert!(unique(data.purchase_orders.iter().map(|p| p.po_number.as_str()).collect()));
}

#[test]
fn test_snapshot_invariants() {
    let data = generate(42);
    let products = data.products_by_sku();
    assert!(!data.inventory.is_empty());

    for row in &data.inventory {
        let p = products[row.sku.as_str()];
        assert_eq!(
            row.status,
            StockStatus::classify(row.quantity_on_hand, p.reorder_point, p.reorder_quantity)
        );
        assert!(row.days_of_supply <= 999);
        assert_eq!(
            row.value_on_hand,
            (rust_decimal::Decimal::from(row.quantity_on_hand) * p.cost).round_dp(2)
        );
        assert!(row.date >= date(2024, 6, 1) && row.date <= date(2024, 6, 14));
    }
}

#[test]
fn test_sales_reference_catalog() {
    let data = generate(42);
    let products = data.products_by_sku();
    let stores = data.stores_by_id();
    for line in &data.sales {
        assert!(stores.contains_key(line.store_id.as_str()));
        let p = products[line.sku.as_str()];
        assert_eq!(line.unit_price, p.retail_price);
        assert_eq!(line.profit, line.revenue - line.cost);
    }
}

#[test]
fn test_purchase_orders_are_weekly() {
    let data = generate(42);
    let order_days: HashSet<NaiveDate> = data.purchase_orders.iter().map(|p| p.order_date).collect();
    // days 0 and 7 of a 14 day horizon
    assert_eq!(order_days, HashSet::from([date(2024, 6, 1), date(2024, 6, 8)]));
    for po in &data.purchase_orders {
        assert!(po.expected_delivery > po.order_date);
        assert_eq!(po.total_cost, (rust_decimal::Decimal::from(po.order_quantity) * po.unit_cost).round_dp(2));
    }
}

#[test]
fn test_inverted_horizon_is_rejected() {
    let config = SimulationConfig {
        start_date: date(2024, 6, 14),
        end_date: date(2024, 6, 1),
        ..two_week_config(42)
    };
    assert!(Simulator::new(&config).is_err());
}
