//! Plain-text rendering of a dashboard report.

use colored::Colorize;
use retailsim::report::{DashboardReport, Priority};

pub fn print_report(report: &DashboardReport) {
    print_kpis(report);
    print_heatmap(report);
    print_abc(report);
    print_turnover(report);
    print_stockouts(report);
    print_suppliers(report);
    print_reorder(report);
    print_trends(report);
}

fn heading(title: &str) {
    println!("\n{}\n", title.bold());
}

fn print_kpis(report: &DashboardReport) {
    let k = &report.kpis;
    heading("📊 Key Performance Indicators");
    match k.latest_date {
        Some(date) => println!("As of: {}", date),
        None => println!("As of: no inventory in range"),
    }
    if let Some((from, to)) = report.filter.date_range {
        println!("Window: {} to {}", from, to);
    }
    println!("Inventory value: ${} ({} items tracked)", k.inventory_value, k.items_tracked);
    println!(
        "Revenue: ${}  Profit: ${}  Lines: {}  Avg margin: {}%",
        k.total_revenue, k.total_profit, k.sales_lines, k.avg_margin
    );

    let stockouts = format!("Stockouts: {}", k.stockouts);
    if k.stockouts_critical {
        println!("{} {}", stockouts, "Critical".red().bold());
    } else {
        println!("{} {}", stockouts, "Normal".green());
    }
    let low = format!("Low stock: {}", k.low_stock);
    if k.low_stock_warning {
        println!("{} {}", low, "Warning".yellow().bold());
    } else {
        println!("{} {}", low, "Normal".green());
    }
}

fn print_heatmap(report: &DashboardReport) {
    heading("🗺️  Stock by Department and Store");
    if report.heatmap.is_empty() {
        println!("No inventory on the latest day");
        return;
    }
    println!("{:<14} {:<22} {:>10} {:>6}", "Department", "Store", "On hand", "OOS");
    for cell in &report.heatmap {
        let oos = if cell.out_of_stock > 0 {
            cell.out_of_stock.to_string().red().to_string()
        } else {
            cell.out_of_stock.to_string()
        };
        println!(
            "{:<14} {:<22} {:>10} {:>6}",
            cell.department, cell.store_name, cell.quantity_on_hand, oos
        );
    }
}

fn print_abc(report: &DashboardReport) {
    heading("🏷️  ABC Analysis");
    for class in &report.abc.summary {
        println!(
            "Class {}: {} products, ${} ({}% of revenue)",
            class.class, class.product_count, class.revenue, class.revenue_pct
        );
    }
}

fn print_turnover(report: &DashboardReport) {
    heading("🔄 Inventory Turnover");
    println!("{:<14} {:>14} {:>14} {:>8}", "Department", "COGS", "On hand", "Ratio");
    for row in &report.turnover {
        println!(
            "{:<14} {:>14} {:>14} {:>8}",
            row.department, row.cogs, row.value_on_hand, row.turnover_ratio
        );
    }
}

fn print_stockouts(report: &DashboardReport) {
    let s = &report.stockouts;
    heading("⚠️  Stockout Impact");
    println!("Estimated daily loss per stockout: ${}", s.estimated_daily_loss);
    println!("Total estimated lost revenue: {}", format!("${}", s.total_lost_revenue).red());
    for (store, days) in &s.by_store {
        println!("  {:<22} {:>5} stockout days", store, days);
    }
    for (department, lost) in &s.by_department {
        println!("  {:<22} ${:>12}", department, lost);
    }
}

fn print_suppliers(report: &DashboardReport) {
    heading("🚚 Supplier Scorecard");
    println!(
        "{:<8} {:<28} {:>5} {:>14} {:>7} {:>7} {:>5}",
        "ID", "Supplier", "POs", "Spend", "Rel.", "Defect", "Lead"
    );
    for s in &report.suppliers {
        println!(
            "{:<8} {:<28} {:>5} {:>14} {:>7.1} {:>7.2} {:>5}",
            s.supplier_id,
            s.supplier_name,
            s.po_count,
            s.total_spend,
            s.reliability_score,
            s.defect_rate,
            s.avg_lead_time
        );
    }
}

fn priority_label(priority: Priority) -> String {
    let label = priority.to_string();
    match priority {
        Priority::Critical => label.red().bold().to_string(),
        Priority::High => label.yellow().to_string(),
        Priority::Medium => label.blue().to_string(),
    }
}

fn print_reorder(report: &DashboardReport) {
    let r = &report.reorder;
    heading("📋 Reorder Priorities");
    println!(
        "{}: {}  {}: {}  {}: {}",
        priority_label(Priority::Critical),
        r.critical,
        priority_label(Priority::High),
        r.high,
        priority_label(Priority::Medium),
        r.medium
    );
    for item in &r.top {
        println!(
            "  {:<10} {:>5.1}% {:<22} {:<32} {}/{} ({})",
            priority_label(item.priority),
            item.urgency_score,
            item.store_name,
            item.product_name,
            item.quantity_on_hand,
            item.reorder_point,
            item.priority.action()
        );
    }
}

fn print_trends(report: &DashboardReport) {
    heading("📈 Daily Sales");
    for day in &report.trends {
        println!(
            "{}  revenue ${:>12}  profit ${:>12}  lines {:>5}",
            day.date, day.revenue, day.profit, day.transactions
        );
    }
}
