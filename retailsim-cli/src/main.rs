//! Retail Dataset CLI
//!
//! Generates the synthetic retail tables, verifies a data directory against
//! its manifest and prints the dashboard aggregates.

mod render;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use retailsim::report::{build_report, ReportFilter};
use retailsim::storage::{load_dataset, verify_dataset, write_dataset};
use retailsim::{Dataset, SimulationConfig, Simulator};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process;

/// Default report window, in days ending at the latest snapshot.
const DEFAULT_REPORT_DAYS: u64 = 30;

#[derive(Parser)]
#[command(name = "retailsim")]
#[command(about = "Synthetic retail dataset generator and stock reports")]
#[command(version = "0.1.0")]
struct Cli {
    /// Settings file
    #[arg(long, default_value = retailsim::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all six tables and the manifest
    Generate {
        #[arg(long)]
        seed: Option<u64>,

        /// First simulated day (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last simulated day (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Reference date for purchase order status (default: today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Write Prometheus metrics for the run to this file
        #[cfg(feature = "metrics")]
        #[arg(long)]
        metrics_out: Option<PathBuf>,
    },

    /// Print dashboard aggregates for a generated data directory
    Report {
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// First day of the window (default: 30 days before the latest snapshot)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day of the window (default: latest snapshot)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Ignore the date window
        #[arg(long, conflicts_with_all = ["from", "to"])]
        all_dates: bool,

        /// Store name, e.g. "Downtown Flagship"
        #[arg(long)]
        store: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Check table checksums against the manifest
    Verify {
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    if cli.quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
    } else if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let result = match cli.command {
        Commands::Generate {
            seed,
            start,
            end,
            as_of,
            output_dir,
            #[cfg(feature = "metrics")]
            metrics_out,
        } => {
            let overrides = Overrides {
                seed,
                start,
                end,
                as_of,
                output_dir,
            };
            let result = handle_generate(&cli.config, overrides, cli.quiet);
            #[cfg(feature = "metrics")]
            let result = result.and_then(|()| write_metrics(metrics_out.as_deref()));
            result
        }
        Commands::Report {
            data_dir,
            from,
            to,
            all_dates,
            store,
            department,
            format,
        } => {
            let window = Window { from, to, all_dates };
            handle_report(&data_dir, window, store, department, format)
        }
        Commands::Verify { data_dir } => handle_verify(&data_dir, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {:#}", e);
        process::exit(1);
    }
}

struct Overrides {
    seed: Option<u64>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    as_of: Option<NaiveDate>,
    output_dir: Option<PathBuf>,
}

impl Overrides {
    fn apply(self, config: &mut SimulationConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(start) = self.start {
            config.start_date = start;
        }
        if let Some(end) = self.end {
            config.end_date = end;
        }
        if self.as_of.is_some() {
            config.as_of = self.as_of;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
    }
}

/// Settings file overlaid by env vars, then by command-line flags.
fn resolve_settings(config_path: &Path, overrides: Overrides) -> anyhow::Result<SimulationConfig> {
    let mut config = SimulationConfig::load_from(config_path)
        .with_context(|| format!("loading settings from {}", config_path.display()))?;
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn handle_generate(config_path: &Path, overrides: Overrides, quiet: bool) -> anyhow::Result<()> {
    let config = resolve_settings(config_path, overrides)?;
    log::info!(
        "generating into {} (seed {})",
        config.output_dir.display(),
        config.seed
    );

    let simulator = Simulator::new(&config)?;
    let dataset = simulator.run();
    let manifest = write_dataset(&config.output_dir, &dataset, simulator.run_info())?;

    if quiet {
        return Ok(());
    }

    println!("\n📦 Generated dataset (seed {})\n", config.seed);
    print_summary(&dataset)?;

    println!("\n📁 Files in {}:", config.output_dir.display());
    for entry in &manifest.tables {
        println!("  ✓ {} ({} rows)", entry.file, entry.rows);
    }
    println!("  ✓ {}", retailsim::storage::MANIFEST_FILE);
    Ok(())
}

fn print_summary(dataset: &Dataset) -> anyhow::Result<()> {
    let states: BTreeSet<&str> = dataset.stores.iter().map(|s| s.state.as_str()).collect();
    let departments: BTreeSet<&str> = dataset.products.iter().map(|p| p.department.as_str()).collect();

    println!("Stores: {} across {} states", dataset.stores.len(), states.len());
    println!("Products: {} across {} departments", dataset.products.len(), departments.len());
    println!("Suppliers: {}", dataset.suppliers.len());
    println!("Inventory snapshots: {}", dataset.inventory.len());
    println!("Sales lines: {}", dataset.sales.len());
    println!("Purchase orders: {}", dataset.purchase_orders.len());

    let kpis = build_report(dataset, &ReportFilter::default())?.kpis;
    println!("\n💰 Revenue: ${}", kpis.total_revenue);
    println!("💰 Profit: ${}", kpis.total_profit);
    println!("📈 Average margin: {}%", kpis.avg_margin);

    if let Some((first, last)) = dataset.inventory_date_span() {
        println!("📅 Date range: {} to {}", first, last);
    }
    Ok(())
}

struct Window {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    all_dates: bool,
}

impl Window {
    fn filter(&self, dataset: &Dataset) -> ReportFilter {
        if self.all_dates {
            return ReportFilter::default();
        }
        let mut filter = ReportFilter::last_days(dataset, DEFAULT_REPORT_DAYS);
        if self.from.is_some() || self.to.is_some() {
            let span = dataset.inventory_date_span();
            let from = self.from.or(span.map(|(min, _)| min)).unwrap_or(NaiveDate::MIN);
            let to = self.to.or(span.map(|(_, max)| max)).unwrap_or(NaiveDate::MAX);
            filter.date_range = Some((from, to));
        }
        filter
    }
}

fn handle_report(
    data_dir: &Path,
    window: Window,
    store: Option<String>,
    department: Option<String>,
    format: Format,
) -> anyhow::Result<()> {
    let dataset = load_dataset(data_dir)
        .with_context(|| format!("loading tables from {}", data_dir.display()))?;

    let mut filter = window.filter(&dataset);
    if let Some(store) = store {
        filter = filter.with_store(store);
    }
    if let Some(department) = department {
        filter = filter.with_department(department);
    }

    log::info!(
        "report window {:?}, store {:?}, department {:?}",
        filter.date_range,
        filter.store_name,
        filter.department
    );
    let report = build_report(&dataset, &filter)?;
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => render::print_report(&report),
    }
    Ok(())
}

fn handle_verify(data_dir: &Path, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("Validating checksums...");
    }
    let manifest = verify_dataset(data_dir)?;
    if !quiet {
        for entry in &manifest.tables {
            println!("  ✓ {} ({} rows)", entry.file, entry.rows);
        }
        println!(
            "✅ All checksums valid (seed {}, {} to {})",
            manifest.run.seed, manifest.run.start_date, manifest.run.end_date
        );
    }
    Ok(())
}

#[cfg(feature = "metrics")]
fn write_metrics(path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = path {
        std::fs::write(path, retailsim::metrics::METRICS.render())
            .with_context(|| format!("writing metrics to {}", path.display()))?;
        log::info!("metrics written to {}", path.display());
    }
    Ok(())
}
