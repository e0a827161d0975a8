//! Flat-file round trip, manifest and checksum verification

use chrono::NaiveDate;
use retailsim::storage::{load_dataset, verify_dataset, write_dataset, Manifest, Table};
use retailsim::{RetailError, SimulationConfig, Simulator};
use std::fs;
use tempfile::TempDir;

fn simulator() -> Simulator {
    let config = SimulationConfig {
        seed: 7,
        start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        as_of: NaiveDate::from_ymd_opt(2024, 6, 25),
        ..SimulationConfig::default()
    };
    Simulator::new(&config).unwrap()
}

#[test]
fn test_write_then_load_returns_equal_tables() {
    let temp_dir = TempDir::new().unwrap();
    let sim = simulator();
    let dataset = sim.run();

    write_dataset(temp_dir.path(), &dataset, sim.run_info()).unwrap();
    let loaded = load_dataset(temp_dir.path()).unwrap();

    assert_eq!(loaded, dataset);
}

#[test]
fn test_manifest_records_rows_and_run() {
    let temp_dir = TempDir::new().unwrap();
    let sim = simulator();
    let dataset = sim.run();

    let manifest = write_dataset(temp_dir.path(), &dataset, sim.run_info()).unwrap();
    assert_eq!(manifest.tables.len(), 6);
    assert_eq!(manifest.entry(Table::Stores).unwrap().rows, 8);
    assert_eq!(manifest.entry(Table::Sales).unwrap().rows, dataset.sales.len());
    assert_eq!(manifest.run.seed, 7);

    let reread = Manifest::read(temp_dir.path()).unwrap();
    assert_eq!(reread, manifest);
    assert!(verify_dataset(temp_dir.path()).is_ok());
}

#[test]
fn test_same_seed_writes_byte_identical_catalog_files() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let sim = simulator();

    let a = write_dataset(first.path(), &sim.run(), sim.run_info()).unwrap();
    let b = write_dataset(second.path(), &sim.run(), sim.run_info()).unwrap();

    for table in Table::ALL.into_iter().filter(|t| t.is_catalog()) {
        assert_eq!(a.entry(table).unwrap().sha256, b.entry(table).unwrap().sha256);
        let bytes_a = fs::read(first.path().join(table.file_name())).unwrap();
        let bytes_b = fs::read(second.path().join(table.file_name())).unwrap();
        assert_eq!(bytes_a, bytes_b);
    }
}

#[test]
fn test_verify_detects_modified_table() {
    let temp_dir = TempDir::new().unwrap();
    let sim = simulator();
    write_dataset(temp_dir.path(), &sim.run(), sim.run_info()).unwrap();

    let path = temp_dir.path().join(Table::Stores.file_name());
    let mut contents = fs::read_to_string(&path).unwrap();
    contents = contents.replace("Downtown Flagship", "Uptown Flagship");
    fs::write(&path, contents).unwrap();

    match verify_dataset(temp_dir.path()) {
        Err(RetailError::ChecksumMismatch { file, .. }) => {
            assert_eq!(file, Table::Stores.file_name());
        }
        other => panic!("expected checksum mismatch, got {:?}", other),
    }
}

#[test]
fn test_missing_table_fails_whole_load() {
    let temp_dir = TempDir::new().unwrap();
    let sim = simulator();
    write_dataset(temp_dir.path(), &sim.run(), sim.run_info()).unwrap();
    fs::remove_file(temp_dir.path().join(Table::Sales.file_name())).unwrap();

    assert!(matches!(
        load_dataset(temp_dir.path()),
        Err(RetailError::MissingTable(_))
    ));
    assert!(verify_dataset(temp_dir.path()).is_err());
}

#[test]
fn test_malformed_key_fails_load_with_line() {
    let temp_dir = TempDir::new().unwrap();
    let sim = simulator();
    write_dataset(temp_dir.path(), &sim.run(), sim.run_info()).unwrap();

    let path = temp_dir.path().join(Table::Stores.file_name());
    let contents = fs::read_to_string(&path).unwrap().replacen("ST002", "STORE2", 1);
    fs::write(&path, contents).unwrap();

    match load_dataset(temp_dir.path()) {
        Err(RetailError::MalformedRow { file, line, .. }) => {
            assert_eq!(file, Table::Stores.file_name());
            assert_eq!(line, 3);
        }
        other => panic!("expected malformed row, got {:?}", other),
    }
}

#[test]
fn test_verify_without_manifest_fails() {
    let temp_dir = TempDir::new().unwrap();
    assert!(verify_dataset(temp_dir.path()).is_err());
}

#[test]
fn test_verify_rejects_manifest_with_dropped_entries() {
    let temp_dir = TempDir::new().unwrap();
    let sim = simulator();
    let mut manifest = write_dataset(temp_dir.path(), &sim.run(), sim.run_info()).unwrap();

    manifest.tables.retain(|t| t.file == Table::Stores.file_name());
    manifest.write(temp_dir.path()).unwrap();
    fs::write(temp_dir.path().join(Table::Sales.file_name()), "garbage").unwrap();

    match verify_dataset(temp_dir.path()) {
        Err(RetailError::MissingManifestEntry(file)) => {
            assert_eq!(file, Table::Products.file_name());
        }
        other => panic!("expected missing manifest entry, got {:?}", other),
    }
}
