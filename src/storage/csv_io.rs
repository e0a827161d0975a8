//! CSV encoding and decoding of single tables.

use super::table::TableRecord;
use crate::error::{Result, RetailError};
use std::io::{Read, Write};
use std::path::Path;

/// Write `rows` with the table's header row, even when `rows` is empty.
pub fn write_rows<T: TableRecord, W: Write>(writer: W, rows: &[T]) -> Result<()> {
    let file = T::TABLE.file_name();
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(T::TABLE.columns())
        .map_err(|e| RetailError::csv(file, e))?;
    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| RetailError::csv(file, e))?;
    }
    csv_writer
        .flush()
        .map_err(|e| RetailError::io(file, e))?;
    Ok(())
}

/// Write a table to `path`, replacing any existing file.
pub fn write_table<T: TableRecord>(path: &Path, rows: &[T]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| RetailError::io(path, e))?;
    write_rows(std::io::BufWriter::new(file), rows)
}

/// Read every row, validating natural keys as they arrive.
///
/// Line numbers in errors are 1-based file lines (the header is line 1).
pub fn read_rows<T: TableRecord, R: Read>(reader: R) -> Result<Vec<T>> {
    let file = T::TABLE.file_name();
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in csv_reader.deserialize::<T>().enumerate() {
        let line = index + 2;
        let row = result.map_err(|e| RetailError::MalformedRow {
            file: file.to_string(),
            line,
            reason: e.to_string(),
        })?;

        for (kind, value) in row.natural_keys() {
            if !kind.is_valid(value) {
                return Err(RetailError::MalformedRow {
                    file: file.to_string(),
                    line,
                    reason: format!("invalid {} '{}'", kind.column(), value),
                });
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Read a table from `path`.
pub fn read_table<T: TableRecord>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(RetailError::MissingTable(path.to_path_buf()));
    }
    let file = std::fs::File::open(path).map_err(|e| RetailError::io(path, e))?;
    read_rows(std::io::BufReader::new(file))
}
