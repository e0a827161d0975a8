//! Checksums for written table files

use crate::error::{Result, RetailError};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Calculate the SHA-256 checksum of a file
///
/// Used to confirm that a table on disk is byte-for-byte the one the
/// generator wrote.
///
/// # Errors
///
/// Returns `RetailError::MissingTable` if the file does not exist and
/// `RetailError::Io` if it cannot be read.
pub fn calculate_checksum(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(RetailError::MissingTable(path.to_path_buf()));
    }
    let content = fs::read(path).map_err(|e| RetailError::io(path, e))?;

    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Validate a current checksum against the recorded one
pub fn validate_checksum(file: &str, recorded: &str, current: &str) -> Result<()> {
    if recorded == current {
        Ok(())
    } else {
        Err(RetailError::ChecksumMismatch {
            file: file.to_string(),
            recorded: recorded.to_string(),
            current: current.to_string(),
        })
    }
}
