//! Reader for the whitespace-separated hindcast table.
//!
//! The first non-blank line is the header; the hindcast column is located by
//! name and every following non-blank line contributes one reference row,
//! in file order.
//!
//! Header names bind to the right-most fields of a row. A row with more
//! fields than the header (a `YYYY/MM/DD HH:MM` time splits into two) treats
//! its extra leading fields as an unnamed index.

use crate::error::TideError;
use crate::sample::ReferenceSample;
use log::info;
use std::path::Path;

/// Default name of the hindcast column.
pub const HINDCAST_COLUMN: &str = "Hindcast";

/// Parse hindcast text into reference samples.
///
/// A cell that is absent or not a finite number becomes a missing value; the
/// row itself is kept so positional alignment is not disturbed.
pub fn parse_hindcast(text: &str, column: &str) -> Result<Vec<ReferenceSample>, TideError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header = lines.next().ok_or_else(|| TideError::MissingColumn {
        column: column.to_string(),
    })?;
    let names: Vec<&str> = header.split_whitespace().collect();
    let idx = names
        .iter()
        .position(|name| *name == column)
        .ok_or_else(|| TideError::MissingColumn {
            column: column.to_string(),
        })?;

    let references = lines
        .map(|line| {
            let cells: Vec<&str> = line.split_whitespace().collect();
            let offset = cells.len().saturating_sub(names.len());
            let value = cells
                .get(idx + offset)
                .and_then(|cell| cell.parse::<f64>().ok())
                .filter(|v| v.is_finite());
            ReferenceSample { value }
        })
        .collect();
    Ok(references)
}

/// Read the hindcast table from disk.
pub fn read_hindcast(path: &Path, column: &str) -> Result<Vec<ReferenceSample>, TideError> {
    if !path.exists() {
        return Err(TideError::MissingSource {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    let references = parse_hindcast(&text, column)?;
    info!("Hindcast data loaded: {} records", references.len());
    Ok(references)
}
