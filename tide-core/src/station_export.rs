//! Reader for raw tide station exports.
//!
//! A station export starts with a free-text preamble, followed by a CSV
//! table with one row per day-hour and one column per minute offset:
//!
//! ```text
//! yyyymmddhh,:00,:06,:12,...
//! 2016010100,1523,1530,1541,...
//! ```
//!
//! Only the timestamp column and the on-the-hour column are read. Cells are
//! kept as text; decoding happens in the regularizer so that a bad cell
//! only costs its own record.

use crate::error::TideError;
use crate::sample::{RawReading, RawSample};
use crate::timestamp::TimestampCode;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;
use std::path::Path;

/// Where the interesting columns live in a station export.
#[derive(Debug, Clone, PartialEq)]
pub struct StationExportLayout {
    /// Free-text lines before the header row.
    pub skip_rows: usize,
    pub timestamp_column: String,
    pub value_column: String,
    pub delimiter: u8,
}

impl Default for StationExportLayout {
    fn default() -> Self {
        StationExportLayout {
            skip_rows: 20,
            timestamp_column: String::from("yyyymmddhh"),
            value_column: String::from(":00"),
            delimiter: b',',
        }
    }
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, TideError> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| TideError::MissingColumn {
            column: column.to_string(),
        })
}

/// Parse station export text into raw samples.
pub fn parse_station_export(
    text: &str,
    layout: &StationExportLayout,
) -> Result<Vec<RawSample>, TideError> {
    let table: String = text
        .lines()
        .skip(layout.skip_rows)
        .collect::<Vec<&str>>()
        .join("\n");
    let mut rdr = ReaderBuilder::new()
        .delimiter(layout.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(table.as_bytes());

    let headers = rdr.headers()?.clone();
    let timestamp_idx = column_index(&headers, &layout.timestamp_column)?;
    let value_idx = column_index(&headers, &layout.value_column)?;

    let mut samples = Vec::new();
    for row in rdr.records() {
        let record = row?;
        let timestamp_code = TimestampCode::from(record.get(timestamp_idx).unwrap_or(""));
        let raw_value = match record.get(value_idx) {
            Some(cell) if !cell.is_empty() => RawReading::from(cell),
            _ => RawReading::Missing,
        };
        samples.push(RawSample {
            timestamp_code,
            raw_value,
        });
    }
    Ok(samples)
}

/// Read a station export from disk.
///
/// The bytes are decoded lossily: station names in the preamble are often in
/// a legacy encoding, while the table itself is plain ASCII.
pub fn read_station_export(
    path: &Path,
    layout: &StationExportLayout,
) -> Result<Vec<RawSample>, TideError> {
    if !path.exists() {
        return Err(TideError::MissingSource {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let samples = parse_station_export(&text, layout)?;
    info!("Read {} raw rows from {}", samples.len(), path.display());
    Ok(samples)
}
