//! Tabular sinks for the regularized and augmented series, and readers for
//! the artifacts they produce.
//!
//! # Formats
//!
//! - **Regularized** `Time,Tide_m`, time as `YYYY/MM/DD HH:MM`, missing
//!   written as the literal `NaN`. Written both comma separated without a
//!   header (`TideClean.csv`) and tab separated with a header
//!   (`TideClean.txt`).
//! - **Augmented** `Time,Tide_m,Hindcast,Tide_m_filled`, time as
//!   `YYYY-MM-DD HH:MM`, missing written as an empty field.

use crate::error::TideError;
use crate::sample::{AugmentedSample, Sample};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tide_utils::dates::{format_dashed, format_slashed, parse_time};

pub const REGULARIZED_HEADER: [&str; 2] = ["Time", "Tide_m"];
pub const AUGMENTED_HEADER: [&str; 4] = ["Time", "Tide_m", "Hindcast", "Tide_m_filled"];

/// How the `Time` column is rendered.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TimeFormat {
    /// `YYYY-MM-DD HH:MM`
    Dashed,
    /// `YYYY/MM/DD HH:MM`
    Slashed,
}

impl TimeFormat {
    pub fn format(&self, time: &NaiveDateTime) -> String {
        match self {
            TimeFormat::Dashed => format_dashed(time),
            TimeFormat::Slashed => format_slashed(time),
        }
    }
}

/// How a missing value is rendered.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MissingToken {
    /// An empty field.
    Empty,
    /// The literal text `NaN`, expected by the legacy regularized artifact.
    NaN,
}

impl MissingToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingToken::Empty => "",
            MissingToken::NaN => "NaN",
        }
    }
}

/// Layout of one output file.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SinkOptions {
    pub delimiter: u8,
    pub has_headers: bool,
    pub time_format: TimeFormat,
    pub missing: MissingToken,
}

impl SinkOptions {
    /// `TideClean.csv`: comma separated, no header.
    pub fn regularized_csv() -> Self {
        SinkOptions {
            delimiter: b',',
            has_headers: false,
            time_format: TimeFormat::Slashed,
            missing: MissingToken::NaN,
        }
    }

    /// `TideClean.txt`: tab separated, with header.
    pub fn regularized_txt() -> Self {
        SinkOptions {
            delimiter: b'\t',
            has_headers: true,
            ..SinkOptions::regularized_csv()
        }
    }

    /// `TideResult.csv`: comma separated, with header.
    pub fn augmented_csv() -> Self {
        SinkOptions {
            delimiter: b',',
            has_headers: true,
            time_format: TimeFormat::Dashed,
            missing: MissingToken::Empty,
        }
    }
}

/// Render a value the way the downstream spreadsheets expect: whole numbers
/// keep one decimal place (`1.0`), everything else uses the shortest exact
/// representation.
pub fn format_value(value: Option<f64>, missing: MissingToken) -> String {
    match value {
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.1}"),
        Some(v) if v.is_finite() => v.to_string(),
        _ => missing.as_str().to_string(),
    }
}

/// A series element that knows its output columns.
pub trait SeriesRow {
    const HEADER: &'static [&'static str];

    fn cells(&self, options: &SinkOptions) -> Vec<String>;
}

impl SeriesRow for Sample {
    const HEADER: &'static [&'static str] = &REGULARIZED_HEADER;

    fn cells(&self, options: &SinkOptions) -> Vec<String> {
        vec![
            options.time_format.format(&self.time),
            format_value(self.value, options.missing),
        ]
    }
}

impl SeriesRow for AugmentedSample {
    const HEADER: &'static [&'static str] = &AUGMENTED_HEADER;

    fn cells(&self, options: &SinkOptions) -> Vec<String> {
        vec![
            options.time_format.format(&self.time),
            format_value(self.original_value, options.missing),
            format_value(self.reference_value, options.missing),
            format_value(self.filled_value, options.missing),
        ]
    }
}

/// Write a whole series to `writer`.
pub fn write_series<W: Write, R: SeriesRow>(
    writer: W,
    rows: &[R],
    options: &SinkOptions,
) -> Result<(), TideError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(writer);
    if options.has_headers {
        wtr.write_record(R::HEADER)?;
    }
    for row in rows {
        wtr.write_record(row.cells(options))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a whole series to a file, replacing it if present.
pub fn write_series_to_path<R: SeriesRow>(
    path: &Path,
    rows: &[R],
    options: &SinkOptions,
) -> Result<(), TideError> {
    let file = File::create(path)?;
    write_series(file, rows, options)?;
    info!("Wrote {} records to {}", rows.len(), path.display());
    Ok(())
}

#[derive(Debug, Deserialize)]
struct RegularizedRow {
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Tide_m")]
    tide_m: String,
}

#[derive(Debug, Deserialize)]
struct AugmentedRow {
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Tide_m", deserialize_with = "csv::invalid_option")]
    tide_m: Option<f64>,
    #[serde(rename = "Hindcast", deserialize_with = "csv::invalid_option")]
    hindcast: Option<f64>,
    #[serde(rename = "Tide_m_filled", deserialize_with = "csv::invalid_option")]
    tide_m_filled: Option<f64>,
}

fn parse_row_time(row: usize, value: &str) -> Result<NaiveDateTime, TideError> {
    parse_time(value).map_err(|_| TideError::InvalidTime {
        row,
        value: value.to_string(),
    })
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn ensure_exists(path: &Path) -> Result<(), TideError> {
    if path.exists() {
        Ok(())
    } else {
        Err(TideError::MissingSource {
            path: path.to_path_buf(),
        })
    }
}

/// Parse the tab separated regularized artifact (`TideClean.txt`).
pub fn parse_regularized(text: &str) -> Result<Vec<Sample>, TideError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let mut samples = Vec::new();
    for (i, row) in rdr.deserialize::<RegularizedRow>().enumerate() {
        let row = row?;
        let time = parse_row_time(i + 1, &row.time)?;
        let value = finite(row.tide_m.parse::<f64>().ok());
        samples.push(Sample { time, value });
    }
    Ok(samples)
}

pub fn read_regularized(path: &Path) -> Result<Vec<Sample>, TideError> {
    ensure_exists(path)?;
    let text = std::fs::read_to_string(path)?;
    parse_regularized(&text)
}

/// Parse the augmented result (`TideResult.csv`).
pub fn parse_augmented(text: &str) -> Result<Vec<AugmentedSample>, TideError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let mut samples = Vec::new();
    for (i, row) in rdr.deserialize::<AugmentedRow>().enumerate() {
        let row = row?;
        samples.push(AugmentedSample {
            time: parse_row_time(i + 1, &row.time)?,
            original_value: finite(row.tide_m),
            reference_value: finite(row.hindcast),
            filled_value: finite(row.tide_m_filled),
        });
    }
    Ok(samples)
}

pub fn read_augmented(path: &Path) -> Result<Vec<AugmentedSample>, TideError> {
    ensure_exists(path)?;
    let text = std::fs::read_to_string(path)?;
    parse_augmented(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hour(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn render<R: SeriesRow>(rows: &[R], options: &SinkOptions) -> String {
        let mut buf = Vec::new();
        write_series(&mut buf, rows, options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn regularized() -> Vec<Sample> {
        vec![
            Sample { time: hour(0), value: Some(0.15) },
            Sample { time: hour(1), value: None },
            Sample { time: hour(2), value: Some(2.0) },
        ]
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(0.15), MissingToken::Empty), "0.15");
        assert_eq!(format_value(Some(1.0), MissingToken::Empty), "1.0");
        assert_eq!(format_value(Some(-0.0), MissingToken::Empty), "-0.0");
        assert_eq!(format_value(None, MissingToken::NaN), "NaN");
        assert_eq!(format_value(Some(f64::NAN), MissingToken::Empty), "");
    }

    #[test]
    fn test_regularized_csv_has_no_header_and_nan_token() {
        let out = render(&regularized(), &SinkOptions::regularized_csv());
        assert_eq!(
            out,
            "2016/01/01 00:00,0.15\n2016/01/01 01:00,NaN\n2016/01/01 02:00,2.0\n"
        );
    }

    #[test]
    fn test_regularized_txt_round_trips() {
        let out = render(&regularized(), &SinkOptions::regularized_txt());
        assert!(out.starts_with("Time\tTide_m\n2016/01/01 00:00\t0.15\n"));
        let back = parse_regularized(&out).unwrap();
        assert_eq!(back, regularized());
    }

    #[test]
    fn test_augmented_csv_uses_empty_missing_field() {
        let rows = vec![
            AugmentedSample::new(&regularized()[0], Some(9.0)),
            AugmentedSample::new(&regularized()[1], Some(8.0)),
            AugmentedSample::new(&regularized()[1], None),
        ];
        let out = render(&rows, &SinkOptions::augmented_csv());
        assert_eq!(
            out,
            "Time,Tide_m,Hindcast,Tide_m_filled\n\
             2016-01-01 00:00,0.15,9.0,0.15\n\
             2016-01-01 01:00,,8.0,8.0\n\
             2016-01-01 01:00,,,\n"
        );
        let back = parse_augmented(&out).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_parse_regularized_rejects_bad_time() {
        let text = "Time\tTide_m\n2016/01/01 00:00\t0.1\nyesterday\t0.2\n";
        match parse_regularized(text) {
            Err(TideError::InvalidTime { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected InvalidTime, got {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_artifacts() {
        let missing = Path::new("no/such/TideClean.txt");
        assert!(matches!(
            read_regularized(missing),
            Err(TideError::MissingSource { .. })
        ));
        assert!(matches!(
            read_augmented(missing),
            Err(TideError::MissingSource { .. })
        ));
    }
}
