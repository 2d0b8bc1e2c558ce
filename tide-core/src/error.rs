use std::path::PathBuf;

/// Why a single raw timestamp code could not be decoded.
///
/// These never reach the caller of the regularizer: the offending record is
/// dropped and the failure is logged.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum DecodeError {
    #[error("timestamp code '{0}' is not exactly 10 digits")]
    WrongLength(String),
    #[error("timestamp code '{0}' is not numeric")]
    NonNumeric(String),
    #[error("timestamp code '{0}' does not name a calendar hour")]
    InvalidCalendar(String),
}

/// Stage-level failures surfaced to the caller.
#[derive(Debug, thiserror::Error)]
pub enum TideError {
    #[error("no decodable timestamps in raw input")]
    EmptyInput,
    #[error("input not found: {}", path.display())]
    MissingSource { path: PathBuf },
    #[error("column '{column}' not found in header")]
    MissingColumn { column: String },
    #[error("invalid time '{value}' on data row {row}")]
    InvalidTime { row: usize, value: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
