use crate::error::DecodeError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Number of digits in a `YYYYMMDDHH` timestamp code.
pub const CODE_LENGTH: usize = 10;

/// An hourly timestamp encoded as `YYYYMMDDHH`, either already numeric or
/// still in the text form read from a station export.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum TimestampCode {
    Integer(i64),
    Text(String),
}

impl TimestampCode {
    /// The integer digits of the code.
    ///
    /// Text holding a float artifact such as `"2016010100.0"` is truncated to
    /// its integer part first, the same way a spreadsheet export would have
    /// written it.
    pub fn digits(&self) -> Result<String, DecodeError> {
        match self {
            TimestampCode::Integer(n) => Ok(n.to_string()),
            TimestampCode::Text(s) => {
                let trimmed = s.trim();
                if let Ok(n) = trimmed.parse::<i64>() {
                    return Ok(n.to_string());
                }
                match trimmed.parse::<f64>() {
                    Ok(f) if f.is_finite() => Ok((f.trunc() as i64).to_string()),
                    _ => Err(DecodeError::NonNumeric(trimmed.to_string())),
                }
            }
        }
    }

    /// Decode into the hour it names.
    pub fn decode(&self) -> Result<NaiveDateTime, DecodeError> {
        let digits = self.digits()?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::NonNumeric(digits));
        }
        if digits.len() != CODE_LENGTH {
            return Err(DecodeError::WrongLength(digits));
        }
        let field = |range: std::ops::Range<usize>| digits[range].parse::<u32>().ok();
        let parts = (field(0..4), field(4..6), field(6..8), field(8..10));
        let (Some(year), Some(month), Some(day), Some(hour)) = parts else {
            return Err(DecodeError::NonNumeric(digits));
        };
        NaiveDate::from_ymd_opt(year as i32, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .ok_or(DecodeError::InvalidCalendar(digits))
    }
}

impl From<i64> for TimestampCode {
    fn from(value: i64) -> Self {
        TimestampCode::Integer(value)
    }
}

impl From<&str> for TimestampCode {
    fn from(value: &str) -> Self {
        TimestampCode::Text(value.to_string())
    }
}

impl From<String> for TimestampCode {
    fn from(value: String) -> Self {
        TimestampCode::Text(value)
    }
}
