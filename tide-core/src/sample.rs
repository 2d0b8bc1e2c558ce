use crate::timestamp::TimestampCode;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Millimetres per metre; station exports report tide height in mm.
pub const MILLIMETERS_PER_METER: f64 = 1000.0;

/// A raw tide reading as it came out of the station export.
/// - `Number(f64)`: already numeric, in millimetres
/// - `Text(String)`: an unparsed cell, possibly a status code or garbage
/// - `Missing`: the cell was absent
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum RawReading {
    Number(f64),
    Text(String),
    Missing,
}

impl RawReading {
    /// The reading in meters, or `None` when it is not a finite number.
    pub fn to_meters(&self) -> Option<f64> {
        let millimeters = match self {
            RawReading::Number(n) => *n,
            RawReading::Text(s) => s.trim().parse::<f64>().ok()?,
            RawReading::Missing => return None,
        };
        millimeters
            .is_finite()
            .then(|| millimeters / MILLIMETERS_PER_METER)
    }
}

impl From<f64> for RawReading {
    fn from(value: f64) -> Self {
        RawReading::Number(value)
    }
}

impl From<Option<f64>> for RawReading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(RawReading::Missing, RawReading::Number)
    }
}

impl From<&str> for RawReading {
    fn from(value: &str) -> Self {
        RawReading::Text(value.to_string())
    }
}

/// One station-reported measurement at a possibly irregular time.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RawSample {
    pub timestamp_code: TimestampCode,
    pub raw_value: RawReading,
}

impl RawSample {
    pub fn new(timestamp_code: impl Into<TimestampCode>, raw_value: impl Into<RawReading>) -> Self {
        RawSample {
            timestamp_code: timestamp_code.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// One hour slot of the regularized timeline; `value` is in meters.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Sample {
    pub time: NaiveDateTime,
    pub value: Option<f64>,
}

impl Sample {
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// One row of the hindcast series. Carries no trusted timestamp.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ReferenceSample {
    pub value: Option<f64>,
}

impl From<f64> for ReferenceSample {
    fn from(value: f64) -> Self {
        ReferenceSample { value: Some(value) }
    }
}

/// A regularized sample with its hindcast partner and the substituted value.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct AugmentedSample {
    pub time: NaiveDateTime,
    pub original_value: Option<f64>,
    pub reference_value: Option<f64>,
    pub filled_value: Option<f64>,
}

impl AugmentedSample {
    /// Pair a sample with its reference value; the original wins when present.
    pub fn new(sample: &Sample, reference_value: Option<f64>) -> Self {
        AugmentedSample {
            time: sample.time,
            original_value: sample.value,
            reference_value,
            filled_value: sample.value.or(reference_value),
        }
    }

    /// True when the original was missing and the hindcast supplied a value.
    pub fn was_filled(&self) -> bool {
        self.original_value.is_none() && self.filled_value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_raw_reading_to_meters() {
        assert_eq!(RawReading::from(150.0).to_meters(), Some(0.15));
        assert_eq!(RawReading::from(" 2000 ").to_meters(), Some(2.0));
        assert_eq!(RawReading::from("0").to_meters(), Some(0.0));
        assert_eq!(RawReading::from("---").to_meters(), None);
        assert_eq!(RawReading::from("NaN").to_meters(), None);
        assert_eq!(RawReading::from(f64::INFINITY).to_meters(), None);
        assert_eq!(RawReading::from(None).to_meters(), None);
    }

    #[test]
    fn test_augmented_sample_prefers_original() {
        let time = NaiveDate::from_ymd_opt(2016, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let present = Sample { time, value: Some(0.0) };
        let missing = Sample { time, value: None };

        let kept = AugmentedSample::new(&present, Some(9.0));
        assert_eq!(kept.filled_value, Some(0.0));
        assert!(!kept.was_filled());

        let filled = AugmentedSample::new(&missing, Some(9.0));
        assert_eq!(filled.filled_value, Some(9.0));
        assert!(filled.was_filled());

        let still_missing = AugmentedSample::new(&missing, None);
        assert_eq!(still_missing.filled_value, None);
        assert!(!still_missing.was_filled());
    }
}
