//! Timeline regularization: irregular raw samples onto a gapless hourly grid.

use chrono::NaiveDateTime;
use log::{debug, info};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use tide_core::error::TideError;
use tide_core::hour_range::HourRange;
use tide_core::sample::{RawSample, Sample};
use tide_utils::dates::start_of_year;

/// Bookkeeping from one regularization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RegularizeReport {
    pub raw_records: usize,
    /// Records whose timestamp code did not decode.
    pub dropped_records: usize,
    /// Records that landed on an hour already taken by another record.
    pub duplicate_hours: usize,
    pub timeline_hours: usize,
    pub valid_values: usize,
    pub missing_values: usize,
}

/// Missing sorts first, present values by `total_cmp`.
fn compare_values(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.total_cmp(&y),
    }
}

/// Place raw samples on an hourly grid running from January 1st 00:00 of the
/// earliest decodable year through the latest decodable hour.
///
/// Records with undecodable timestamps are dropped; records with unreadable
/// values keep their hour with a missing value. When several records share
/// an hour the one sorting last by `(hour, value)` wins, so a present value
/// beats a missing one and the larger of two readings is kept. The result
/// does not depend on input order.
pub fn regularize(raw_samples: &[RawSample]) -> Result<Vec<Sample>, TideError> {
    regularize_with_report(raw_samples).map(|(samples, _)| samples)
}

/// [`regularize`], also returning counts for the console summary.
pub fn regularize_with_report(
    raw_samples: &[RawSample],
) -> Result<(Vec<Sample>, RegularizeReport), TideError> {
    let mut report = RegularizeReport {
        raw_records: raw_samples.len(),
        ..RegularizeReport::default()
    };

    let mut decoded: Vec<(NaiveDateTime, Option<f64>)> = Vec::with_capacity(raw_samples.len());
    for raw in raw_samples {
        match raw.timestamp_code.decode() {
            Ok(time) => decoded.push((time, raw.raw_value.to_meters())),
            Err(e) => {
                debug!("Dropping raw record: {}", e);
                report.dropped_records += 1;
            }
        }
    }
    decoded.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| compare_values(a.1, b.1)));

    let (start, end) = match (decoded.first(), decoded.last()) {
        (Some(first), Some(last)) => (start_of_year(&first.0), last.0),
        _ => return Err(TideError::EmptyInput),
    };

    let mut by_hour: HashMap<NaiveDateTime, Option<f64>> = HashMap::with_capacity(decoded.len());
    for (time, value) in decoded {
        if by_hour.insert(time, value).is_some() {
            report.duplicate_hours += 1;
        }
    }

    let range = HourRange(start, end);
    let mut samples = Vec::with_capacity(range.len_hours());
    for time in range {
        let value = by_hour.get(&time).copied().flatten();
        samples.push(Sample { time, value });
    }

    report.timeline_hours = samples.len();
    report.missing_values = samples.iter().filter(|s| s.is_missing()).count();
    report.valid_values = report.timeline_hours - report.missing_values;
    info!(
        "Regularized {} raw records into {} hours, {} to {} ({} dropped, {} duplicate hours)",
        report.raw_records,
        report.timeline_hours,
        start,
        end,
        report.dropped_records,
        report.duplicate_hours
    );
    Ok((samples, report))
}
