//! Gap filling of the regularized series from a positionally aligned
//! hindcast.
//!
//! Row `i` of the hindcast is paired with hour `i` of the regularized series.
//! No timestamps are compared: both series are assumed to start at the same
//! hour and advance at the same cadence.

use log::{debug, info, warn};
use serde::Serialize;
use tide_core::sample::{AugmentedSample, ReferenceSample, Sample};

/// Missing-value counts before and after filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FillStats {
    pub original_missing_count: usize,
    /// `original_missing_count - final_missing_count`
    pub filled_count: usize,
    pub final_missing_count: usize,
}

impl FillStats {
    pub fn from_series(augmented: &[AugmentedSample]) -> Self {
        let original_missing_count = augmented
            .iter()
            .filter(|s| s.original_value.is_none())
            .count();
        let final_missing_count = augmented
            .iter()
            .filter(|s| s.filled_value.is_none())
            .count();
        FillStats {
            original_missing_count,
            filled_count: original_missing_count - final_missing_count,
            final_missing_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FillOutcome {
    pub augmented: Vec<AugmentedSample>,
    pub stats: FillStats,
}

/// Fill missing primary values from the reference series, by position.
///
/// A reference shorter than the primary leaves the trailing hours without a
/// reference value; surplus reference rows are ignored. An empty primary
/// gives an empty outcome.
pub fn fill(primary: &[Sample], reference: &[ReferenceSample]) -> FillOutcome {
    if reference.len() < primary.len() {
        warn!(
            "Hindcast has {} rows for {} hours; the last {} hours have no reference value",
            reference.len(),
            primary.len(),
            primary.len() - reference.len()
        );
    } else if reference.len() > primary.len() {
        debug!(
            "Ignoring {} surplus hindcast rows",
            reference.len() - primary.len()
        );
    }

    let augmented: Vec<AugmentedSample> = primary
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let reference_value = reference.get(i).and_then(|r| r.value);
            AugmentedSample::new(sample, reference_value)
        })
        .collect();
    let stats = FillStats::from_series(&augmented);
    info!(
        "Filled {} of {} missing values ({} remain)",
        stats.filled_count, stats.original_missing_count, stats.final_missing_count
    );
    FillOutcome { augmented, stats }
}
