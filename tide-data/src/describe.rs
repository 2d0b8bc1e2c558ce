//! Describe-style column statistics for the augmented result.

use chrono::NaiveDateTime;
use serde::Serialize;
use tide_core::sample::AugmentedSample;

/// Count, moments and quartiles of one column. Statistics are `None` when
/// the column has no values (and `std` also when it has only one).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ColumnSummary {
    pub count: usize,
    pub missing: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub median: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

pub fn describe<I: IntoIterator<Item = Option<f64>>>(values: I) -> ColumnSummary {
    let mut missing = 0;
    let mut present: Vec<f64> = Vec::new();
    for value in values {
        match value {
            Some(v) if v.is_finite() => present.push(v),
            _ => missing += 1,
        }
    }
    if present.is_empty() {
        return ColumnSummary {
            missing,
            ..ColumnSummary::default()
        };
    }
    present.sort_by(f64::total_cmp);

    let n = present.len() as f64;
    let mean = present.iter().sum::<f64>() / n;
    // sample standard deviation
    let std = (present.len() > 1).then(|| {
        let ss: f64 = present.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1.0)).sqrt()
    });

    ColumnSummary {
        count: present.len(),
        missing,
        mean: Some(mean),
        std,
        min: present.first().copied(),
        p25: Some(quantile(&present, 0.25)),
        median: Some(quantile(&present, 0.5)),
        p75: Some(quantile(&present, 0.75)),
        max: present.last().copied(),
    }
}

/// Overview of an augmented series: its extent and one summary per column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AugmentedSummary {
    pub records: usize,
    pub first_time: Option<NaiveDateTime>,
    pub last_time: Option<NaiveDateTime>,
    pub tide_m: ColumnSummary,
    pub hindcast: ColumnSummary,
    pub tide_m_filled: ColumnSummary,
}

impl AugmentedSummary {
    pub fn from_series(augmented: &[AugmentedSample]) -> Self {
        AugmentedSummary {
            records: augmented.len(),
            first_time: augmented.iter().map(|a| a.time).min(),
            last_time: augmented.iter().map(|a| a.time).max(),
            tide_m: describe(augmented.iter().map(|a| a.original_value)),
            hindcast: describe(augmented.iter().map(|a| a.reference_value)),
            tide_m_filled: describe(augmented.iter().map(|a| a.filled_value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_describe_matches_hand_computed_values() {
        let summary = describe(vec![Some(4.0), None, Some(1.0), Some(3.0), Some(2.0)]);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.missing, 1);
        assert!(close(summary.mean, 2.5));
        // sqrt(5 / 3)
        assert!(close(summary.std, 1.290_994_448_735_805_6));
        assert_eq!(summary.min, Some(1.0));
        assert!(close(summary.p25, 1.75));
        assert!(close(summary.median, 2.5));
        assert!(close(summary.p75, 3.25));
        assert_eq!(summary.max, Some(4.0));
    }

    #[test]
    fn test_describe_single_value_has_no_std() {
        let summary = describe(vec![Some(0.7)]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.std, None);
        assert_eq!(summary.median, Some(0.7));
    }

    #[test]
    fn test_describe_all_missing() {
        let summary = describe(vec![None, Some(f64::NAN)]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.missing, 2);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.max, None);
    }

    #[test]
    fn test_augmented_summary_of_empty_series() {
        let summary = AugmentedSummary::from_series(&[]);
        assert_eq!(summary.records, 0);
        assert_eq!(summary.first_time, None);
        assert_eq!(summary.tide_m.count, 0);
    }
}
