//! Console reports printed after each stage.
//!
//! Everything here is rendered to a `String` first so the layout can be
//! tested; the `print_*` functions only write it to stdout.

use std::path::Path;
use tide_core::export::TimeFormat;
use tide_core::sample::{AugmentedSample, Sample};
use tide_data::describe::{AugmentedSummary, ColumnSummary};
use tide_data::gap_fill::FillOutcome;
use tide_data::regularize::RegularizeReport;

/// Rows shown in head/tail previews.
pub const PREVIEW_ROWS: usize = 10;

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("NaN"), |v| format!("{v:.3}"))
}

/// Indices of the first and last `n` rows; overlapping ranges are merged.
fn head_tail(len: usize, n: usize) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
    let head = 0..len.min(n);
    let tail = len.saturating_sub(n).max(head.end)..len;
    (head, tail)
}

pub fn render_samples(samples: &[Sample]) -> String {
    let mut out = format!("{:<18}{:>10}\n", "Time", "Tide_m");
    for sample in samples {
        out.push_str(&format!(
            "{:<18}{:>10}\n",
            TimeFormat::Slashed.format(&sample.time),
            cell(sample.value)
        ));
    }
    out
}

pub fn render_augmented(rows: &[AugmentedSample]) -> String {
    let mut out = format!(
        "{:<18}{:>10}{:>10}{:>15}\n",
        "Time", "Tide_m", "Hindcast", "Tide_m_filled"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<18}{:>10}{:>10}{:>15}\n",
            TimeFormat::Dashed.format(&row.time),
            cell(row.original_value),
            cell(row.reference_value),
            cell(row.filled_value)
        ));
    }
    out
}

pub fn render_clean_summary(
    samples: &[Sample],
    report: &RegularizeReport,
    output: &Path,
) -> String {
    let mut out = format!(
        "Processing complete. {} hourly tide records saved to {}\n",
        samples.len(),
        output.display()
    );
    out.push_str(&format!(
        "Number of valid tide measurements: {}\n",
        report.valid_values
    ));
    out.push_str(&format!(
        "Number of missing timestamps filled with NaN: {}\n",
        report.missing_values
    ));
    if report.dropped_records > 0 {
        out.push_str(&format!(
            "Raw records dropped for undecodable timestamps: {}\n",
            report.dropped_records
        ));
    }
    let (head, tail) = head_tail(samples.len(), PREVIEW_ROWS);
    out.push_str(&format!("\nFirst {} rows of processed data:\n", head.len()));
    out.push_str(&render_samples(&samples[head]));
    if !tail.is_empty() {
        out.push_str(&format!("\nLast {} rows of processed data:\n", tail.len()));
        out.push_str(&render_samples(&samples[tail]));
    }
    out
}

pub fn render_fill_summary(outcome: &FillOutcome, output: &Path) -> String {
    let stats = &outcome.stats;
    let mut out = String::from("\nData filling summary:\n");
    out.push_str(&format!(
        "Original missing values: {}\n",
        stats.original_missing_count
    ));
    out.push_str(&format!(
        "Values filled with Hindcast: {}\n",
        stats.filled_count
    ));
    out.push_str(&format!(
        "Remaining missing values: {}\n",
        stats.final_missing_count
    ));
    out.push_str(&format!(
        "\nResults saved to {} with {} records\n",
        output.display(),
        outcome.augmented.len()
    ));
    let examples: Vec<AugmentedSample> = outcome
        .augmented
        .iter()
        .filter(|a| a.original_value.is_none())
        .take(PREVIEW_ROWS)
        .copied()
        .collect();
    if !examples.is_empty() {
        out.push_str(&format!(
            "\nFirst {} examples of filled missing values:\n",
            examples.len()
        ));
        out.push_str(&render_augmented(&examples));
    }
    out
}

fn stat_row(
    label: &str,
    pick: impl Fn(&ColumnSummary) -> String,
    summary: &AugmentedSummary,
) -> String {
    format!(
        "{:<8}{:>15}{:>15}{:>15}\n",
        label,
        pick(&summary.tide_m),
        pick(&summary.hindcast),
        pick(&summary.tide_m_filled)
    )
}

fn stat(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("NaN"), |v| format!("{v:.6}"))
}

pub fn render_analysis(result: &Path, summary: &AugmentedSummary) -> String {
    let mut out = format!("\n{} Analysis:\n", result.display());
    out.push_str(&format!("{}\n", "=".repeat(50)));
    out.push_str(&format!("Total records: {}\n", summary.records));
    if let (Some(first), Some(last)) = (summary.first_time, summary.last_time) {
        out.push_str(&format!("Date range: {} to {}\n", first, last));
    }

    out.push_str("\nColumn statistics:\n");
    out.push_str(&format!(
        "{:<8}{:>15}{:>15}{:>15}\n",
        "", "Tide_m", "Hindcast", "Tide_m_filled"
    ));
    out.push_str(&stat_row("count", |c| c.count.to_string(), summary));
    out.push_str(&stat_row("mean", |c| stat(c.mean), summary));
    out.push_str(&stat_row("std", |c| stat(c.std), summary));
    out.push_str(&stat_row("min", |c| stat(c.min), summary));
    out.push_str(&stat_row("25%", |c| stat(c.p25), summary));
    out.push_str(&stat_row("50%", |c| stat(c.median), summary));
    out.push_str(&stat_row("75%", |c| stat(c.p75), summary));
    out.push_str(&stat_row("max", |c| stat(c.max), summary));

    out.push_str("\nMissing values by column:\n");
    out.push_str(&format!("Tide_m: {}\n", summary.tide_m.missing));
    out.push_str(&format!("Hindcast: {}\n", summary.hindcast.missing));
    out.push_str(&format!("Tide_m_filled: {}\n", summary.tide_m_filled.missing));
    out
}

pub fn print_clean_summary(samples: &[Sample], report: &RegularizeReport, output: &Path) {
    print!("{}", render_clean_summary(samples, report, output));
}

pub fn print_fill_summary(outcome: &FillOutcome, output: &Path) {
    print!("{}", render_fill_summary(outcome, output));
}

pub fn print_analysis(result: &Path, summary: &AugmentedSummary) {
    print!("{}", render_analysis(result, summary));
}
