//! `clean`: raw station export to a regularized hourly series.

use crate::report;
use anyhow::Context;
use std::path::Path;
use tide_core::export::{write_series_to_path, SinkOptions};
use tide_core::station_export::{read_station_export, StationExportLayout};
use tide_data::regularize::{regularize_with_report, RegularizeReport};

/// Regularize `input` and write it both as `csv_output` (no header) and
/// `txt_output` (tab separated, with header).
pub fn run_clean(
    input: &Path,
    layout: &StationExportLayout,
    csv_output: &Path,
    txt_output: &Path,
) -> anyhow::Result<RegularizeReport> {
    let raw = read_station_export(input, layout)
        .with_context(|| format!("clean stage: reading {}", input.display()))?;
    let (samples, regularize_report) =
        regularize_with_report(&raw).context("clean stage: regularizing raw samples")?;

    write_series_to_path(csv_output, &samples, &SinkOptions::regularized_csv())
        .with_context(|| format!("clean stage: writing {}", csv_output.display()))?;
    write_series_to_path(txt_output, &samples, &SinkOptions::regularized_txt())
        .with_context(|| format!("clean stage: writing {}", txt_output.display()))?;

    report::print_clean_summary(&samples, &regularize_report, csv_output);
    Ok(regularize_report)
}
