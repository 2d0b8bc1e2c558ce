//! `fill`: backfill the regularized series from the hindcast.

use crate::report;
use anyhow::Context;
use std::path::Path;
use tide_core::export::{read_regularized, write_series_to_path, SinkOptions};
use tide_core::hindcast::read_hindcast;
use tide_data::gap_fill::{fill, FillStats};

pub fn run_fill(
    regularized: &Path,
    hindcast: &Path,
    hindcast_column: &str,
    output: &Path,
) -> anyhow::Result<FillStats> {
    let primary = read_regularized(regularized)
        .with_context(|| format!("fill stage: reading {}", regularized.display()))?;
    println!(
        "{} loaded: {} records ({} missing)",
        regularized.display(),
        primary.len(),
        primary.iter().filter(|s| s.is_missing()).count()
    );
    let reference = read_hindcast(hindcast, hindcast_column)
        .with_context(|| format!("fill stage: reading {}", hindcast.display()))?;
    println!("Hindcast data loaded: {} records", reference.len());

    let outcome = fill(&primary, &reference);
    write_series_to_path(output, &outcome.augmented, &SinkOptions::augmented_csv())
        .with_context(|| format!("fill stage: writing {}", output.display()))?;

    report::print_fill_summary(&outcome, output);
    Ok(outcome.stats)
}
