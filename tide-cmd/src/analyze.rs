//! `analyze`: describe a filled result.

use crate::report;
use anyhow::Context;
use std::path::Path;
use tide_core::export::read_augmented;
use tide_data::describe::AugmentedSummary;

pub fn run_analyze(result: &Path) -> anyhow::Result<AugmentedSummary> {
    let augmented = read_augmented(result)
        .with_context(|| format!("analyze stage: reading {}", result.display()))?;
    let summary = AugmentedSummary::from_series(&augmented);
    report::print_analysis(result, &summary);
    Ok(summary)
}
