//! Command implementations for the tide CLI.
//!
//! Provides subcommands for regularizing a station export, filling its gaps
//! from a hindcast, and analyzing the filled result.

use clap::{Args, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use tide_core::station_export::StationExportLayout;

pub mod analyze;
pub mod clean;
pub mod fill;
pub mod report;

pub const CLEAN_CSV: &str = "TideClean.csv";
pub const CLEAN_TXT: &str = "TideClean.txt";
pub const HINDCAST_TXT: &str = "Observation and Hindcast.txt";
pub const RESULT_CSV: &str = "TideResult.csv";

/// Column layout of the raw station export.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Free-text lines before the header row
    #[arg(long, default_value_t = 20)]
    skip_rows: usize,

    /// Header of the YYYYMMDDHH timestamp column
    #[arg(long, default_value = "yyyymmddhh")]
    timestamp_column: String,

    /// Header of the on-the-hour reading column (millimetres)
    #[arg(long, default_value = ":00")]
    value_column: String,
}

impl From<LayoutArgs> for StationExportLayout {
    fn from(args: LayoutArgs) -> Self {
        StationExportLayout {
            skip_rows: args.skip_rows,
            timestamp_column: args.timestamp_column,
            value_column: args.value_column,
            ..StationExportLayout::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Regularize a raw station export onto a gapless hourly timeline
    Clean {
        /// Raw station export CSV
        #[arg(short = 'i', long)]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Comma separated output without header
        #[arg(long, default_value = CLEAN_CSV)]
        csv_output: PathBuf,

        /// Tab separated output with header, read by `fill`
        #[arg(long, default_value = CLEAN_TXT)]
        txt_output: PathBuf,
    },

    /// Fill missing tide values from a positionally aligned hindcast
    Fill {
        /// Tab separated regularized series
        #[arg(short = 'r', long, default_value = CLEAN_TXT)]
        regularized: PathBuf,

        /// Whitespace separated hindcast table
        #[arg(long, default_value = HINDCAST_TXT)]
        hindcast: PathBuf,

        /// Header of the hindcast column
        #[arg(long, default_value = tide_core::hindcast::HINDCAST_COLUMN)]
        hindcast_column: String,

        /// Augmented output CSV
        #[arg(short = 'o', long, default_value = RESULT_CSV)]
        output: PathBuf,
    },

    /// Summarize a filled result
    Analyze {
        #[arg(long, default_value = RESULT_CSV)]
        result: PathBuf,
    },

    /// Clean, fill and analyze in one go, writing every artifact to one directory
    Run {
        /// Raw station export CSV
        #[arg(short = 'i', long)]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Whitespace separated hindcast table
        #[arg(long, default_value = HINDCAST_TXT)]
        hindcast: PathBuf,

        /// Header of the hindcast column
        #[arg(long, default_value = tide_core::hindcast::HINDCAST_COLUMN)]
        hindcast_column: String,

        /// Directory for TideClean.csv, TideClean.txt and TideResult.csv
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

/// Run every stage, writing the legacy artifact names under `output_dir`.
pub fn run_pipeline(
    input: &Path,
    layout: &StationExportLayout,
    hindcast: &Path,
    hindcast_column: &str,
    output_dir: &Path,
) -> anyhow::Result<()> {
    let clean_txt = output_dir.join(CLEAN_TXT);
    let result_csv = output_dir.join(RESULT_CSV);
    info!(
        "Running clean, fill and analyze on {} into {}",
        input.display(),
        output_dir.display()
    );
    clean::run_clean(input, layout, &output_dir.join(CLEAN_CSV), &clean_txt)?;
    fill::run_fill(&clean_txt, hindcast, hindcast_column, &result_csv)?;
    analyze::run_analyze(&result_csv)?;
    Ok(())
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Clean {
            input,
            layout,
            csv_output,
            txt_output,
        } => {
            clean::run_clean(&input, &layout.into(), &csv_output, &txt_output)?;
            Ok(())
        }
        Command::Fill {
            regularized,
            hindcast,
            hindcast_column,
            output,
        } => {
            fill::run_fill(&regularized, &hindcast, &hindcast_column, &output)?;
            Ok(())
        }
        Command::Analyze { result } => {
            analyze::run_analyze(&result)?;
            Ok(())
        }
        Command::Run {
            input,
            layout,
            hindcast,
            hindcast_column,
            output_dir,
        } => run_pipeline(
            &input,
            &layout.into(),
            &hindcast,
            &hindcast_column,
            &output_dir,
        ),
    }
}
