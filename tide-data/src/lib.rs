//! Data processing for tide gauge series.
//!
//! This crate turns raw station samples into a regular hourly timeline,
//! backfills its gaps from a hindcast, and summarizes the result.

pub mod describe;
pub mod gap_fill;
pub mod regularize;
