//! Core types for tide gauge series: raw and regularized samples, timestamp
//! code decoding, the error taxonomy, and the tabular readers and writers
//! at the I/O boundary.

pub mod error;
pub mod export;
pub mod hindcast;
pub mod hour_range;
pub mod sample;
pub mod station_export;
pub mod timestamp;
