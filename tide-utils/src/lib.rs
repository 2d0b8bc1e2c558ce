//! Shared utility functions for tide crates.

/// Time utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDateTime, NaiveTime, TimeDelta};

    /// Time format used for the augmented result: "YYYY-MM-DD HH:MM"
    pub const DASHED_FORMAT: &str = "%Y-%m-%d %H:%M";

    /// Time format used for the regularized intermediate artifact: "YYYY/MM/DD HH:MM"
    pub const SLASHED_FORMAT: &str = "%Y/%m/%d %H:%M";

    /// Formats accepted when reading a time column back in.
    const ACCEPTED_FORMATS: [&str; 4] = [
        SLASHED_FORMAT,
        DASHED_FORMAT,
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
    ];

    /// Format a NaiveDateTime as "YYYY-MM-DD HH:MM"
    pub fn format_dashed(time: &NaiveDateTime) -> String {
        time.format(DASHED_FORMAT).to_string()
    }

    /// Format a NaiveDateTime as "YYYY/MM/DD HH:MM"
    pub fn format_slashed(time: &NaiveDateTime) -> String {
        time.format(SLASHED_FORMAT).to_string()
    }

    /// Parse a time string written in either the slashed or the dashed layout,
    /// with or without seconds.
    pub fn parse_time(s: &str) -> anyhow::Result<NaiveDateTime> {
        let trimmed = s.trim();
        for format in ACCEPTED_FORMATS {
            if let Ok(time) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(time);
            }
        }
        anyhow::bail!("unrecognized time '{}'", trimmed)
    }

    /// January 1st, 00:00 of the year `time` falls in.
    pub fn start_of_year(time: &NaiveDateTime) -> NaiveDateTime {
        let jan_first = time.date() - TimeDelta::days(i64::from(time.ordinal0()));
        jan_first.and_time(NaiveTime::MIN)
    }

    /// Whole hours from `start` to `end`; negative when `end` precedes `start`.
    pub fn hours_between(start: &NaiveDateTime, end: &NaiveDateTime) -> i64 {
        (*end - *start).num_hours()
    }

}
