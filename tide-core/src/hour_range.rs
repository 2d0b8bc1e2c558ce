use chrono::{NaiveDateTime, TimeDelta};
use std::mem::replace;

/// An hour range iterator that yields each hour from the start time
/// through the end time (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct HourRange(pub NaiveDateTime, pub NaiveDateTime);

impl HourRange {
    /// Number of hours the range will yield.
    pub fn len_hours(&self) -> usize {
        let hours = (self.1 - self.0).num_hours();
        if hours < 0 {
            0
        } else {
            hours as usize + 1
        }
    }
}

impl Iterator for HourRange {
    type Item = NaiveDateTime;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::hours(1);
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
