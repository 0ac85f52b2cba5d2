// src/export/excel_date.rs

use chrono::{NaiveTime, Timelike};

/// A cell holding exactly one HH:MM:SS value becomes an Excel time
/// (fraction of a day) plus its number format.
pub(crate) fn parse_to_excel_time(s: &str) -> Option<(&'static str, f64)> {
    let t = NaiveTime::parse_from_str(s.trim(), "%H:%M:%S").ok()?;
    let seconds = t.num_seconds_from_midnight() as f64;
    Some(("hh:mm:ss", seconds / 86400.0))
}
