//! Date/time cell parsing for punch rows.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// What to do with a row whose date or time cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Drop the row and keep going.
    #[default]
    Lenient,
    /// Fail the whole run.
    Strict,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Lenient => "lenient",
            ParseMode::Strict => "strict",
        }
    }
}

const ISO_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

const DAY_FIRST_FORMATS: [&str; 9] = [
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%d/%b/%Y",
    "%d-%B-%Y",
    "%d/%B/%Y",
];

const SHORT_YEAR_FORMATS: [&str; 6] = [
    "%d-%m-%y",
    "%d/%m/%y",
    "%d.%m.%y",
    "%d %b %y",
    "%d-%b-%y",
    "%d/%b/%y",
];

/// Time part accepted after a date (validated, then ignored).
const TIME_PART_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

/// Parse a date cell, day first when the layout is ambiguous.
///
/// Supported:
/// - DD-MM-YYYY, DD/MM/YYYY, DD.MM.YYYY
/// - DD-MM-YY, DD/MM/YY, DD.MM.YY
/// - YYYY-MM-DD, YYYY/MM/DD, YYYY.MM.DD, YYYYMMDD
/// - DD Mon YYYY, DD-Mon-YYYY, DD/Mon/YYYY (full month names too, two digit years too)
/// - any of the above followed by `HH:MM[:SS]`, separated by a space or `T`
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if s.contains(':') {
        let (date, time) = split_date_time(s)?;
        TIME_PART_FORMATS
            .iter()
            .find_map(|f| NaiveTime::parse_from_str(time, f).ok())?;
        return parse_date_only(date);
    }

    parse_date_only(s)
}

/// Split `<date> <time>` or `<date>T<time>`.
fn split_date_time(s: &str) -> Option<(&str, &str)> {
    if let Some((date, time)) = s.rsplit_once(char::is_whitespace)
        && time.contains(':')
    {
        return Some((date.trim_end(), time));
    }

    let (date, time) = s.rsplit_once('T')?;
    time.contains(':').then_some((date, time))
}

fn parse_date_only(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();

    // compact YYYYMMDD
    if bytes.len() == 8 && bytes.iter().all(u8::is_ascii_digit) {
        let year = s[..4].parse().ok()?;
        let month = s[4..6].parse().ok()?;
        let day = s[6..].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    // %Y happily takes two digits as year 00xx, so pick the layout family first
    let leading_year = bytes.len() >= 5
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && matches!(bytes[4], b'-' | b'/' | b'.');

    let formats: &[&str] = if leading_year {
        &ISO_FORMATS
    } else {
        let year_digits = s
            .rsplit(['-', '/', '.', ' '])
            .next()
            .map(str::len)
            .unwrap_or(0);
        if year_digits == 2 {
            &SHORT_YEAR_FORMATS
        } else {
            &DAY_FIRST_FORMATS
        }
    };

    formats
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

/// Parse an HH:MM:SS time cell.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S").ok()
}
