//! Parsing and formatting of user-entered times and dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Date-only formats for catalog files and CLI arguments
///
/// Query ranges split on the first `-`, so only the forms without a hyphen
/// are usable inside `?date:` style values.
const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d", "%Y.%m.%d", "%Y年%m月%d日"];

/// Date-time formats for catalog files
const DATETIME_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a clip-duration input into milliseconds
///
/// Accepts `mm:ss` (both parts may be fractional), `[d.]hh:mm:ss[.fff]`, or a
/// bare integer number of days. Blank input is zero. Returns `None` for
/// anything else, including negative values.
pub fn parse_duration_input(input: &str) -> Option<u64> {
    let input = input.trim();
    if input.is_empty() {
        return Some(0);
    }

    match input.split_once(':') {
        Some((minutes, seconds)) if !seconds.contains(':') => {
            parse_minutes_seconds(minutes, seconds).or_else(|| parse_time_span(input))
        }
        _ => parse_time_span(input),
    }
}

/// `mm:ss` with fractional parts allowed on either side
fn parse_minutes_seconds(minutes: &str, seconds: &str) -> Option<u64> {
    let minutes = minutes.trim().parse::<f64>().ok()?;
    let seconds = seconds.trim().parse::<f64>().ok()?;
    let ms = minutes * MS_PER_MINUTE as f64 + seconds * MS_PER_SECOND as f64;
    (ms.is_finite() && ms >= 0.0).then_some(ms.round() as u64)
}

/// `[d.]hh:mm:ss[.fffffff]` or a bare day count
fn parse_time_span(input: &str) -> Option<u64> {
    if let Ok(days) = input.parse::<u64>() {
        return days.checked_mul(MS_PER_DAY);
    }

    let parts: Vec<&str> = input.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return None;
    };

    let (days, hours) = match hours.split_once('.') {
        Some((days, hours)) => (parse_digits(days)?, hours),
        None => (0, *hours),
    };
    let hours = parse_digits(hours).filter(|h| *h < 24)?;
    let minutes = parse_digits(minutes).filter(|m| *m < 60)?;

    let (seconds, fraction) = seconds.split_once('.').unwrap_or((seconds, ""));
    let seconds = parse_digits(seconds).filter(|s| *s < 60)?;
    let millis = parse_fraction_millis(fraction)?;

    days.checked_mul(MS_PER_DAY)?.checked_add(
        hours * MS_PER_HOUR + minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND + millis,
    )
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Milliseconds from up to seven fractional-second digits
fn parse_fraction_millis(fraction: &str) -> Option<u64> {
    if fraction.is_empty() {
        return Some(0);
    }
    if fraction.len() > 7 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let head = &fraction[..fraction.len().min(3)];
    format!("{:0<3}", head).parse().ok()
}

/// Format milliseconds as `hh:mm:ss`, hours not wrapped at a day
pub fn format_duration_ms(ms: u64) -> String {
    let total_secs = ms / MS_PER_SECOND;
    format!("{:02}:{:02}:{:02}", total_secs / 3600, (total_secs / 60) % 60, total_secs % 60)
}

/// Format milliseconds as seconds in shortest decimal form (`90`, `90.5`)
pub fn format_seconds(ms: u64) -> String {
    format!("{}", ms as f64 / MS_PER_SECOND as f64)
}

/// Parse a calendar date, discarding any time-of-day part
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .or_else(|| parse_local_datetime(input).map(|dt| dt.date()))
}

/// Parse a wall-clock date-time
///
/// RFC 3339 input keeps its own local time and drops the offset. Date-only
/// input resolves to midnight.
pub fn parse_local_datetime(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Format a calendar date as `yyyy/MM/dd`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}
