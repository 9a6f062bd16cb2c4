//! Range expressions shared by every range-typed field.
//!
//! Both parsers accept `V`, `V-`, `-V` and `V1-V2`, splitting on the first
//! `-`. Parsing is lenient: an unparseable side of a range is simply left
//! open, while an unparseable exact value matches nothing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::utils::time::parse_calendar_date;

/// Tolerance for exact numeric matches (`?duration:90` matches 89.6..90.4)
pub const EXACT_TOLERANCE: f64 = 0.5;

/// Compiled numeric range over an `f64` field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericRange {
    /// Within [`EXACT_TOLERANCE`] of the value
    Exact(f64),
    /// Inclusive bounds, either side may be open
    Bounded { min: Option<f64>, max: Option<f64> },
    /// Exact value that failed to parse
    Invalid,
}

impl NumericRange {
    pub fn parse(input: &str) -> Self {
        match input.split_once('-') {
            None => parse_number(input).map_or(NumericRange::Invalid, NumericRange::Exact),
            Some((min, max)) => {
                NumericRange::Bounded { min: parse_number(min), max: parse_number(max) }
            }
        }
    }

    /// Test a field value; `None` means the field has no value
    pub fn contains(&self, value: Option<f64>) -> bool {
        match *self {
            NumericRange::Invalid => false,
            NumericRange::Exact(exact) => {
                value.is_some_and(|v| (v - exact).abs() < EXACT_TOLERANCE)
            }
            NumericRange::Bounded { min: None, max: None } => true,
            NumericRange::Bounded { min, max } => value.is_some_and(|v| {
                min.is_none_or(|min| v >= min) && max.is_none_or(|max| v <= max)
            }),
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Compiled date range over a nullable date-time field
///
/// Lower bounds sit at the start of their day and upper bounds at the last
/// representable instant of theirs, so whole days are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Bounded { start: Option<NaiveDateTime>, end: Option<NaiveDateTime> },
    /// Single date that failed to parse
    Invalid,
}

impl DateRange {
    pub fn parse(input: &str) -> Self {
        match input.split_once('-') {
            None => match parse_calendar_date(input) {
                Some(day) => DateRange::Bounded {
                    start: Some(start_of_day(day)),
                    end: Some(end_of_day(day)),
                },
                None => DateRange::Invalid,
            },
            Some((start, end)) => DateRange::Bounded {
                start: parse_calendar_date(start).map(start_of_day),
                end: parse_calendar_date(end).map(end_of_day),
            },
        }
    }

    /// Test a field value; clips without a value never match
    pub fn contains(&self, value: Option<NaiveDateTime>) -> bool {
        match *self {
            DateRange::Invalid => false,
            DateRange::Bounded { start, end } => value.is_some_and(|v| {
                start.is_none_or(|start| v >= start) && end.is_none_or(|end| v <= end)
            }),
        }
    }
}

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// One nanosecond before the next midnight, saturating on the last representable day
fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    day.succ_opt()
        .and_then(|next| start_of_day(next).checked_sub_signed(TimeDelta::nanoseconds(1)))
        .unwrap_or(NaiveDateTime::MAX)
}
