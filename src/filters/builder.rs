//! Query builder for the advanced search form.
//!
//! Serializes structured filter state back into the query grammar accepted by
//! [`parse_query`](super::parser::parse_query), so a form and the search box
//! can be kept in sync. Range inputs are validated first; an invalid range is
//! reported in [`FormErrors`] and left out of the query while every other
//! field is still emitted.

use chrono::NaiveDate;
use thiserror::Error;

use super::ast::FieldKey;
use crate::models::{BrandType, LiveType};
use crate::utils::time::{format_date, format_seconds, parse_duration_input};

/// Why a range field was left out of the built query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid lower bound")]
    InvalidLowerBound,
    #[error("invalid upper bound")]
    InvalidUpperBound,
    #[error("lower bound exceeds upper bound")]
    LowerExceedsUpper,
    #[error("start date is after end date")]
    StartAfterEnd,
}

/// Per-field validation results of one build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub duration: Option<RangeError>,
    pub concert_date: Option<RangeError>,
    pub created: Option<RangeError>,
    pub updated: Option<RangeError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// `(field key, error)` pairs for every failed field
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, RangeError)> + '_ {
        [
            (FieldKey::Duration, self.duration),
            (FieldKey::Date, self.concert_date),
            (FieldKey::Created, self.created),
            (FieldKey::Updated, self.updated),
        ]
        .into_iter()
        .filter_map(|(key, error)| error.map(|e| (key, e)))
    }
}

/// Output of [`AdvancedSearchForm::build`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltQuery {
    pub query: String,
    pub errors: FormErrors,
}

/// Structured search state
///
/// Durations are raw user input (`mm:ss`, `hh:mm:ss`); blank means unset.
///
/// Values are not escaped. A value containing `"`, or a selection containing
/// `)` or ` OR `, produces a query that parses differently than entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvancedSearchForm {
    pub path: String,
    pub clip_name: String,
    pub song_title: String,
    pub concert_name: String,
    pub lyrics: String,
    pub remarks: String,
    pub min_duration: String,
    pub max_duration: String,
    pub concert_date_from: Option<NaiveDate>,
    pub concert_date_to: Option<NaiveDate>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
    pub updated_from: Option<NaiveDate>,
    pub updated_to: Option<NaiveDate>,
    pub brands: BrandType,
    pub live_types: Vec<LiveType>,
    /// Selected performer names, emitted in this order
    pub performers: Vec<String>,
}

impl AdvancedSearchForm {
    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the query string and collect range validation errors
    pub fn build(&self) -> BuiltQuery {
        let mut writer = QueryWriter::default();
        let mut errors = FormErrors::default();

        writer.text(FieldKey::Path, &self.path);
        writer.text(FieldKey::Clip, &self.clip_name);
        writer.text(FieldKey::Song, &self.song_title);
        writer.text(FieldKey::Concert, &self.concert_name);
        writer.text(FieldKey::Lyrics, &self.lyrics);
        writer.text(FieldKey::Remarks, &self.remarks);

        match duration_bounds(&self.min_duration, &self.max_duration) {
            Ok((min, max)) => writer.range(FieldKey::Duration, &min, &max),
            Err(e) => errors.duration = Some(e),
        }

        let dates = [
            (FieldKey::Date, self.concert_date_from, self.concert_date_to, &mut errors.concert_date),
            (FieldKey::Created, self.created_from, self.created_to, &mut errors.created),
            (FieldKey::Updated, self.updated_from, self.updated_to, &mut errors.updated),
        ];
        for (key, from, to, error) in dates {
            match date_bounds(from, to) {
                Ok((from, to)) => writer.range(key, &from, &to),
                Err(e) => *error = Some(e),
            }
        }

        writer.selection(FieldKey::Brands, self.brands.labels());
        writer.selection(
            FieldKey::Type,
            LiveType::ALL
                .into_iter()
                .filter(|t| self.live_types.contains(t))
                .map(LiveType::display_str),
        );
        writer.selection(FieldKey::Performers, self.performers.iter().map(String::as_str));

        BuiltQuery { query: writer.finish(), errors }
    }
}

/// Validate duration inputs into rendered second values (empty when unset)
fn duration_bounds(min: &str, max: &str) -> Result<(String, String), RangeError> {
    let min = parse_bound(min).ok_or(RangeError::InvalidLowerBound)?;
    let max = parse_bound(max).ok_or(RangeError::InvalidUpperBound)?;

    if matches!((min, max), (Some(min), Some(max)) if min > max) {
        return Err(RangeError::LowerExceedsUpper);
    }

    let render = |ms: Option<u64>| ms.map(format_seconds).unwrap_or_default();
    Ok((render(min), render(max)))
}

/// `Some(None)` for blank input, `None` for invalid input
fn parse_bound(input: &str) -> Option<Option<u64>> {
    if input.trim().is_empty() {
        return Some(None);
    }
    parse_duration_input(input).map(Some)
}

fn date_bounds(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<(String, String), RangeError> {
    if matches!((from, to), (Some(from), Some(to)) if from > to) {
        return Err(RangeError::StartAfterEnd);
    }
    let render = |d: Option<NaiveDate>| d.map(format_date).unwrap_or_default();
    Ok((render(from), render(to)))
}

/// Accumulates `?key:value` tokens separated by single spaces
#[derive(Default)]
struct QueryWriter {
    tokens: Vec<String>,
}

impl QueryWriter {
    /// Free text, quoted when it contains a space or would read as a group;
    /// blank values are skipped
    fn text(&mut self, key: FieldKey, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        let token = if value.contains(' ') || value.starts_with('(') {
            format!("?{}:\"{}\"", key.keyword(), value)
        } else {
            format!("?{}:{}", key.keyword(), value)
        };
        self.tokens.push(token);
    }

    /// `min-max`, emitted when at least one side is set
    fn range(&mut self, key: FieldKey, min: &str, max: &str) {
        if min.is_empty() && max.is_empty() {
            return;
        }
        self.tokens.push(format!("?{}:{}-{}", key.keyword(), min, max));
    }

    /// Keyed OR-group of quoted values, even for a single value
    fn selection<'a>(&mut self, key: FieldKey, values: impl Iterator<Item = &'a str>) {
        let quoted: Vec<String> = values.map(|v| format!("\"{}\"", v)).collect();
        if quoted.is_empty() {
            return;
        }
        self.tokens.push(format!("?{}:({})", key.keyword(), quoted.join(" OR ")));
    }

    fn finish(self) -> String {
        self.tokens.join(" ")
    }
}
