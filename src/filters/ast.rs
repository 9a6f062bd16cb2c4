use chrono::NaiveDateTime;

use super::global::GlobalMatch;
use super::range::{DateRange, NumericRange};
use crate::models::Clip;

/// Field keys accepted after `?` in a keyed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Path,
    Clip,
    Song,
    Concert,
    Lyrics,
    Remarks,
    /// Live type display string
    Type,
    /// Brand display string (`brand` is accepted as an alias)
    Brands,
    /// Performer name or reading (`performer` is accepted as an alias)
    Performers,
    /// Duration in seconds, numeric range
    Duration,
    /// Concert date, date range
    Date,
    Created,
    Updated,
}

impl FieldKey {
    /// Parse a key name without the leading `?` (case-insensitive)
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "path" => Some(FieldKey::Path),
            "clip" => Some(FieldKey::Clip),
            "song" => Some(FieldKey::Song),
            "concert" => Some(FieldKey::Concert),
            "lyrics" => Some(FieldKey::Lyrics),
            "remarks" => Some(FieldKey::Remarks),
            "type" => Some(FieldKey::Type),
            "brands" | "brand" => Some(FieldKey::Brands),
            "performers" | "performer" => Some(FieldKey::Performers),
            "duration" => Some(FieldKey::Duration),
            "date" => Some(FieldKey::Date),
            "created" => Some(FieldKey::Created),
            "updated" => Some(FieldKey::Updated),
            _ => None,
        }
    }

    /// Canonical key name as written in queries
    pub fn keyword(self) -> &'static str {
        match self {
            FieldKey::Path => "path",
            FieldKey::Clip => "clip",
            FieldKey::Song => "song",
            FieldKey::Concert => "concert",
            FieldKey::Lyrics => "lyrics",
            FieldKey::Remarks => "remarks",
            FieldKey::Type => "type",
            FieldKey::Brands => "brands",
            FieldKey::Performers => "performers",
            FieldKey::Duration => "duration",
            FieldKey::Date => "date",
            FieldKey::Created => "created",
            FieldKey::Updated => "updated",
        }
    }
}

/// Nullable free-text fields of a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FilePath,
    ClipName,
    SongTitle,
    ConcertName,
    Lyrics,
    Remarks,
}

impl TextField {
    pub fn get(self, clip: &Clip) -> Option<&str> {
        let value = match self {
            TextField::FilePath => &clip.file_path,
            TextField::ClipName => &clip.clip_name,
            TextField::SongTitle => &clip.song_title,
            TextField::ConcertName => &clip.concert_name,
            TextField::Lyrics => &clip.lyrics,
            TextField::Remarks => &clip.remarks,
        };
        value.as_deref()
    }
}

/// Nullable date/time fields of a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    ConcertDate,
    CreatedAt,
    UpdatedAt,
}

impl DateField {
    pub fn get(self, clip: &Clip) -> Option<NaiveDateTime> {
        match self {
            DateField::ConcertDate => clip.concert_date,
            DateField::CreatedAt => clip.created_at,
            DateField::UpdatedAt => clip.updated_at,
        }
    }
}

/// Compiled test for one keyed value
///
/// Needles are stored case-folded; matching folds the haystack the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPredicate {
    Text { field: TextField, needle: String },
    LiveType { needle: String },
    Brands { needle: String },
    Performers { needle: String },
    Duration(NumericRange),
    Date { field: DateField, range: DateRange },
    /// Unrecognized key, never matches
    Unknown,
}

/// Compiled query, evaluated per clip by [`Predicate::matches`]
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Field(FieldPredicate),
    Global(GlobalMatch),
    Not(Box<Predicate>),
    /// Every child matches; empty means match everything
    And(Vec<Predicate>),
    /// Any child matches; empty means match nothing
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Predicate that accepts every clip
    pub fn match_all() -> Self {
        Predicate::And(Vec::new())
    }

    pub fn negate(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    pub fn is_match_all(&self) -> bool {
        matches!(self, Predicate::And(children) if children.is_empty())
    }
}

impl Default for Predicate {
    fn default() -> Self {
        Self::match_all()
    }
}
