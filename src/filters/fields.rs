//! Field predicate table: maps a field key to a typed predicate.

use super::ast::{DateField, FieldKey, FieldPredicate, TextField};
use super::range::{DateRange, NumericRange};
use crate::models::Clip;

/// Build the predicate for `?key:value`
///
/// `key` is given without the leading `?` and looked up case-insensitively.
/// Unknown keys produce [`FieldPredicate::Unknown`], which never matches.
pub fn field_predicate(key: &str, value: &str) -> FieldPredicate {
    let Some(field) = FieldKey::parse(key) else {
        return FieldPredicate::Unknown;
    };

    let text = |field| FieldPredicate::Text { field, needle: fold_case(value) };
    let date = |field| FieldPredicate::Date { field, range: DateRange::parse(value) };

    match field {
        FieldKey::Path => text(TextField::FilePath),
        FieldKey::Clip => text(TextField::ClipName),
        FieldKey::Song => text(TextField::SongTitle),
        FieldKey::Concert => text(TextField::ConcertName),
        FieldKey::Lyrics => text(TextField::Lyrics),
        FieldKey::Remarks => text(TextField::Remarks),
        FieldKey::Type => FieldPredicate::LiveType { needle: fold_case(value) },
        FieldKey::Brands => FieldPredicate::Brands { needle: fold_case(value) },
        FieldKey::Performers => FieldPredicate::Performers { needle: fold_case(value) },
        FieldKey::Duration => FieldPredicate::Duration(NumericRange::parse(value)),
        FieldKey::Date => date(DateField::ConcertDate),
        FieldKey::Created => date(DateField::CreatedAt),
        FieldKey::Updated => date(DateField::UpdatedAt),
    }
}

impl FieldPredicate {
    pub fn matches(&self, clip: &Clip) -> bool {
        match self {
            FieldPredicate::Text { field, needle } => {
                field.get(clip).is_some_and(|value| contains_folded(value, needle))
            }
            FieldPredicate::LiveType { needle } => {
                contains_folded(clip.live_type.display_str(), needle)
            }
            FieldPredicate::Brands { needle } => {
                contains_folded(&clip.brands.display_string(), needle)
            }
            FieldPredicate::Performers { needle } => any_performer_contains(clip, needle),
            FieldPredicate::Duration(range) => range.contains(Some(clip.duration_secs())),
            FieldPredicate::Date { field, range } => range.contains(field.get(clip)),
            FieldPredicate::Unknown => false,
        }
    }
}

/// Case-fold a needle once at compile time
pub(crate) fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test against an already folded needle
pub(crate) fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    if folded_needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(folded_needle)
}

/// True if any linked performer's name or reading contains the needle
pub(crate) fn any_performer_contains(clip: &Clip, folded_needle: &str) -> bool {
    clip.performers.iter().any(|p| {
        contains_folded(&p.name, folded_needle) || contains_folded(&p.reading, folded_needle)
    })
}
