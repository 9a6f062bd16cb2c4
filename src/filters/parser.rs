//! Search query parser.
//!
//! Compiles a query string into a [`Predicate`] evaluated per clip. Parsing
//! never fails: malformed input degrades to a predicate that matches
//! something sensible, so the query can be re-run on every keystroke.
//!
//! # Syntax
//!
//! ```text
//! query    := token (WS token)*
//! token    := "-"? ( keyed | unkeyed )
//! keyed    := "?" KEY ":" ( group | quoted | bareword )
//! unkeyed  := group | quoted | bareword
//! group    := "(" term ( " OR " term )* ")"
//! term     := "-"? ( quoted | bareword )
//! KEY      := [A-Za-z0-9_]+
//! ```
//!
//! Top-level tokens are AND'd, terms inside a group are OR'd. A leading `-`
//! negates a token or a single group term.
//!
//! # Supported Keys
//!
//! - `path`, `clip`, `song`, `concert`, `lyrics`, `remarks` - substring match
//! - `type` - live type display string
//! - `brands` / `brand` - combined brand display string
//! - `performers` / `performer` - any performer's name or reading
//! - `duration` - seconds, `N`, `N-`, `-N` or `N1-N2`
//! - `date`, `created`, `updated` - `yyyy/MM/dd` days or ranges of days
//!
//! Unknown keys never match. Unkeyed words match against every field enabled
//! in [`SearchSettings`].
//!
//! # Examples
//!
//! ```rust
//! # use imas_clip_search::filters::parser::parse_query;
//! // Free text, AND'd
//! let predicate = parse_query("shine live", None);
//!
//! // Keyed value with spaces
//! let predicate = parse_query("?concert:\"5th LIVE\"", None);
//!
//! // OR-group on one field, excluding a performer
//! let predicate = parse_query("?brands:(シンデレラガールズ OR ミリオンライブ！) -?performers:春香", None);
//!
//! // Ranges
//! let predicate = parse_query("?duration:90-120 ?date:2024/01/01-", None);
//! ```

use super::ast::Predicate;
use super::fields::field_predicate;
use super::global::GlobalMatch;
use super::tokenizer::tokenize;
use crate::models::SearchSettings;

/// Separator between terms of a group
const OR_SEPARATOR: &str = " OR ";

/// Compile a query string into a predicate
///
/// `settings` controls which fields unkeyed terms search; `None` searches all
/// of them. An empty query matches every clip.
pub fn parse_query(query: &str, settings: Option<&SearchSettings>) -> Predicate {
    let settings = settings.copied().unwrap_or_default();
    let predicates =
        tokenize(query).into_iter().filter_map(|token| parse_token(token, &settings)).collect();
    Predicate::And(predicates)
}

/// Compile one top-level token
///
/// Returns `None` for a keyed token without a `:`; such a token adds no
/// constraint.
fn parse_token(token: &str, settings: &SearchSettings) -> Option<Predicate> {
    let (negated, body) = strip_negation(token);

    let predicate = if let Some(keyed) = body.strip_prefix('?') {
        let (key, value) = keyed.split_once(':')?;
        match strip_parens(value) {
            Some(inner) => parse_group(Some(key), inner, settings),
            None => Predicate::Field(field_predicate(key, strip_quotes(value))),
        }
    } else if let Some(inner) = strip_parens(body) {
        parse_group(None, inner, settings)
    } else {
        Predicate::Global(GlobalMatch::new(strip_quotes(body), *settings))
    };

    Some(if negated { predicate.negate() } else { predicate })
}

/// Compile the interior of a parenthesized group into an OR of its terms
///
/// With a key every term is a field value for that key, otherwise every
/// term is an unkeyed match. Each term may carry its own `-`.
fn parse_group(key: Option<&str>, content: &str, settings: &SearchSettings) -> Predicate {
    let terms = content
        .split(OR_SEPARATOR)
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(|term| {
            let (negated, term) = strip_negation(term);
            let term = strip_quotes(term);
            let predicate = match key {
                Some(key) => Predicate::Field(field_predicate(key, term)),
                None => Predicate::Global(GlobalMatch::new(term, *settings)),
            };
            if negated { predicate.negate() } else { predicate }
        })
        .collect();

    Predicate::Or(terms)
}

fn strip_negation(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

/// Interior of `(...)`, if `s` is wrapped in one pair of parentheses
fn strip_parens(s: &str) -> Option<&str> {
    s.strip_prefix('(')?.strip_suffix(')')
}

/// Remove one layer of double quotes from each end
fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ast::{FieldPredicate, TextField};
    use crate::filters::range::NumericRange;
    use crate::models::{BrandType, Clip, Performer};

    fn song_clip(title: &str) -> Clip {
        Clip { song_title: Some(title.to_string()), ..Clip::default() }
    }

    #[test]
    fn test_parse_empty_matches_all() {
        assert!(parse_query("", None).is_match_all());
        assert!(parse_query("   ", None).is_match_all());
    }

    #[test]
    fn test_parse_keyed_text() {
        let predicate = parse_query("?song:Shine", None);
        assert_eq!(
            predicate,
            Predicate::And(vec![Predicate::Field(FieldPredicate::Text {
                field: TextField::SongTitle,
                needle: "shine".to_string(),
            })])
        );
    }

    #[test]
    fn test_parse_keyed_quoted_strips_quotes() {
        let predicate = parse_query(r#"?concert:"5th LIVE""#, None);
        assert_eq!(
            predicate,
            Predicate::And(vec![Predicate::Field(FieldPredicate::Text {
                field: TextField::ConcertName,
                needle: "5th live".to_string(),
            })])
        );
    }

    #[test]
    fn test_parse_keyed_range() {
        let predicate = parse_query("?duration:90-120", None);
        assert_eq!(
            predicate,
            Predicate::And(vec![Predicate::Field(FieldPredicate::Duration(
                NumericRange::Bounded { min: Some(90.0), max: Some(120.0) }
            ))])
        );
    }

    #[test]
    fn test_parse_negation_is_outermost() {
        let predicate = parse_query("-?song:a", None);
        let Predicate::And(children) = predicate else { panic!("expected And") };
        assert!(matches!(&children[0], Predicate::Not(inner)
            if matches!(**inner, Predicate::Field(FieldPredicate::Text { .. }))));
    }

    #[test]
    fn test_parse_missing_colon_adds_no_constraint() {
        assert!(parse_query("?song", None).is_match_all());
        assert!(parse_query("-?song", None).is_match_all());
        assert!(parse_query("?song", None).matches(&Clip::default()));
    }

    #[test]
    fn test_parse_unknown_key() {
        let predicate = parse_query("?bogus:x", None);
        assert!(!predicate.matches(&Clip::default()));
        assert!(!predicate.matches(&song_clip("x")));
    }

    #[test]
    fn test_parse_keyed_group() {
        let clip = Clip { brands: BrandType::MILLION, ..Clip::default() };
        assert!(parse_query("?brands:(SideM OR ミリオン)", None).matches(&clip));
        assert!(!parse_query("?brands:(SideM OR シャイニー)", None).matches(&clip));
    }

    #[test]
    fn test_parse_group_term_negation() {
        let clip = Clip { brands: BrandType::MILLION, ..Clip::default() };
        // "not SideM" is true for a Million-only clip
        assert!(parse_query("?brands:(-SideM OR シャイニー)", None).matches(&clip));
        assert!(!parse_query("?brands:(-ミリオン)", None).matches(&clip));
    }

    #[test]
    fn test_parse_group_and_token_negation_compose() {
        let clip = Clip { brands: BrandType::MILLION, ..Clip::default() };
        // Outer flip of inner flip: NOT (NOT million)
        assert!(parse_query("-?brands:(-ミリオン)", None).matches(&clip));
    }

    #[test]
    fn test_parse_group_quoted_terms() {
        let clip = song_clip("Star!!");
        assert!(parse_query(r#"?song:("Ready!!" OR "Star!!")"#, None).matches(&clip));
    }

    #[test]
    fn test_parse_empty_group_matches_nothing() {
        let clip = song_clip("anything");
        assert!(!parse_query("?song:()", None).matches(&clip));
        assert!(!parse_query("()", None).matches(&clip));
        assert!(!parse_query("( OR )", None).matches(&clip));
    }

    #[test]
    fn test_parse_unkeyed_group() {
        let clip = song_clip("Shine");
        assert!(parse_query("(smile OR shine)", None).matches(&clip));
        assert!(!parse_query("(smile OR star)", None).matches(&clip));
        assert!(parse_query("(smile OR -star)", None).matches(&clip));
    }

    #[test]
    fn test_parse_negated_unkeyed_group() {
        let clip = song_clip("Shine");
        assert!(!parse_query("-(smile OR shine)", None).matches(&clip));
        assert!(parse_query("-(smile OR star)", None).matches(&clip));
    }

    #[test]
    fn test_parse_or_is_case_sensitive() {
        // " or " is not a separator, so the whole interior is one term
        let clip = song_clip("a");
        assert!(!parse_query("?song:(a or b)", None).matches(&clip));
    }

    #[test]
    fn test_parse_global_respects_settings() {
        let clip = Clip { lyrics: Some("hidden".to_string()), ..Clip::default() };
        let settings = SearchSettings { lyrics: false, ..SearchSettings::ALL };
        assert!(parse_query("hidden", None).matches(&clip));
        assert!(!parse_query("hidden", Some(&settings)).matches(&clip));
        // Keyed search ignores the toggles
        assert!(parse_query("?lyrics:hidden", Some(&settings)).matches(&clip));
    }

    #[test]
    fn test_parse_negated_quoted_global() {
        let clip = Clip {
            performers: vec![Performer::new("如月千早", "きさらぎちはや")],
            ..Clip::default()
        };
        assert!(!parse_query(r#"-"如月""#, None).matches(&clip));
        assert!(parse_query(r#"-"天海""#, None).matches(&clip));
    }

    #[test]
    fn test_strip_quotes_one_layer() {
        assert_eq!(strip_quotes(r#""a""#), "a");
        assert_eq!(strip_quotes(r#"""a"""#), r#""a""#);
        assert_eq!(strip_quotes(r#""a"#), "a");
        assert_eq!(strip_quotes("a"), "a");
        assert_eq!(strip_quotes(r#"""#), "");
    }

    #[test]
    fn test_strip_parens() {
        assert_eq!(strip_parens("(a)"), Some("a"));
        assert_eq!(strip_parens("()"), Some(""));
        assert_eq!(strip_parens("(a"), None);
        assert_eq!(strip_parens("("), None);
    }
}
