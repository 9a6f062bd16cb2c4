use rayon::prelude::*;

use super::ast::Predicate;
use super::parser::parse_query;
use crate::models::{Clip, SearchSettings};

impl Predicate {
    /// Evaluate the predicate against one clip
    ///
    /// `And` and `Or` short-circuit left to right.
    pub fn matches(&self, clip: &Clip) -> bool {
        match self {
            Predicate::Field(field) => field.matches(clip),
            Predicate::Global(global) => global.matches(clip),
            Predicate::Not(inner) => !inner.matches(clip),
            Predicate::And(children) => children.iter().all(|p| p.matches(clip)),
            Predicate::Or(children) => children.iter().any(|p| p.matches(clip)),
        }
    }
}

/// Clips matching the predicate, in catalog order
pub fn filter_clips<'a>(clips: &'a [Clip], predicate: &Predicate) -> Vec<&'a Clip> {
    if predicate.is_match_all() {
        return clips.iter().collect();
    }
    clips.iter().filter(|clip| predicate.matches(clip)).collect()
}

/// Parallel variant of [`filter_clips`] for large catalogs
///
/// Produces the same clips in the same order.
pub fn par_filter_clips<'a>(clips: &'a [Clip], predicate: &Predicate) -> Vec<&'a Clip> {
    clips.par_iter().filter(|clip| predicate.matches(clip)).collect()
}

/// Number of clips matching the predicate
pub fn count_matches(clips: &[Clip], predicate: &Predicate) -> usize {
    clips.iter().filter(|clip| predicate.matches(clip)).count()
}

/// Parse `query` and filter `clips` with it in one step
pub fn search_clips<'a>(
    clips: &'a [Clip],
    query: &str,
    settings: Option<&SearchSettings>,
) -> Vec<&'a Clip> {
    filter_clips(clips, &parse_query(query, settings))
}
