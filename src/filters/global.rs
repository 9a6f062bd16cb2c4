//! Matching for unkeyed search terms.

use super::fields::{any_performer_contains, contains_folded, fold_case};
use crate::models::{Clip, SearchSettings};

/// Compiled unkeyed term
///
/// Holds a snapshot of the settings taken when the query was parsed; a
/// settings change only takes effect once the query is parsed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalMatch {
    keyword: String,
    settings: SearchSettings,
}

impl GlobalMatch {
    pub fn new(keyword: &str, settings: SearchSettings) -> Self {
        Self { keyword: fold_case(keyword), settings }
    }

    /// The case-folded keyword
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn matches(&self, clip: &Clip) -> bool {
        let s = &self.settings;
        let kw = self.keyword.as_str();
        let text = |enabled: bool, value: &Option<String>| {
            enabled && value.as_deref().is_some_and(|v| contains_folded(v, kw))
        };

        text(s.file_path, &clip.file_path)
            || text(s.clip_name, &clip.clip_name)
            || text(s.song_title, &clip.song_title)
            || text(s.concert_name, &clip.concert_name)
            || (s.live_type && contains_folded(clip.live_type.display_str(), kw))
            || (s.brands && contains_folded(&clip.brands.display_string(), kw))
            || text(s.lyrics, &clip.lyrics)
            || text(s.remarks, &clip.remarks)
            || (s.performers && any_performer_contains(clip, kw))
    }
}

/// Match one keyword against every enabled searchable field
///
/// `None` settings search all fields.
pub fn matches_global(clip: &Clip, keyword: &str, settings: Option<&SearchSettings>) -> bool {
    GlobalMatch::new(keyword, settings.copied().unwrap_or_default()).matches(clip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BrandType, LiveType, Performer};

    fn clip() -> Clip {
        Clip {
            file_path: Some("/videos/a.mp4".to_string()),
            song_title: Some("Ready!!".to_string()),
            lyrics: Some("kirameki".to_string()),
            live_type: LiveType::Seiyuu,
            brands: BrandType::SHINY,
            performers: vec![Performer::new("櫻木真乃", "さくらぎまの")],
            ..Clip::default()
        }
    }

    #[test]
    fn test_matches_any_field_without_settings() {
        let clip = clip();
        assert!(matches_global(&clip, "videos", None));
        assert!(matches_global(&clip, "ready", None));
        assert!(matches_global(&clip, "KIRAMEKI", None));
        assert!(matches_global(&clip, "声優", None));
        assert!(matches_global(&clip, "シャイニー", None));
        assert!(matches_global(&clip, "まの", None));
        assert!(!matches_global(&clip, "nothing-here", None));
    }

    #[test]
    fn test_disabled_field_is_skipped() {
        let clip = clip();
        let settings = SearchSettings { lyrics: false, ..SearchSettings::ALL };
        assert!(!matches_global(&clip, "kirameki", Some(&settings)));
        assert!(matches_global(&clip, "ready", Some(&settings)));
    }

    #[test]
    fn test_every_field_disabled_matches_nothing() {
        let clip = clip();
        let settings = SearchSettings {
            file_path: false,
            clip_name: false,
            song_title: false,
            concert_name: false,
            live_type: false,
            brands: false,
            lyrics: false,
            remarks: false,
            performers: false,
        };
        assert!(!matches_global(&clip, "", Some(&settings)));
        assert!(!matches_global(&clip, "ready", Some(&settings)));
    }

    #[test]
    fn test_later_field_still_checked_after_misses() {
        let clip = clip();
        let settings = SearchSettings { file_path: false, song_title: false, ..SearchSettings::ALL };
        assert!(matches_global(&clip, "さくらぎ", Some(&settings)));
    }
}
