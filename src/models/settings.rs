use serde::{Deserialize, Serialize};

/// Which fields an unkeyed search term is matched against
///
/// Every toggle defaults to `true`, so a partially written settings file only
/// needs to list the fields it turns off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchSettings {
    pub file_path: bool,
    pub clip_name: bool,
    pub song_title: bool,
    pub concert_name: bool,
    pub live_type: bool,
    pub brands: bool,
    pub lyrics: bool,
    pub remarks: bool,
    pub performers: bool,
}

impl SearchSettings {
    /// Every field enabled
    pub const ALL: SearchSettings = SearchSettings {
        file_path: true,
        clip_name: true,
        song_title: true,
        concert_name: true,
        live_type: true,
        brands: true,
        lyrics: true,
        remarks: true,
        performers: true,
    };
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::ALL
    }
}
