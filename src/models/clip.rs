use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{BrandType, LiveType};

/// A performer linked to a clip
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Performer {
    pub name: String,
    /// Phonetic reading of the name (kana)
    #[serde(default)]
    pub reading: String,
}

impl Performer {
    pub fn new(name: impl Into<String>, reading: impl Into<String>) -> Self {
        Self { name: name.into(), reading: reading.into() }
    }
}

/// One catalogued video clip
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub clip_name: Option<String>,
    #[serde(default)]
    pub song_title: Option<String>,
    #[serde(default)]
    pub concert_name: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_datetime",
        serialize_with = "crate::parsers::deserializers::serialize_optional_datetime"
    )]
    pub concert_date: Option<NaiveDateTime>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_datetime",
        serialize_with = "crate::parsers::deserializers::serialize_optional_datetime"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_datetime",
        serialize_with = "crate::parsers::deserializers::serialize_optional_datetime"
    )]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub live_type: LiveType,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_brands",
        serialize_with = "crate::parsers::deserializers::serialize_brands"
    )]
    pub brands: BrandType,
    #[serde(default)]
    pub performers: Vec<Performer>,
}

impl Clip {
    /// Duration in seconds, as compared by `?duration:` ranges
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }

    /// Short human-readable label: clip name, else song title, else file path
    pub fn label(&self) -> &str {
        [&self.clip_name, &self.song_title, &self.file_path]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or("(untitled)")
    }
}
