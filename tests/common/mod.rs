//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use imas_clip_search::{BrandType, Clip, LiveType, Performer};
use tempfile::TempDir;

/// Builder for catalog clips
pub struct ClipBuilder {
    clip: Clip,
}

impl ClipBuilder {
    /// Create a clip with the given id and no other data
    pub fn new(id: i64) -> Self {
        Self { clip: Clip { id, ..Clip::default() } }
    }

    pub fn file_path(mut self, path: &str) -> Self {
        self.clip.file_path = Some(path.to_string());
        self
    }

    pub fn clip_name(mut self, name: &str) -> Self {
        self.clip.clip_name = Some(name.to_string());
        self
    }

    pub fn song(mut self, title: &str) -> Self {
        self.clip.song_title = Some(title.to_string());
        self
    }

    pub fn concert(mut self, name: &str) -> Self {
        self.clip.concert_name = Some(name.to_string());
        self
    }

    pub fn lyrics(mut self, lyrics: &str) -> Self {
        self.clip.lyrics = Some(lyrics.to_string());
        self
    }

    pub fn remarks(mut self, remarks: &str) -> Self {
        self.clip.remarks = Some(remarks.to_string());
        self
    }

    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.clip.duration_ms = ms;
        self
    }

    /// Set the concert date at 18:00 on the given day
    pub fn concert_date(mut self, y: i32, m: u32, d: u32) -> Self {
        self.clip.concert_date = at(y, m, d, 18, 0);
        self
    }

    pub fn created_at(mut self, y: i32, m: u32, d: u32) -> Self {
        self.clip.created_at = at(y, m, d, 12, 0);
        self
    }

    pub fn updated_at(mut self, y: i32, m: u32, d: u32) -> Self {
        self.clip.updated_at = at(y, m, d, 12, 0);
        self
    }

    pub fn live_type(mut self, live_type: LiveType) -> Self {
        self.clip.live_type = live_type;
        self
    }

    pub fn brands(mut self, brands: BrandType) -> Self {
        self.clip.brands = brands;
        self
    }

    pub fn performer(mut self, name: &str, reading: &str) -> Self {
        self.clip.performers.push(Performer::new(name, reading));
        self
    }

    pub fn build(self) -> Clip {
        self.clip
    }
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d).and_then(|day| day.and_hms_opt(h, min, 0))
}

/// Builder for catalog files in a temporary directory
pub struct CatalogFileBuilder {
    temp_dir: TempDir,
}

impl CatalogFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw content to a file and return its path
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write catalog file");
        path
    }

    /// Write clips as a JSON array
    pub fn write_array(&self, name: &str, clips: &[Clip]) -> PathBuf {
        let content = serde_json::to_string_pretty(clips).expect("Failed to serialize clips");
        self.write_raw(name, &content)
    }

    /// Write clips as JSONL, one per line
    pub fn write_jsonl(&self, name: &str, clips: &[Clip]) -> PathBuf {
        let content = clips
            .iter()
            .map(|c| serde_json::to_string(c).expect("Failed to serialize clip"))
            .collect::<Vec<_>>()
            .join("\n");
        self.write_raw(name, &content)
    }
}

impl Default for CatalogFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Small catalog used across integration tests
pub fn sample_catalog() -> Vec<Clip> {
    vec![
        ClipBuilder::new(1)
            .file_path("/media/live/cg_10th_shine.mp4")
            .song("Shine")
            .concert("10th ANNIVERSARY")
            .duration_ms(150_000)
            .concert_date(2024, 5, 1)
            .brands(BrandType::CINDERELLA | BrandType::MILLION)
            .performer("Haruka", "haruka")
            .build(),
        ClipBuilder::new(2)
            .file_path("/media/live/ml_smile.mp4")
            .song("Smile")
            .concert("MILLION LIVE 5th")
            .duration_ms(99_999)
            .concert_date(2023, 11, 3)
            .brands(BrandType::MILLION)
            .performer("如月千早", "きさらぎちはや")
            .remarks("encore")
            .build(),
        ClipBuilder::new(3)
            .file_path("/media/live/sidem_mr.mp4")
            .song("Star")
            .duration_ms(240_000)
            .live_type(LiveType::Mr)
            .brands(BrandType::SIDEM)
            .lyrics("shine on the stage")
            .build(),
    ]
}
