use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::models::Clip;
use crate::utils::validate_file_size;

const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// Load a clip catalog from disk
///
/// The file is either one JSON array of clips or JSONL with one clip per
/// line. Arrays must parse as a whole; JSONL files tolerate malformed lines.
pub fn load_catalog(path: &Path) -> Result<Vec<Clip>> {
    // Open once and validate the same handle that gets read
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let clips = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Clip>>(&content)
            .with_context(|| format!("Failed to parse catalog array: {}", path.display()))?
    } else {
        parse_catalog_lines(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?
    };

    info!(path = %path.display(), clips = clips.len(), "loaded catalog");
    Ok(clips)
}

/// Parse JSONL catalog content
///
/// Malformed lines are logged and skipped. Returns an error if more than 50%
/// of lines fail to parse or 100 lines in a row fail.
pub fn parse_catalog_lines(content: &str) -> Result<Vec<Clip>> {
    let mut clips = Vec::new();
    let mut skipped_count = 0;
    let mut total_lines = 0;
    let mut consecutive_errors = 0;

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        total_lines += 1;

        match serde_json::from_str::<Clip>(line) {
            Ok(clip) => {
                clips.push(clip);
                consecutive_errors = 0;
            }
            Err(e) => {
                warn!("Failed to parse catalog line {}: {}", line_num + 1, e);
                skipped_count += 1;
                consecutive_errors += 1;

                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in catalog - file may be corrupted",
                        consecutive_errors
                    );
                }
            }
        }
    }

    if total_lines > 0 {
        let failure_rate = (skipped_count as f64) / (total_lines as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in catalog: {} of {} lines failed ({:.1}%)",
                skipped_count,
                total_lines,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        info!("Parsed catalog: {} clips ({} skipped)", clips.len(), skipped_count);
    }

    Ok(clips)
}
