use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size of a catalog file: 50MB
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits (50MB)
///
/// Takes an open file handle so the checked file is the one that gets read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 50MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    validate_file_size_with_limit(file, path, MAX_FILE_SIZE_BYTES)
}

pub(crate) fn validate_file_size_with_limit(file: &File, path: &Path, limit: u64) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > limit {
        bail!("File too large: {} ({} bytes, max {} bytes)", path.display(), file_size, limit);
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use imas_clip_search::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Videos/live.mp4");
/// // Returns "~/Videos/live.mp4" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
