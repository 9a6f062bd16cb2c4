pub mod environment;
pub mod paths;
pub mod time;

pub use environment::{default_settings_path, get_config_dir, load_settings, resolve_settings};
pub use paths::{format_path_with_tilde, validate_file_size};
pub use time::{format_duration_ms, parse_duration_input};
