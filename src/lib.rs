//! IMAS Clip Search - Query language and filtering for a live-clip catalog
//!
//! This library implements the search box of a clip manager. It supports:
//!
//! - Tokenizing and compiling query strings (`?key:value`, quoted phrases,
//!   `(a OR b)` groups, `-` negation) into predicates
//! - Substring, numeric-range and date-range matching on clip fields
//! - Unkeyed search across the fields enabled in [`SearchSettings`]
//! - Building query strings from an advanced-search form
//! - Loading clip catalogs from JSON or JSONL files
//!
//! # Example
//!
//! ```no_run
//! use imas_clip_search::{filter_clips, load_catalog, parse_query};
//! use std::path::PathBuf;
//!
//! let clips = load_catalog(&PathBuf::from("catalog.jsonl"))?;
//! let predicate = parse_query("?song:Shine -?performers:春香", None);
//! println!("{} matches", filter_clips(&clips, &predicate).len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use filters::{AdvancedSearchForm, BuiltQuery, Predicate, filter_clips, parse_query};
pub use models::{BrandType, Clip, LiveType, Performer, SearchSettings};
pub use parsers::load_catalog;
pub use utils::paths::format_path_with_tilde;
