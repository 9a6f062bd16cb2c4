//! Catalog file parsing
//!
//! # Error Handling Strategy
//!
//! Catalog loading follows a **graceful degradation** approach:
//!
//! - **Individual line failures**: Malformed JSONL lines are logged as warnings and skipped,
//!   so one bad record does not hide the rest of the catalog.
//!
//! - **Catastrophic failure detection**: If >50% of lines fail to parse, or if 100 consecutive
//!   errors occur, loading returns an error instead of a mostly-empty catalog.
//!
//! - **Whole-array files**: A JSON array is parsed as one document and any malformed element
//!   fails the load.
//!
//! - **Error propagation**: Uses `anyhow::Result` with file context. The query engine itself
//!   never fails, so all errors surface here or in settings loading.

pub mod catalog;
pub mod deserializers;

pub use catalog::{load_catalog, parse_catalog_lines};
