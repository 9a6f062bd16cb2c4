//! Data models for the clip catalog.
//!
//! - [`Clip`] - One catalogued video clip, the record the query engine filters
//! - [`Performer`] - A performer linked to a clip (name and phonetic reading)
//! - [`LiveType`] - Closed set of live kinds with static display strings
//! - [`BrandType`] - Combinable brand flags rendered in a fixed label order
//! - [`SearchSettings`] - Per-field toggles for unkeyed (global) search terms
//!
//! Clips use serde for JSON (de)serialization with lenient custom
//! deserializers for dates and brands in the `parsers::deserializers` module.

pub mod brand;
pub mod clip;
pub mod live_type;
pub mod settings;

pub use brand::{BRAND_SEPARATOR, BrandType};
pub use clip::{Clip, Performer};
pub use live_type::LiveType;
pub use settings::SearchSettings;
