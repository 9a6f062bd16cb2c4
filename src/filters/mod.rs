//! Search query language for the clip catalog
//!
//! - [`tokenizer`] - Splits a query string into top-level tokens
//! - [`parser`] - Compiles tokens into a [`Predicate`]
//! - [`fields`] / [`global`] - Keyed and unkeyed matching against a [`Clip`](crate::models::Clip)
//! - [`range`] - Numeric and date range expressions
//! - [`apply`] - Evaluates predicates over clip collections
//! - [`builder`] - Serializes advanced-search form state back into a query

pub mod apply;
pub mod ast;
pub mod builder;
pub mod fields;
pub mod global;
pub mod parser;
pub mod range;
pub mod tokenizer;

pub use apply::{count_matches, filter_clips, par_filter_clips, search_clips};
pub use ast::{DateField, FieldKey, FieldPredicate, Predicate, TextField};
pub use builder::{AdvancedSearchForm, BuiltQuery, FormErrors, RangeError};
pub use fields::field_predicate;
pub use global::{GlobalMatch, matches_global};
pub use parser::parse_query;
pub use range::{DateRange, NumericRange};
pub use tokenizer::tokenize;
