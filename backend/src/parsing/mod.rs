//! Parsers for the data handed over by the dashboard's fetching layer.
//!
//! - [`comparison_json`]: Parse the `comparisonData` REST payload into a
//!   [`crate::models::ComparisonSet`]
//!
//! # Example
//!
//! ```no_run
//! use rate_grid::parsing::comparison_json::parse_comparison_json;
//! use std::path::Path;
//!
//! let payload = parse_comparison_json(Path::new("comparison.json"))
//!     .expect("Failed to parse comparison payload");
//! ```

pub mod comparison_json;

#[cfg(test)]
mod comparison_json_tests;

pub use comparison_json::{parse_comparison_json, parse_comparison_json_str, ComparisonPayload};
