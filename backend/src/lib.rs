//! # Rate Grid
//!
//! Comparative rate grid for hotel revenue-management dashboards.
//!
//! The grid turns already-fetched comparison data into a paged table: one row
//! per property, three fixed summary-metric columns, a horizontally scrolling
//! set of date columns with lowest/highest/sold-out classification, and an
//! optional range-bar row per property whose vertical scale follows the
//! visible page.
//!
//! ## Architecture
//!
//! - [`models`]: Inbound data contracts (dates, rate records, comparison set)
//! - [`services`]: The render pipeline and the [`services::RateGrid`] component
//! - [`parsing`]: Comparison payload parsing (`comparisonData` JSON)
//! - [`config`]: TOML configuration for breakpoints, geometry and labels
//! - [`api`]: Re-exports of every type exchanged with the host UI
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rate_grid::config::GridConfig;
//! use rate_grid::models::{ComparisonEntry, ComparisonSet, DateRange, PropertyMetadata,
//!     PropertyRateSeries, RateRecord};
//! use rate_grid::services::RateGrid;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
//! let set = ComparisonSet::new(vec![ComparisonEntry::new(
//!     PropertyMetadata::new("h-1", "Harbour View"),
//!     PropertyRateSeries::from_records(vec![RateRecord::open(start, 189.0)]),
//! )
//! .lowest_on([start])]);
//!
//! let grid = RateGrid::with_range(GridConfig::default(), &DateRange::new(start, end), 1900)
//!     .expect("valid range");
//! let view = grid.render(&set, &[]);
//! assert_eq!(view.page_size, 12);
//! assert_eq!(view.date_headers.len(), 9);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;

pub use error::{GridError, GridResult};
