//! Public API surface of the grid.
//!
//! This file consolidates the types the host UI exchanges with the grid:
//! the inbound data contracts and the rendered view. All of them derive
//! Serialize, and the inbound ones Deserialize as well.

pub use crate::models::ComparisonEntry;
pub use crate::models::ComparisonSet;
pub use crate::models::DateRange;
pub use crate::models::DateWindow;
pub use crate::models::DayColumn;
pub use crate::models::Designation;
pub use crate::models::PropertyId;
pub use crate::models::PropertyMetadata;
pub use crate::models::PropertyRateSeries;
pub use crate::models::RateEvent;
pub use crate::models::RateRecord;
pub use crate::models::RateStatus;
pub use crate::services::axis_scale::AxisScale;
pub use crate::services::axis_scale::RangeBar;
pub use crate::services::axis_scale::RangeBarGeometry;
pub use crate::services::axis_scale::ScaleUnit;
pub use crate::services::expansion::TooltipPlacement;
pub use crate::services::grid::GridCell;
pub use crate::services::grid::GridRow;
pub use crate::services::grid::GridView;
pub use crate::services::grid::HeaderCell;
pub use crate::services::grid::LegendEntry;
pub use crate::services::grid::MetricColumn;
pub use crate::services::grid::MetricValues;
pub use crate::services::grid::PagingState;
pub use crate::services::grid::RangeBarRow;
pub use crate::services::rate_cell::ColorClass;
pub use crate::services::rate_cell::RateCell;
pub use crate::services::rate_cell::TooltipPayload;
