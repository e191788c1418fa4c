//! Grid services.
//!
//! Each module is one stage of the render pipeline, leaf to root:
//! date window, viewport page size, pagination, per-cell resolution, axis
//! scaling, and finally [`grid::RateGrid`] which composes them.

pub mod axis_scale;
pub mod date_window;
pub mod expansion;
pub mod grid;
pub mod pagination;
pub mod rate_cell;
pub mod viewport;


pub use axis_scale::{compute_axis_scale, compute_range_bar, AxisScale, RangeBarGeometry};
pub use date_window::{generate_date_window, resolve_date_window};
pub use expansion::{tooltip_placement, ExpansionState, TooltipPlacement};
pub use grid::{GridView, RateGrid};
pub use pagination::Paginator;
pub use rate_cell::{resolve_rate_cell, ColorClass, RateCell};
pub use viewport::width_to_page_size;
