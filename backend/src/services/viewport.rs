//! Viewport width to column count resolution.
//!
//! The grid always shows [`FIXED_METRIC_COLUMNS`] summary columns
//! (competitiveness, availability, parity) ahead of the date columns, so only
//! `page_size - 3` columns scroll.

use serde::{Deserialize, Serialize};

/// Leading columns reserved for per-property summary metrics.
pub const FIXED_METRIC_COLUMNS: usize = 3;

/// Map a viewport width (CSS pixels) to the total grid column count.
///
/// | width        | columns |
/// |--------------|---------|
/// | < 1352       | 6       |
/// | 1352 ..=1500 | 7       |
/// | 1501 ..=1800 | 9       |
/// | > 1800       | 12      |
pub fn width_to_page_size(width: u32) -> usize {
    match width {
        0..=1351 => 6,
        1352..=1500 => 7,
        1501..=1800 => 9,
        _ => 12,
    }
}

/// Number of scrolling date columns for a page size.
pub fn date_columns(page_size: usize) -> usize {
    page_size.saturating_sub(FIXED_METRIC_COLUMNS)
}

/// One row of the breakpoint table: widths up to and including `max_width`
/// get `page_size` columns. `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    #[serde(default)]
    pub max_width: Option<u32>,
    pub page_size: usize,
}

/// Configurable breakpoint table; the default reproduces [`width_to_page_size`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default = "default_breakpoints")]
    breakpoints: Vec<Breakpoint>,
}

fn default_breakpoints() -> Vec<Breakpoint> {
    vec![
        Breakpoint {
            max_width: Some(1351),
            page_size: 6,
        },
        Breakpoint {
            max_width: Some(1500),
            page_size: 7,
        },
        Breakpoint {
            max_width: Some(1800),
            page_size: 9,
        },
        Breakpoint {
            max_width: None,
            page_size: 12,
        },
    ]
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
        }
    }
}

impl PageLayout {
    pub fn new(breakpoints: Vec<Breakpoint>) -> Self {
        Self { breakpoints }
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Total column count for `width`.
    pub fn page_size(&self, width: u32) -> usize {
        self.breakpoints
            .iter()
            .find(|bp| bp.max_width.map_or(true, |max| width <= max))
            .or_else(|| self.breakpoints.last())
            .map(|bp| bp.page_size)
            .unwrap_or_else(|| width_to_page_size(width))
    }

    /// Scrolling date column count for `width`.
    pub fn date_columns(&self, width: u32) -> usize {
        date_columns(self.page_size(width))
    }
}
