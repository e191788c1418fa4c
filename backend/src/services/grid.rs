//! Grid composition: header, paged rate rows and expanded range-bar rows.
//!
//! [`RateGrid`] owns the only mutable state of the grid (viewport width,
//! pagination offset, expanded rows). Everything else is re-derived from the
//! comparison set on each [`RateGrid::render`] call.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::error::GridResult;
use crate::models::{
    ComparisonEntry, ComparisonSet, DateRange, DateWindow, DayColumn, PropertyId,
};
use crate::services::axis_scale::{range_bars_for_dates, scale_for_dates, AxisScale, RangeBar};
use crate::services::date_window::window_for_range;
use crate::services::expansion::{tooltip_placement, ExpansionState, TooltipPlacement};
use crate::services::pagination::Paginator;
use crate::services::rate_cell::{resolve_rate_cell, RateCell};
use crate::services::viewport::date_columns;

/// The fixed summary columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricColumn {
    Competitiveness,
    Availability,
    ParityScore,
}

impl MetricColumn {
    pub const ALL: [MetricColumn; 3] = [
        MetricColumn::Competitiveness,
        MetricColumn::Availability,
        MetricColumn::ParityScore,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricColumn::Competitiveness => "Competitiveness",
            MetricColumn::Availability => "Availability",
            MetricColumn::ParityScore => "Parity Score",
        }
    }
}

/// Header slot of a date column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderCell {
    Date(DayColumn),
    Blank,
}

/// Body slot of a date column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    Rate(RateCell),
    Blank,
}

/// Values of the fixed metric columns for one property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    pub competitiveness: Option<f64>,
    pub availability: Option<f64>,
    pub parity_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendStyle {
    Bar,
    Marker,
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub style: LegendStyle,
}

/// Range-bar row drawn under an expanded property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBarRow {
    pub axis: AxisScale,
    pub tick_labels: [String; 4],
    /// One slot per date column, `None` where there is nothing to draw.
    pub bars: Vec<Option<RangeBar>>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub property_id: PropertyId,
    pub property_name: String,
    pub row_index: usize,
    pub metrics: MetricValues,
    pub cells: Vec<GridCell>,
    pub expanded: bool,
    pub tooltip_placement: TooltipPlacement,
    pub range_row: Option<RangeBarRow>,
}

/// Pagination affordances for the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingState {
    pub offset: usize,
    pub window_len: usize,
    pub date_columns: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

/// One rendered frame of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridView {
    pub page_size: usize,
    pub metric_columns: Vec<MetricColumn>,
    pub date_headers: Vec<HeaderCell>,
    pub rows: Vec<GridRow>,
    pub paging: PagingState,
}

impl GridView {
    pub fn row(&self, id: &PropertyId) -> Option<&GridRow> {
        self.rows.iter().find(|r| &r.property_id == id)
    }
}

fn default_legend() -> Vec<LegendEntry> {
    vec![
        LegendEntry {
            label: "Rate range".to_string(),
            style: LegendStyle::Bar,
        },
        LegendEntry {
            label: "Current rate".to_string(),
            style: LegendStyle::Marker,
        },
        LegendEntry {
            label: "Compset average".to_string(),
            style: LegendStyle::Line,
        },
    ]
}

/// Comparative rate grid for one comparison view.
#[derive(Debug, Clone)]
pub struct RateGrid {
    config: GridConfig,
    window: DateWindow,
    viewport_width: u32,
    page_size: usize,
    pager: Paginator,
    expansion: ExpansionState,
}

impl RateGrid {
    pub fn new(config: GridConfig, window: DateWindow, viewport_width: u32) -> Self {
        let page_size = config.layout.page_size(viewport_width);
        let pager = Paginator::new(window.len(), date_columns(page_size));
        Self {
            config,
            window,
            viewport_width,
            page_size,
            pager,
            expansion: ExpansionState::new(),
        }
    }

    /// Build a grid over `range`, failing on an inverted range.
    pub fn with_range(config: GridConfig, range: &DateRange, viewport_width: u32) -> GridResult<Self> {
        let window = window_for_range(range)?;
        Ok(Self::new(config, window, viewport_width))
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn window(&self) -> &DateWindow {
        &self.window
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn date_columns(&self) -> usize {
        self.pager.date_columns()
    }

    pub fn offset(&self) -> usize {
        self.pager.offset()
    }

    pub fn paging(&self) -> PagingState {
        PagingState {
            offset: self.pager.offset(),
            window_len: self.pager.window_len(),
            date_columns: self.pager.date_columns(),
            can_prev: self.pager.can_prev(),
            can_next: self.pager.can_next(),
        }
    }

    /// Apply a resize. The offset is kept (re-clamped) rather than reset.
    /// Returns whether the page size changed.
    pub fn set_viewport_width(&mut self, width: u32) -> bool {
        self.viewport_width = width;
        let page_size = self.config.layout.page_size(width);
        if page_size == self.page_size {
            return false;
        }
        debug!(
            "Viewport width {} changes page size {} -> {}",
            width, self.page_size, page_size
        );
        self.page_size = page_size;
        self.pager.set_date_columns(date_columns(page_size));
        true
    }

    /// Replace the date window. Paging starts over only if the window differs.
    /// Returns whether it did.
    pub fn set_date_window(&mut self, window: DateWindow) -> bool {
        if window == self.window {
            return false;
        }
        debug!(
            "Date window changed ({} -> {} days); resetting pagination",
            self.window.len(),
            window.len()
        );
        self.pager.reset(window.len());
        self.window = window;
        true
    }

    pub fn set_date_range(&mut self, range: &DateRange) -> GridResult<bool> {
        let window = window_for_range(range)?;
        Ok(self.set_date_window(window))
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.pager.prev_page()
    }

    pub fn can_next(&self) -> bool {
        self.pager.can_next()
    }

    pub fn can_prev(&self) -> bool {
        self.pager.can_prev()
    }

    /// Flip a property's range-bar row. Returns `true` when now expanded.
    pub fn toggle_expanded(&mut self, id: &PropertyId) -> bool {
        self.expansion.toggle(id)
    }

    pub fn is_expanded(&self, id: &PropertyId) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Dates on the current page.
    pub fn visible_dates(&self) -> &[DayColumn] {
        let range = self.pager.visible_range();
        self.window.slice(range.start, range.len())
    }

    /// Render the current page for the selected properties
    /// (all of them when `selected` is empty).
    pub fn render(&self, set: &ComparisonSet, selected: &[String]) -> GridView {
        let visible = self.visible_dates();
        let padding = self.pager.padding();

        let mut date_headers: Vec<HeaderCell> =
            visible.iter().cloned().map(HeaderCell::Date).collect();
        date_headers.extend(std::iter::repeat(HeaderCell::Blank).take(padding));

        let rows: Vec<GridRow> = set
            .selected(selected)
            .enumerate()
            .map(|(row_index, entry)| self.render_row(set, entry, row_index, visible, padding))
            .collect();

        debug!(
            "Rendered {} rows x {} date columns at offset {} ({} blank)",
            rows.len(),
            visible.len(),
            self.pager.offset(),
            padding
        );

        GridView {
            page_size: self.page_size,
            metric_columns: MetricColumn::ALL.to_vec(),
            date_headers,
            rows,
            paging: self.paging(),
        }
    }

    fn render_row(
        &self,
        set: &ComparisonSet,
        entry: &ComparisonEntry,
        row_index: usize,
        visible: &[DayColumn],
        padding: usize,
    ) -> GridRow {
        let mut cells: Vec<GridCell> = visible
            .iter()
            .map(|column| {
                let designation = set.designation(column.date);
                GridCell::Rate(resolve_rate_cell(
                    entry,
                    column.date,
                    &designation,
                    &self.config.labels,
                ))
            })
            .collect();
        cells.extend(std::iter::repeat(GridCell::Blank).take(padding));

        let expanded = self.expansion.is_expanded(entry.id());
        let range_row = expanded.then(|| {
            let axis = scale_for_dates(&entry.rate_series, visible);
            let mut bars =
                range_bars_for_dates(&entry.rate_series, visible, &axis, &self.config.range_bar);
            bars.extend(std::iter::repeat(None).take(padding));
            RangeBarRow {
                tick_labels: axis.tick_labels(),
                axis,
                bars,
                legend: default_legend(),
            }
        });

        GridRow {
            property_id: entry.id().clone(),
            property_name: entry.property.name.clone(),
            row_index,
            metrics: MetricValues {
                competitiveness: entry.property.competitiveness,
                availability: entry.property.availability,
                parity_score: entry.property.parity_score,
            },
            cells,
            expanded,
            tooltip_placement: tooltip_placement(row_index, self.config.tooltip.below_row_threshold),
            range_row,
        }
    }
}
