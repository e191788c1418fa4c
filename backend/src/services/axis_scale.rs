//! Axis scaling for the expanded range-bar row.
//!
//! The vertical scale is derived from the rates visible on the current page
//! only, so paging rescales the axis. All zero-width ranges resolve to fixed
//! midpoint/zero geometry instead of dividing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DayColumn, PropertyRateSeries};

/// Fraction of the range between the outer ticks and the inner ones.
const INNER_TICK_FRACTION: f64 = 0.33;

/// Display unit chosen from the largest visible rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleUnit {
    Units,
    Thousands,
    Millions,
}

impl ScaleUnit {
    pub fn for_max(max: f64) -> Self {
        if max >= 1_000_000.0 {
            ScaleUnit::Millions
        } else if max >= 1_000.0 {
            ScaleUnit::Thousands
        } else {
            ScaleUnit::Units
        }
    }

    pub fn divisor(&self) -> f64 {
        match self {
            ScaleUnit::Units => 1.0,
            ScaleUnit::Thousands => 1_000.0,
            ScaleUnit::Millions => 1_000_000.0,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            ScaleUnit::Units => "",
            ScaleUnit::Thousands => "K",
            ScaleUnit::Millions => "M",
        }
    }
}

/// Vertical scale of one property's range-bar row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub min_rate: f64,
    pub max_rate: f64,
    pub unit: ScaleUnit,
    /// Ascending, strictly increasing unless `is_empty`.
    pub ticks: [i64; 4],
    /// No positive rate was visible; ticks are zero and render blank.
    pub is_empty: bool,
}

impl AxisScale {
    pub fn empty() -> Self {
        Self {
            min_rate: 0.0,
            max_rate: 0.0,
            unit: ScaleUnit::Units,
            ticks: [0; 4],
            is_empty: true,
        }
    }

    pub fn range(&self) -> f64 {
        self.max_rate - self.min_rate
    }

    pub fn divisor(&self) -> f64 {
        self.unit.divisor()
    }

    pub fn suffix(&self) -> &'static str {
        self.unit.suffix()
    }

    /// Tick labels bottom to top ("100K"); blank for an empty scale.
    pub fn tick_labels(&self) -> [String; 4] {
        if self.is_empty {
            return Default::default();
        }
        self.ticks.map(|t| format!("{}{}", t, self.suffix()))
    }
}

/// Compute the scale over `rates`, ignoring anything not finite and positive.
pub fn compute_axis_scale<I>(rates: I) -> AxisScale
where
    I: IntoIterator<Item = f64>,
{
    let mut bounds: Option<(f64, f64)> = None;
    for rate in rates.into_iter().filter(|r| r.is_finite() && *r > 0.0) {
        bounds = Some(match bounds {
            None => (rate, rate),
            Some((lo, hi)) => (lo.min(rate), hi.max(rate)),
        });
    }

    let Some((global_min, global_max)) = bounds else {
        return AxisScale::empty();
    };

    let unit = ScaleUnit::for_max(global_max);
    let divisor = unit.divisor();
    let range = global_max - global_min;

    let raw = [
        global_min,
        global_min + INNER_TICK_FRACTION * range,
        global_max - INNER_TICK_FRACTION * range,
        global_max,
    ];

    AxisScale {
        min_rate: global_min,
        max_rate: global_max,
        unit,
        ticks: dedupe_ticks(raw.map(|v| (v / divisor).floor() as i64)),
        is_empty: false,
    }
}

/// Sort ticks and bump each one past its predecessor by steps of 1.
///
/// Narrow ranges collapse several ticks onto one value after division; the
/// sequential bump keeps the labels apart without redistributing them.
pub fn dedupe_ticks(mut ticks: [i64; 4]) -> [i64; 4] {
    ticks.sort_unstable();
    for i in 1..ticks.len() {
        while ticks[i] <= ticks[i - 1] {
            ticks[i] += 1;
        }
    }
    ticks
}

/// Scale for the open, positively priced records of `series` on the given dates.
pub fn scale_for_dates(series: &PropertyRateSeries, dates: &[DayColumn]) -> AxisScale {
    compute_axis_scale(
        dates
            .iter()
            .filter_map(|c| series.get(c.date))
            .filter(|r| r.is_open_with_rate())
            .map(|r| r.rate),
    )
}

/// Pixel constants of the range-bar track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBarConfig {
    /// Pixels corresponding to the full visible rate range.
    #[serde(default = "default_track_px")]
    pub track_px: f64,
    /// Tallest bar drawn.
    #[serde(default = "default_max_bar_px")]
    pub max_bar_px: f64,
    /// Lowest bar bottom.
    #[serde(default = "default_min_offset_px")]
    pub min_offset_px: f64,
    /// Highest bar top.
    #[serde(default = "default_max_offset_px")]
    pub max_offset_px: f64,
}

fn default_track_px() -> f64 {
    120.0
}

fn default_max_bar_px() -> f64 {
    100.0
}

fn default_min_offset_px() -> f64 {
    10.0
}

fn default_max_offset_px() -> f64 {
    110.0
}

impl Default for RangeBarConfig {
    fn default() -> Self {
        Self {
            track_px: default_track_px(),
            max_bar_px: default_max_bar_px(),
            min_offset_px: default_min_offset_px(),
            max_offset_px: default_max_offset_px(),
        }
    }
}

impl RangeBarConfig {
    pub fn midpoint_px(&self) -> f64 {
        (self.min_offset_px + self.max_offset_px) / 2.0
    }
}

/// Placement of one range bar, in pixels from the bottom of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBarGeometry {
    pub height_px: f64,
    pub bottom_offset_px: f64,
    /// Current-rate marker, measured from the bottom of the bar.
    pub marker_px: f64,
}

/// One drawn range bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBar {
    pub date: NaiveDate,
    pub min_rate: f64,
    pub max_rate: f64,
    pub current_rate: f64,
    pub geometry: RangeBarGeometry,
    pub compset_average: Option<f64>,
    /// Compset-average line, measured from the bottom of the track.
    pub compset_px: Option<f64>,
}

/// Clamp that maps NaN to the lower bound and tolerates `hi < lo`.
fn clamp_px(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        return lo;
    }
    value.max(lo).min(hi.max(lo))
}

/// Geometry of the bar spanning `[band_min, band_max]` with a marker at `current`.
pub fn compute_range_bar(
    band_min: f64,
    band_max: f64,
    current: f64,
    scale: &AxisScale,
    config: &RangeBarConfig,
) -> RangeBarGeometry {
    let (band_min, band_max) = if band_min <= band_max {
        (band_min, band_max)
    } else {
        (band_max, band_min)
    };

    let global_range = scale.range();
    if scale.is_empty || !(global_range.is_finite() && global_range > 0.0) {
        return RangeBarGeometry {
            height_px: 0.0,
            bottom_offset_px: config.midpoint_px(),
            marker_px: 0.0,
        };
    }

    let height_px = clamp_px(
        (band_max - band_min) / global_range * config.track_px,
        0.0,
        config.max_bar_px,
    );
    let bottom_offset_px = clamp_px(
        (band_min - scale.min_rate) / global_range * config.track_px,
        config.min_offset_px,
        config.max_offset_px - height_px,
    );

    let band_width = band_max - band_min;
    let marker_px = if band_width > 0.0 && current.is_finite() {
        clamp_px((current - band_min) / band_width * height_px, 0.0, height_px)
    } else {
        height_px / 2.0
    };

    RangeBarGeometry {
        height_px,
        bottom_offset_px,
        marker_px,
    }
}

/// Height of the compset-average line on the track.
///
/// `None` for a missing or non-positive average. A degenerate scale puts the
/// line on the track midpoint, like a flat bar.
pub fn compset_line_px(average: f64, scale: &AxisScale, config: &RangeBarConfig) -> Option<f64> {
    if !(average.is_finite() && average > 0.0) {
        return None;
    }

    let global_range = scale.range();
    if scale.is_empty || !(global_range.is_finite() && global_range > 0.0) {
        return Some(config.midpoint_px());
    }

    Some(clamp_px(
        (average - scale.min_rate) / global_range * config.track_px,
        config.min_offset_px,
        config.max_offset_px,
    ))
}

/// Range bars for every visible date with an open, positive rate; `None` elsewhere.
pub fn range_bars_for_dates(
    series: &PropertyRateSeries,
    dates: &[DayColumn],
    scale: &AxisScale,
    config: &RangeBarConfig,
) -> Vec<Option<RangeBar>> {
    dates
        .iter()
        .map(|column| {
            let record = series.get(column.date).filter(|r| r.is_open_with_rate())?;
            let (min_rate, max_rate) = record.band();
            Some(RangeBar {
                date: column.date,
                min_rate,
                max_rate,
                current_rate: record.rate,
                geometry: compute_range_bar(min_rate, max_rate, record.rate, scale, config),
                compset_average: record.compset_average,
                compset_px: record
                    .compset_average
                    .and_then(|avg| compset_line_px(avg, scale, config)),
            })
        })
        .collect()
}
