//! Per-cell rate resolution and classification.
//!
//! A cell only renders the comparison it is given: lowest/highest come from
//! the [`Designation`] attached to the comparison set, never from comparing
//! sibling rates here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ComparisonEntry, Designation, RateEvent, RateRecord, RateStatus};

/// Display class of a rate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorClass {
    Lowest,
    Highest,
    Normal,
    Closed,
    NoData,
}

impl ColorClass {
    /// Style hook used by the host UI.
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorClass::Lowest => "rate-lowest",
            ColorClass::Highest => "rate-highest",
            ColorClass::Normal => "rate-normal",
            ColorClass::Closed => "rate-closed",
            ColorClass::NoData => "rate-no-data",
        }
    }
}

/// Text used for non-numeric cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellLabels {
    #[serde(default = "default_sold_out")]
    pub sold_out: String,
    #[serde(default = "default_no_data")]
    pub no_data: String,
}

fn default_sold_out() -> String {
    "Sold Out".to_string()
}

fn default_no_data() -> String {
    "--".to_string()
}

impl Default for CellLabels {
    fn default() -> Self {
        Self {
            sold_out: default_sold_out(),
            no_data: default_no_data(),
        }
    }
}

/// Detail shown when hovering a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPayload {
    pub property_name: String,
    pub date: NaiveDate,
    pub status: RateStatus,
    pub channel_name: String,
    pub room_product_name: String,
    pub compset_average: Option<f64>,
    pub events: Vec<RateEvent>,
}

/// Fully resolved grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCell {
    pub date: NaiveDate,
    pub display_rate: String,
    pub color_class: ColorClass,
    pub compset_average: Option<f64>,
    pub tooltip: TooltipPayload,
}

/// Resolve the cell for `entry` on `date`.
///
/// Priority: missing/`NoData` record, then `Closed`, then `Open` with the
/// designation deciding between lowest, highest and normal. An open record
/// whose rate is not a finite number counts as missing.
pub fn resolve_rate_cell(
    entry: &ComparisonEntry,
    date: NaiveDate,
    designation: &Designation,
    labels: &CellLabels,
) -> RateCell {
    let record = entry.rate_series.get(date);
    let status = record.map_or(RateStatus::NoData, effective_status);

    let (display_rate, color_class) = match (status, record) {
        (RateStatus::Open, Some(record)) => {
            let id = entry.id();
            let class = if designation.is_lowest(id) {
                ColorClass::Lowest
            } else if designation.is_highest(id) {
                ColorClass::Highest
            } else {
                ColorClass::Normal
            };
            (format_rate(record.rate), class)
        }
        (RateStatus::Closed, _) => (labels.sold_out.clone(), ColorClass::Closed),
        _ => (labels.no_data.clone(), ColorClass::NoData),
    };

    let compset_average = record.and_then(|r| r.compset_average);

    RateCell {
        date,
        display_rate,
        color_class,
        compset_average,
        tooltip: TooltipPayload {
            property_name: entry.property.name.clone(),
            date,
            status,
            channel_name: record.map(|r| r.channel_name.clone()).unwrap_or_default(),
            room_product_name: record
                .map(|r| r.room_product_name.clone())
                .unwrap_or_default(),
            compset_average,
            events: record.map(|r| r.events.clone()).unwrap_or_default(),
        },
    }
}

fn effective_status(record: &RateRecord) -> RateStatus {
    match record.status {
        RateStatus::Open if !record.rate.is_finite() => RateStatus::NoData,
        status => status,
    }
}

/// Round to a whole amount and group thousands with commas ("12,345").
pub fn format_rate(rate: f64) -> String {
    let rounded = rate.round();
    if !rounded.is_finite() {
        return String::new();
    }

    let value = rounded as i64;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
