use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

use crate::error::GridError;
use crate::models::{
    ComparisonEntry, ComparisonSet, PropertyId, PropertyMetadata, PropertyRateSeries, RateEvent,
    RateRecord, RateStatus,
};

/// Property ids arrive as strings or bare integers depending on the source system.
fn deserialize_property_id<'de, D>(deserializer: D) -> Result<PropertyId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => Ok(PropertyId::new(s)),
        StringOrInt::Int(i) => Ok(PropertyId::new(i.to_string())),
    }
}

/// Raw JSON structure for the page-level date range
#[derive(Debug, Default, Deserialize)]
struct RawDateRange {
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
}

/// Raw JSON structure for property metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProperty {
    #[serde(deserialize_with = "deserialize_property_id")]
    id: PropertyId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    competitiveness: Option<f64>,
    #[serde(default)]
    availability: Option<f64>,
    #[serde(default)]
    parity_score: Option<f64>,
}

/// Raw JSON structure for one comparison-set member.
/// Rate records stay untyped so one bad record cannot reject the payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComparisonEntry {
    property: RawProperty,
    #[serde(default)]
    rate_series: Vec<Value>,
    #[serde(default)]
    lowest_designation: Vec<String>,
    #[serde(default)]
    highest_designation: Vec<String>,
}

/// Container for the payload document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayload {
    #[serde(default)]
    date_range: Option<RawDateRange>,
    comparison_data: Vec<RawComparisonEntry>,
    #[serde(default)]
    selected_properties: Vec<String>,
}

/// Parsed comparison payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPayload {
    /// Requested start date, if any.
    pub start: Option<NaiveDate>,
    /// Requested end date, if any.
    pub end: Option<NaiveDate>,
    pub comparison: ComparisonSet,
    /// Property filter; empty means every property.
    pub selected_properties: Vec<String>,
}

/// Parse a comparison payload file.
pub fn parse_comparison_json(path: &Path) -> Result<ComparisonPayload> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read comparison payload: {}", path.display()))?;

    parse_comparison_json_str(&content)
        .with_context(|| format!("Failed to parse comparison payload: {}", path.display()))
}

/// Parse a comparison payload from a JSON string.
///
/// The document itself must be well formed and carry `comparisonData`.
/// Individual rate records are parsed leniently: a record without a usable
/// date is dropped, and an unknown status or unusable rate turns the record
/// into `NoData`.
pub fn parse_comparison_json_str(json: &str) -> Result<ComparisonPayload> {
    let raw: RawPayload = serde_json::from_str(json)
        .map_err(|e| GridError::payload(format!("Invalid comparison payload JSON: {}", e)))?;

    let date_range = raw.date_range.unwrap_or_default();
    let start = parse_optional_date(date_range.start.as_deref(), "dateRange.start")?;
    let end = parse_optional_date(date_range.end.as_deref(), "dateRange.end")?;

    let entries = raw
        .comparison_data
        .into_iter()
        .map(convert_entry)
        .collect();

    Ok(ComparisonPayload {
        start,
        end,
        comparison: ComparisonSet::new(entries),
        selected_properties: raw.selected_properties,
    })
}

fn parse_optional_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(text) => match parse_date(text) {
            Ok(date) => Ok(Some(date)),
            Err(e) => Err(GridError::payload(format!("Invalid {}: {:?} ({})", field, text, e)).into()),
        },
    }
}

/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (date part only).
fn parse_date(text: &str) -> Result<NaiveDate> {
    let date_part = text.split('T').next().unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").context("expected YYYY-MM-DD")
}

fn convert_entry(raw: RawComparisonEntry) -> ComparisonEntry {
    let property = PropertyMetadata {
        name: raw
            .property
            .name
            .unwrap_or_else(|| raw.property.id.to_string()),
        id: raw.property.id,
        competitiveness: raw.property.competitiveness,
        availability: raw.property.availability,
        parity_score: raw.property.parity_score,
    };

    let mut series = PropertyRateSeries::new();
    for value in &raw.rate_series {
        match convert_record(value) {
            Some(record) => series.insert(record),
            None => warn!(
                "Dropping rate record without a usable date for property {}",
                property.id
            ),
        }
    }

    let lowest = designation_dates(&raw.lowest_designation, &property.id, "lowest");
    let highest = designation_dates(&raw.highest_designation, &property.id, "highest");

    ComparisonEntry::new(property, series)
        .lowest_on(lowest)
        .highest_on(highest)
}

fn designation_dates(values: &[String], id: &PropertyId, kind: &str) -> Vec<NaiveDate> {
    values
        .iter()
        .filter_map(|text| match parse_date(text) {
            Ok(date) => Some(date),
            Err(_) => {
                warn!("Ignoring invalid {} designation {:?} for property {}", kind, text, id);
                None
            }
        })
        .collect()
}

fn number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn text(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn convert_record(value: &Value) -> Option<RateRecord> {
    let date = value
        .get("date")
        .and_then(Value::as_str)
        .and_then(|s| parse_date(s).ok())?;

    let rate = number(value.get("rate"));
    let mut status = value
        .get("status")
        .and_then(Value::as_str)
        .map(RateStatus::from_label)
        .unwrap_or(RateStatus::NoData);

    if status == RateStatus::Open && rate.is_none() {
        warn!("Open rate record on {} has no usable rate; treating as no data", date);
        status = RateStatus::NoData;
    }

    let events = value
        .get("eventList")
        .and_then(|v| serde_json::from_value::<Vec<RateEvent>>(v.clone()).ok())
        .unwrap_or_default();

    Some(RateRecord {
        date,
        status,
        rate: rate.unwrap_or(0.0),
        min_rate: number(value.get("minRate")),
        max_rate: number(value.get("maxRate")),
        channel_name: text(value.get("channelName")),
        room_product_name: text(value.get("roomProductName")),
        compset_average: number(value.get("compsetAverage")),
        events,
    })
}
