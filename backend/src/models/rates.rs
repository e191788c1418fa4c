use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shopping outcome for one property on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateStatus {
    Open,
    Closed,
    NoData,
}

impl RateStatus {
    /// Parse the status strings the rate shopping service emits.
    /// Unknown values are treated as missing data.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "open" | "o" | "available" => RateStatus::Open,
            "closed" | "c" | "soldout" | "sold_out" | "sold out" => RateStatus::Closed,
            _ => RateStatus::NoData,
        }
    }
}

/// A named event affecting demand on a date (conference, holiday, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEvent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One property's shopped rate for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub date: NaiveDate,
    pub status: RateStatus,
    pub rate: f64,
    /// Lower edge of the property's own rate band for the date.
    #[serde(default)]
    pub min_rate: Option<f64>,
    /// Upper edge of the property's own rate band for the date.
    #[serde(default)]
    pub max_rate: Option<f64>,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub room_product_name: String,
    #[serde(default)]
    pub compset_average: Option<f64>,
    #[serde(default)]
    pub events: Vec<RateEvent>,
}

impl RateRecord {
    pub fn open(date: NaiveDate, rate: f64) -> Self {
        Self {
            date,
            status: RateStatus::Open,
            rate,
            min_rate: None,
            max_rate: None,
            channel_name: String::new(),
            room_product_name: String::new(),
            compset_average: None,
            events: Vec::new(),
        }
    }

    pub fn closed(date: NaiveDate) -> Self {
        Self {
            status: RateStatus::Closed,
            ..Self::open(date, 0.0)
        }
    }

    pub fn no_data(date: NaiveDate) -> Self {
        Self {
            status: RateStatus::NoData,
            ..Self::open(date, 0.0)
        }
    }

    pub fn with_band(mut self, min_rate: f64, max_rate: f64) -> Self {
        self.min_rate = Some(min_rate);
        self.max_rate = Some(max_rate);
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel_name = channel.into();
        self
    }

    pub fn with_room_product(mut self, room: impl Into<String>) -> Self {
        self.room_product_name = room.into();
        self
    }

    pub fn with_compset_average(mut self, average: f64) -> Self {
        self.compset_average = Some(average);
        self
    }

    /// Whether the record contributes a plottable rate.
    pub fn has_positive_rate(&self) -> bool {
        self.rate.is_finite() && self.rate > 0.0
    }

    /// Open with a positive rate. Only these records feed the range-bar row;
    /// sold-out and missing dates keep whatever rate the feed sent but are
    /// never plotted.
    pub fn is_open_with_rate(&self) -> bool {
        self.status == RateStatus::Open && self.has_positive_rate()
    }

    /// The record's rate band as `(min, max)`.
    ///
    /// Missing edges collapse onto `rate`; reversed edges are reordered.
    pub fn band(&self) -> (f64, f64) {
        let lo = self.min_rate.filter(|v| v.is_finite()).unwrap_or(self.rate);
        let hi = self.max_rate.filter(|v| v.is_finite()).unwrap_or(self.rate);
        if lo <= hi {
            (lo, hi)
        } else {
            (hi, lo)
        }
    }
}
