use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive calendar range selected on the page-level date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of calendar days covered, or `None` when `start > end`.
    pub fn day_count(&self) -> Option<usize> {
        let days = (self.end - self.start).num_days();
        if days < 0 {
            None
        } else {
            Some(days as usize + 1)
        }
    }
}

/// One date column of the grid header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    /// Three-letter weekday abbreviation ("Mon").
    pub weekday_label: String,
    /// Day and month abbreviation ("14 Jan").
    pub display_label: String,
}

impl DayColumn {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weekday_label: date.format("%a").to_string(),
            display_label: format!("{} {}", date.day(), date.format("%b")),
        }
    }
}

/// Ordered sequence of consecutive days, one column each.
///
/// Always strictly increasing by one calendar day; only
/// [`crate::services::date_window`] constructs non-empty windows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateWindow(Vec<DayColumn>);

impl DateWindow {
    pub(crate) fn from_columns(columns: Vec<DayColumn>) -> Self {
        Self(columns)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn columns(&self) -> &[DayColumn] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&DayColumn> {
        self.0.get(index)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.0.first().map(|c| c.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.0.last().map(|c| c.date)
    }

    /// Columns in `[start, start + len)`, truncated at the end of the window.
    pub fn slice(&self, start: usize, len: usize) -> &[DayColumn] {
        let start = start.min(self.0.len());
        let end = start.saturating_add(len).min(self.0.len());
        &self.0[start..end]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayColumn> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a DateWindow {
    type Item = &'a DayColumn;
    type IntoIter = std::slice::Iter<'a, DayColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
