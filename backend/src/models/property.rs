use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use super::rates::RateRecord;

crate::define_id_type!(PropertyId);

/// Descriptive data for one property plus its per-property summary scalars.
///
/// The scalars fill the three fixed metric columns and are not per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    pub id: PropertyId,
    pub name: String,
    #[serde(default)]
    pub competitiveness: Option<f64>,
    #[serde(default)]
    pub availability: Option<f64>,
    #[serde(default)]
    pub parity_score: Option<f64>,
}

impl PropertyMetadata {
    pub fn new(id: impl Into<PropertyId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            competitiveness: None,
            availability: None,
            parity_score: None,
        }
    }

    pub fn with_metrics(mut self, competitiveness: f64, availability: f64, parity: f64) -> Self {
        self.competitiveness = Some(competitiveness);
        self.availability = Some(availability);
        self.parity_score = Some(parity);
        self
    }
}

/// Rate records of one property, at most one per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyRateSeries {
    records: BTreeMap<NaiveDate, RateRecord>,
}

impl PropertyRateSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records in any order; a later record for a date replaces an earlier one.
    pub fn from_records(records: impl IntoIterator<Item = RateRecord>) -> Self {
        let mut series = Self::new();
        for record in records {
            series.insert(record);
        }
        series
    }

    pub fn insert(&mut self, record: RateRecord) {
        let date = record.date;
        if self.records.insert(date, record).is_some() {
            warn!("Duplicate rate record for {}; keeping the later one", date);
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&RateRecord> {
        self.records.get(&date)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by date.
    pub fn iter(&self) -> impl Iterator<Item = &RateRecord> {
        self.records.values()
    }
}

/// One comparison-set member with the designations supplied for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    pub property: PropertyMetadata,
    pub rate_series: PropertyRateSeries,
    /// Dates on which this property holds the lowest rate of the set.
    pub lowest_dates: BTreeSet<NaiveDate>,
    /// Dates on which this property holds the highest rate of the set.
    pub highest_dates: BTreeSet<NaiveDate>,
}

impl ComparisonEntry {
    pub fn new(property: PropertyMetadata, rate_series: PropertyRateSeries) -> Self {
        Self {
            property,
            rate_series,
            lowest_dates: BTreeSet::new(),
            highest_dates: BTreeSet::new(),
        }
    }

    pub fn lowest_on(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.lowest_dates.extend(dates);
        self
    }

    pub fn highest_on(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.highest_dates.extend(dates);
        self
    }

    pub fn id(&self) -> &PropertyId {
        &self.property.id
    }
}

/// Which members hold the lowest and highest rate on one date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    pub lowest: Option<PropertyId>,
    pub highest: Option<PropertyId>,
}

impl Designation {
    pub fn is_lowest(&self, id: &PropertyId) -> bool {
        self.lowest.as_ref() == Some(id)
    }

    pub fn is_highest(&self, id: &PropertyId) -> bool {
        self.highest.as_ref() == Some(id)
    }
}

/// Group of properties compared against one subject property.
///
/// Designations are read from the entries as supplied; the set never derives
/// lowest/highest from the rates themselves. At most one member holds each
/// designation per date: when the supplier names two, the first entry wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSet {
    entries: Vec<ComparisonEntry>,
    designations: BTreeMap<NaiveDate, Designation>,
}

impl ComparisonSet {
    pub fn new(entries: Vec<ComparisonEntry>) -> Self {
        let mut designations: BTreeMap<NaiveDate, Designation> = BTreeMap::new();

        for entry in &entries {
            for date in &entry.lowest_dates {
                let slot = designations.entry(*date).or_default();
                match &slot.lowest {
                    None => slot.lowest = Some(entry.id().clone()),
                    Some(existing) if existing != entry.id() => warn!(
                        "Property {} also designated lowest on {}; keeping {}",
                        entry.id(),
                        date,
                        existing
                    ),
                    Some(_) => {}
                }
            }
            for date in &entry.highest_dates {
                let slot = designations.entry(*date).or_default();
                match &slot.highest {
                    None => slot.highest = Some(entry.id().clone()),
                    Some(existing) if existing != entry.id() => warn!(
                        "Property {} also designated highest on {}; keeping {}",
                        entry.id(),
                        date,
                        existing
                    ),
                    Some(_) => {}
                }
            }
        }

        Self {
            entries,
            designations,
        }
    }

    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: &PropertyId) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Designation for `date`; empty when nobody is designated.
    pub fn designation(&self, date: NaiveDate) -> Designation {
        self.designations.get(&date).cloned().unwrap_or_default()
    }

    /// Entries filtered by an optional selection, preserving input order.
    /// An empty selection keeps every entry.
    pub fn selected<'a>(&'a self, selected: &'a [String]) -> impl Iterator<Item = &'a ComparisonEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| selected.is_empty() || selected.iter().any(|s| s == e.id().as_str()))
    }
}
