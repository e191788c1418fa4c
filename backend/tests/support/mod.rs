#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::NaiveDate;
use rate_grid::models::{
    ComparisonEntry, ComparisonSet, PropertyMetadata, PropertyRateSeries, RateRecord,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid January date")
}

/// A property with an open rate on each of `rates`' days, starting 2024-01-01.
pub fn property_with_rates(id: &str, rates: &[f64]) -> ComparisonEntry {
    let records = rates
        .iter()
        .enumerate()
        .map(|(i, rate)| RateRecord::open(jan(i as u32 + 1), *rate));
    ComparisonEntry::new(
        PropertyMetadata::new(id, format!("Hotel {}", id)).with_metrics(0.75, 0.5, 1.0),
        PropertyRateSeries::from_records(records),
    )
}

/// Three competitors over the first week of January with alternating designations.
pub fn week_comparison() -> ComparisonSet {
    ComparisonSet::new(vec![
        property_with_rates("harbour", &[189.0, 205.0, 195.0, 210.0, 199.0, 240.0, 260.0])
            .lowest_on([jan(1), jan(4)])
            .highest_on([jan(6)]),
        property_with_rates("quayside", &[220.0, 199.0, 215.0, 230.0, 225.0, 235.0, 255.0])
            .lowest_on([jan(2)])
            .highest_on([jan(1), jan(4)]),
        property_with_rates("lighthouse", &[205.0, 230.0, 210.0, 220.0, 1250.0, 230.0, 250.0])
            .lowest_on([jan(3), jan(5), jan(6), jan(7)])
            .highest_on([jan(2), jan(3), jan(5), jan(7)]),
    ])
}
