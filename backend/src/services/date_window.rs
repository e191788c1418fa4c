//! Date window generation.

use chrono::{Days, NaiveDate};
use log::debug;

use crate::error::{GridError, GridResult};
use crate::models::{DateRange, DateWindow, DayColumn};

/// Build one column per day in `[start, end]`.
///
/// Fails with [`GridError::InvalidRange`] when `start > end`.
pub fn generate_date_window(start: NaiveDate, end: NaiveDate) -> GridResult<DateWindow> {
    if start > end {
        return Err(GridError::InvalidRange { start, end });
    }

    let columns = start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(DayColumn::new)
        .collect();

    Ok(DateWindow::from_columns(columns))
}

/// Build the window for a [`DateRange`].
pub fn window_for_range(range: &DateRange) -> GridResult<DateWindow> {
    generate_date_window(range.start, range.end)
}

/// Build a window from optional bounds.
///
/// Missing bounds are filled from `today` with a window of `default_days`:
/// - neither bound: `[today, today + default_days - 1]`
/// - start only: `[start, start + default_days - 1]`
/// - end only: `[end - default_days + 1, end]`
///
/// A zero `default_days` is treated as one day.
pub fn resolve_date_window(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
    default_days: u32,
) -> GridResult<DateWindow> {
    let span = Days::new(u64::from(default_days.max(1) - 1));

    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        (Some(start), None) => {
            debug!("No end date supplied; using {} days from {}", default_days, start);
            (start, start.checked_add_days(span).unwrap_or(NaiveDate::MAX))
        }
        (None, Some(end)) => {
            debug!("No start date supplied; using {} days up to {}", default_days, end);
            (end.checked_sub_days(span).unwrap_or(NaiveDate::MIN), end)
        }
        (None, None) => {
            debug!("No date range supplied; using {} days from {}", default_days, today);
            (today, today.checked_add_days(span).unwrap_or(NaiveDate::MAX))
        }
    };

    generate_date_window(start, end)
}
