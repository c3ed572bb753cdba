//! Expansion of a recurring event definition into concrete occurrences.
//!
//! Monthly and yearly series never clamp: when the anchor's day does not
//! exist in a visited month (the 31st in April, Feb 29 outside leap years)
//! that month or year is skipped. The result is always in ascending date
//! order.

use chrono::{Datelike, Days, NaiveDate};

use crate::event::{EventDefinition, Occurrence};
use crate::ids::{IdSource, UuidIds};
use crate::repeat::{Frequency, Repeat};

/// Expand `def` using random UUIDs for ids.
pub fn expand(def: &EventDefinition) -> Vec<Occurrence> {
    expand_with(def, &mut UuidIds)
}

/// Expand `def`, drawing every occurrence id and the group id from `ids`.
///
/// - `Repeat::None` yields exactly the anchor date, ungrouped.
/// - A rule without an end date, or with the anchor after the end date,
///   yields nothing.
/// - Otherwise all occurrences share one freshly allocated group id.
pub fn expand_with(def: &EventDefinition, ids: &mut impl IdSource) -> Vec<Occurrence> {
    let (frequency, cadence) = match (def.repeat.frequency(), def.repeat.cadence()) {
        (Some(frequency), Some(cadence)) => (frequency, cadence),
        _ => {
            let id = ids.next_occurrence_id();
            return vec![Occurrence::from_definition(def, id, def.date, Repeat::None)];
        }
    };

    let Some(end) = cadence.end_date else {
        tracing::debug!(%frequency, "repeat rule has no end date, nothing to expand");
        return Vec::new();
    };

    if def.date > end {
        tracing::debug!(%frequency, anchor = %def.date, %end, "anchor is after end date");
        return Vec::new();
    }

    if cadence.interval != 1 {
        tracing::warn!(
            interval = cadence.interval,
            "repeat interval other than 1 is not supported, stepping by 1"
        );
    }

    let dates = match frequency {
        Frequency::Daily => step_days(def.date, end, 1),
        Frequency::Weekly => step_days(def.date, end, 7),
        Frequency::Monthly => monthly_dates(def.date, end),
        Frequency::Yearly => yearly_dates(def.date, end),
    };

    let repeat = def.repeat.with_group(ids.next_group_id());

    let occurrences: Vec<Occurrence> = dates
        .into_iter()
        .map(|date| {
            let id = ids.next_occurrence_id();
            Occurrence::from_definition(def, id, date, repeat.clone())
        })
        .collect();

    tracing::debug!(
        %frequency,
        anchor = %def.date,
        %end,
        count = occurrences.len(),
        "expanded repeat rule"
    );

    occurrences
}

/// Every `step` days from `start` through `end` inclusive.
fn step_days(start: NaiveDate, end: NaiveDate, step: u64) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = Some(start);

    while let Some(date) = current.filter(|d| *d <= end) {
        dates.push(date);
        current = date.checked_add_days(Days::new(step));
    }

    dates
}

/// The anchor's day of month in each month from the anchor's month on,
/// skipping months where that day does not exist.
fn monthly_dates(anchor: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let day = anchor.day();
    let mut dates = Vec::new();
    let (mut year, mut month) = (anchor.year(), anchor.month());

    loop {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(first) if first <= end => {}
            _ => break,
        }

        if let Some(candidate) = NaiveDate::from_ymd_opt(year, month, day) {
            if candidate > end {
                break;
            }
            dates.push(candidate);
        }

        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    dates
}

/// The anchor's month and day in each year through `end`'s year,
/// skipping years where that date does not exist.
fn yearly_dates(anchor: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let (month, day) = (anchor.month(), anchor.day());
    let mut dates = Vec::new();

    for year in anchor.year()..=end.year() {
        if let Some(candidate) = NaiveDate::from_ymd_opt(year, month, day) {
            if candidate > end {
                break;
            }
            dates.push(candidate);
        }
    }

    dates
}
