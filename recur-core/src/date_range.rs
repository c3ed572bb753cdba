//! Date range for filtering occurrences.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::RecurResult;
use crate::event::{Occurrence, parse_date};

/// Inclusive date range. `None` means unbounded in that direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Parse optional YYYY-MM-DD bounds. A missing bound is unbounded.
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> RecurResult<Self> {
        Ok(DateRange {
            from: from.map(parse_date).transpose()?,
            to: to.map(parse_date).transpose()?,
        })
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let last = first
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(date);
        DateRange::new(first, last)
    }

    /// The Sunday-to-Saturday week containing `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_sunday());
        let sunday = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
        let saturday = sunday.checked_add_days(Days::new(6)).unwrap_or(date);
        DateRange::new(sunday, saturday)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Occurrences within the range, in their original order.
    pub fn filter<'a>(&self, occurrences: &'a [Occurrence]) -> Vec<&'a Occurrence> {
        occurrences.iter().filter(|o| self.contains(o.date)).collect()
    }
}
