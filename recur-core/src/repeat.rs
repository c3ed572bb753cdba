//! Repeat rules attached to event definitions and occurrences.
//!
//! `Repeat::None` is the only variant without a cadence, so an occurrence
//! that left its series can never still carry a group id.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecurError;
use crate::event::GroupId;

/// Interval used when none is given.
pub const DEFAULT_INTERVAL: u32 = 1;

fn default_interval() -> u32 {
    DEFAULT_INTERVAL
}

/// The calendar unit a series advances by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    fn rrule_name(self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = RecurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(RecurError::UnknownFrequency(other.to_string())),
        }
    }
}

/// How often and until when a series repeats, plus the series it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cadence {
    /// Reserved for "every N units"; expansion always steps by one unit.
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Inclusive last date. A cadence without one cannot be expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Shared by every occurrence produced by one expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

impl Cadence {
    pub fn until(end_date: Option<NaiveDate>) -> Self {
        Cadence {
            interval: DEFAULT_INTERVAL,
            end_date,
            group_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Repeat {
    #[default]
    None,
    Daily(Cadence),
    Weekly(Cadence),
    Monthly(Cadence),
    Yearly(Cadence),
}

impl Repeat {
    pub fn every(frequency: Frequency, end_date: Option<NaiveDate>) -> Self {
        Self::from_parts(frequency, Cadence::until(end_date))
    }

    pub fn from_parts(frequency: Frequency, cadence: Cadence) -> Self {
        match frequency {
            Frequency::Daily => Repeat::Daily(cadence),
            Frequency::Weekly => Repeat::Weekly(cadence),
            Frequency::Monthly => Repeat::Monthly(cadence),
            Frequency::Yearly => Repeat::Yearly(cadence),
        }
    }

    pub fn frequency(&self) -> Option<Frequency> {
        match self {
            Repeat::None => None,
            Repeat::Daily(_) => Some(Frequency::Daily),
            Repeat::Weekly(_) => Some(Frequency::Weekly),
            Repeat::Monthly(_) => Some(Frequency::Monthly),
            Repeat::Yearly(_) => Some(Frequency::Yearly),
        }
    }

    pub fn cadence(&self) -> Option<&Cadence> {
        match self {
            Repeat::None => None,
            Repeat::Daily(c) | Repeat::Weekly(c) | Repeat::Monthly(c) | Repeat::Yearly(c) => {
                Some(c)
            }
        }
    }

    pub fn group_id(&self) -> Option<&GroupId> {
        self.cadence().and_then(|c| c.group_id.as_ref())
    }

    /// Same rule, tagged as a member of `group`. `Repeat::None` stays ungrouped.
    pub fn with_group(&self, group: GroupId) -> Self {
        match (self.frequency(), self.cadence()) {
            (Some(frequency), Some(cadence)) => Self::from_parts(
                frequency,
                Cadence {
                    group_id: Some(group),
                    ..cadence.clone()
                },
            ),
            _ => Repeat::None,
        }
    }

    /// Render this rule as iCalendar DTSTART/RRULE lines anchored at `anchor`.
    ///
    /// Returns `None` for non-repeating rules and rules without an end date.
    /// RFC 5545 drops recurrences that fall on non-existent days (e.g. the
    /// 31st of a 30-day month), which matches how `expand` skips them.
    pub fn to_rrule(&self, anchor: NaiveDate) -> Option<String> {
        let frequency = self.frequency()?;
        let cadence = self.cadence()?;
        let until = cadence.end_date?;

        let lines = [
            format!("DTSTART;VALUE=DATE:{}", anchor.format("%Y%m%d")),
            format!(
                "RRULE:FREQ={};INTERVAL={};UNTIL={}",
                frequency.rrule_name(),
                cadence.interval,
                until.format("%Y%m%d")
            ),
        ];

        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_frequency_from_str() {
        assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!(" Weekly ".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!(
            "fortnightly".parse::<Frequency>(),
            Err(RecurError::UnknownFrequency("fortnightly".to_string()))
        );
    }

    #[test]
    fn test_with_group_keeps_cadence() {
        let repeat = Repeat::every(Frequency::Monthly, Some(date(2025, 12, 31)));
        let grouped = repeat.with_group(GroupId::from("grp-1"));

        assert_eq!(grouped.frequency(), Some(Frequency::Monthly));
        assert_eq!(grouped.group_id(), Some(&GroupId::from("grp-1")));
        assert_eq!(grouped.cadence().unwrap().end_date, Some(date(2025, 12, 31)));
        assert_eq!(grouped.cadence().unwrap().interval, 1);
    }

    #[test]
    fn test_none_never_takes_a_group() {
        let grouped = Repeat::None.with_group(GroupId::from("grp-1"));
        assert_eq!(grouped, Repeat::None);
        assert!(grouped.group_id().is_none());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let repeat = Repeat::every(Frequency::Weekly, Some(date(2025, 3, 1)))
            .with_group(GroupId::from("grp-7"));
        let json = serde_json::to_value(&repeat).unwrap();

        assert_eq!(json["type"], "weekly");
        assert_eq!(json["interval"], 1);
        assert_eq!(json["endDate"], "2025-03-01");
        assert_eq!(json["groupId"], "grp-7");

        let none = serde_json::to_value(Repeat::None).unwrap();
        assert_eq!(none, serde_json::json!({ "type": "none" }));
    }

    #[test]
    fn test_deserializes_missing_interval_as_one() {
        let repeat: Repeat =
            serde_json::from_str(r#"{"type":"daily","endDate":"2025-01-10"}"#).unwrap();
        assert_eq!(repeat.cadence().unwrap().interval, DEFAULT_INTERVAL);
        assert!(repeat.group_id().is_none());
    }

    #[test]
    fn test_to_rrule() {
        let repeat = Repeat::every(Frequency::Monthly, Some(date(2025, 12, 31)));
        assert_eq!(
            repeat.to_rrule(date(2025, 1, 31)).unwrap(),
            "DTSTART;VALUE=DATE:20250131\nRRULE:FREQ=MONTHLY;INTERVAL=1;UNTIL=20251231"
        );
    }

    #[test]
    fn test_to_rrule_requires_end_date() {
        assert!(Repeat::every(Frequency::Daily, None).to_rrule(date(2025, 1, 1)).is_none());
        assert!(Repeat::None.to_rrule(date(2025, 1, 1)).is_none());
    }
}
