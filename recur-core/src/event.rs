//! Event definitions and the occurrences materialized from them.
//!
//! An `EventDefinition` is what a user submits. An `Occurrence` is one
//! concrete calendar entry; every field except id, date and repeat is
//! carried over from the definition unchanged.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{RecurError, RecurResult};
use crate::repeat::Repeat;

/// Reminder lead time used when none is given.
pub const DEFAULT_NOTIFICATION_MINUTES: u32 = 10;

/// Unique, stable identifier of one occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceId(pub String);

/// Token shared by every occurrence of one expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub String);

impl fmt::Display for OccurrenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OccurrenceId {
    fn from(s: &str) -> Self {
        OccurrenceId(s.to_string())
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        GroupId(s.to_string())
    }
}

/// Fields copied verbatim from a definition to each of its occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub title: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    /// Minutes before the start to remind the user
    #[serde(default = "default_notification_time")]
    pub notification_time: u32,
}

fn default_notification_time() -> u32 {
    DEFAULT_NOTIFICATION_MINUTES
}

/// The form a user submits to create a (possibly recurring) event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    /// Anchor date; the first occurrence of a series
    pub date: NaiveDate,
    #[serde(flatten)]
    pub details: EventDetails,
    #[serde(default)]
    pub repeat: Repeat,
}

impl EventDefinition {
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        EventDefinition {
            date,
            details: EventDetails {
                title: title.into(),
                start_time,
                end_time,
                description: String::new(),
                location: String::new(),
                category: String::new(),
                notification_time: DEFAULT_NOTIFICATION_MINUTES,
            },
            repeat: Repeat::None,
        }
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.details.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.details.location = location.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.details.category = category.into();
        self
    }

    pub fn with_notification_time(mut self, minutes: u32) -> Self {
        self.details.notification_time = minutes;
        self
    }

    /// Check the definition the way the event form does before submitting.
    pub fn validate(&self) -> RecurResult<()> {
        if self.details.title.trim().is_empty() {
            return Err(RecurError::MissingTitle);
        }

        if self.details.start_time >= self.details.end_time {
            return Err(RecurError::InvalidTimeRange {
                start: self.details.start_time.format("%H:%M").to_string(),
                end: self.details.end_time.format("%H:%M").to_string(),
            });
        }

        if let Some(cadence) = self.repeat.cadence()
            && cadence.interval == 0
        {
            return Err(RecurError::InvalidInterval(cadence.interval));
        }

        Ok(())
    }
}

/// A materialized calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: OccurrenceId,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub details: EventDetails,
    pub repeat: Repeat,
}

impl Occurrence {
    /// Build an occurrence from a definition, overriding only id, date and repeat.
    pub fn from_definition(
        def: &EventDefinition,
        id: OccurrenceId,
        date: NaiveDate,
        repeat: Repeat,
    ) -> Self {
        Occurrence {
            id,
            date,
            details: def.details.clone(),
            repeat,
        }
    }

    /// Copy of this occurrence with `changes` applied. Id and repeat are kept.
    pub fn with_changes(&self, changes: &EventChanges) -> Self {
        let mut details = self.details.clone();
        if let Some(title) = &changes.title {
            details.title = title.clone();
        }
        if let Some(start_time) = changes.start_time {
            details.start_time = start_time;
        }
        if let Some(end_time) = changes.end_time {
            details.end_time = end_time;
        }
        if let Some(description) = &changes.description {
            details.description = description.clone();
        }
        if let Some(location) = &changes.location {
            details.location = location.clone();
        }
        if let Some(category) = &changes.category {
            details.category = category.clone();
        }
        if let Some(minutes) = changes.notification_time {
            details.notification_time = minutes;
        }

        Occurrence {
            id: self.id.clone(),
            date: changes.date.unwrap_or(self.date),
            details,
            repeat: self.repeat.clone(),
        }
    }

    /// Same occurrence, no longer part of any series.
    pub fn detached(self) -> Self {
        Occurrence {
            repeat: Repeat::None,
            ..self
        }
    }

    pub fn group_id(&self) -> Option<&GroupId> {
        self.repeat.group_id()
    }

    /// Whether this occurrence still belongs to a series (shown with a repeat marker).
    pub fn is_recurring(&self) -> bool {
        self.group_id().is_some()
    }
}

/// Partial field changes for an edit. `None` leaves the field as it is.
///
/// Series membership is not part of a change set; the edit scope decides it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "hhmm::option"
    )]
    pub start_time: Option<NaiveTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "hhmm::option"
    )]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_time: Option<u32>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        *self == EventChanges::default()
    }
}

/// Parse a `YYYY-MM-DD` date as it crosses the boundary.
pub fn parse_date(s: &str) -> RecurResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| RecurError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` time as it crosses the boundary.
pub fn parse_time(s: &str) -> RecurResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| RecurError::InvalidTime(s.to_string()))
}

/// `HH:MM` serde representation for times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            let s = Option::<String>::deserialize(deserializer)?;
            s.map(|s| NaiveTime::parse_from_str(&s, super::FORMAT))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}
