//! Core of the recur calendar.
//!
//! - `recurrence` expands one event definition into dated occurrences
//! - `mutate` edits or deletes one occurrence or its whole series
//!
//! Both are pure functions over the collections they are given.

pub mod date_range;
pub mod error;
pub mod event;
pub mod ids;
pub mod mutate;
pub mod recurrence;
pub mod repeat;

pub use date_range::DateRange;
pub use error::{RecurError, RecurResult};
pub use event::{
    EventChanges, EventDefinition, EventDetails, GroupId, Occurrence, OccurrenceId, parse_date,
    parse_time,
};
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use mutate::{Scope, group_members, remove, update};
pub use recurrence::{expand, expand_with};
pub use repeat::{Cadence, Frequency, Repeat};
