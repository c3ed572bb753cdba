//! Identifier allocation for occurrences and series groups.

use uuid::Uuid;

use crate::event::{GroupId, OccurrenceId};

/// Something that hands out fresh identifiers.
///
/// Every id returned must be unique for the lifetime of the collection it
/// ends up in.
pub trait IdSource {
    fn next_occurrence_id(&mut self) -> OccurrenceId;
    fn next_group_id(&mut self) -> GroupId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_occurrence_id(&mut self) -> OccurrenceId {
        OccurrenceId(Uuid::new_v4().to_string())
    }

    fn next_group_id(&mut self) -> GroupId {
        GroupId(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids: `{prefix}occ-1`, `{prefix}occ-2`, ... and `{prefix}grp-1`, ...
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    prefix: String,
    next_occurrence: u64,
    next_group: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            ..Self::default()
        }
    }
}

impl IdSource for SequentialIds {
    fn next_occurrence_id(&mut self) -> OccurrenceId {
        self.next_occurrence += 1;
        OccurrenceId(format!("{}occ-{}", self.prefix, self.next_occurrence))
    }

    fn next_group_id(&mut self) -> GroupId {
        self.next_group += 1;
        GroupId(format!("{}grp-{}", self.prefix, self.next_group))
    }
}
