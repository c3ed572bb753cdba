//! Editing and deleting occurrences of a series.
//!
//! Both operations take the whole collection and return a new one; the
//! input is never modified. An id that matches nothing returns the input
//! unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecurError;
use crate::event::{EventChanges, GroupId, Occurrence, OccurrenceId};

/// Which occurrences an edit or delete reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// This occurrence only
    #[default]
    Single,
    /// Every occurrence in the target's series
    All,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Single => write!(f, "single"),
            Scope::All => write!(f, "all"),
        }
    }
}

impl FromStr for Scope {
    type Err = RecurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(Scope::Single),
            "all" => Ok(Scope::All),
            other => Err(RecurError::UnknownScope(other.to_string())),
        }
    }
}

/// Occurrences belonging to `group`, in collection order.
pub fn group_members<'a>(
    occurrences: &'a [Occurrence],
    group: &'a GroupId,
) -> impl Iterator<Item = &'a Occurrence> + 'a {
    occurrences
        .iter()
        .filter(move |o| o.group_id() == Some(group))
}

/// Apply `changes` to the target occurrence, or to its whole series.
///
/// - Target without a group: only the target changes, whatever the scope, and
///   its repeat rule is left as it is.
/// - `Scope::Single` on a grouped target: the target changes and leaves its
///   series for good (`Repeat::None`). Siblings are untouched.
/// - `Scope::All` on a grouped target: every member changes and stays grouped.
pub fn update(
    occurrences: &[Occurrence],
    target: &OccurrenceId,
    changes: &EventChanges,
    scope: Scope,
) -> Vec<Occurrence> {
    let Some(found) = occurrences.iter().find(|o| &o.id == target) else {
        tracing::debug!(id = %target, "update target not found, leaving occurrences unchanged");
        return occurrences.to_vec();
    };

    match (found.group_id().cloned(), scope) {
        (Some(group), Scope::All) => {
            tracing::debug!(id = %target, %group, "updating every occurrence in series");
            occurrences
                .iter()
                .map(|o| {
                    if o.group_id() == Some(&group) {
                        o.with_changes(changes)
                    } else {
                        o.clone()
                    }
                })
                .collect()
        }
        (group, _) => {
            let detach = group.is_some();
            if detach {
                tracing::debug!(id = %target, "detaching occurrence from its series");
            }
            occurrences
                .iter()
                .map(|o| {
                    if &o.id != target {
                        o.clone()
                    } else if detach {
                        o.with_changes(changes).detached()
                    } else {
                        o.with_changes(changes)
                    }
                })
                .collect()
        }
    }
}

/// Remove the target occurrence, or its whole series.
///
/// `Scope::All` on a target without a group removes just the target.
pub fn remove(occurrences: &[Occurrence], target: &OccurrenceId, scope: Scope) -> Vec<Occurrence> {
    let Some(found) = occurrences.iter().find(|o| &o.id == target) else {
        tracing::debug!(id = %target, "delete target not found, leaving occurrences unchanged");
        return occurrences.to_vec();
    };

    let remaining: Vec<Occurrence> = match (found.group_id(), scope) {
        (Some(group), Scope::All) => occurrences
            .iter()
            .filter(|o| o.group_id() != Some(group))
            .cloned()
            .collect(),
        _ => occurrences
            .iter()
            .filter(|o| &o.id != target)
            .cloned()
            .collect(),
    };

    tracing::debug!(
        id = %target,
        %scope,
        removed = occurrences.len() - remaining.len(),
        "deleted occurrences"
    );

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDefinition, parse_date, parse_time};
    use crate::ids::SequentialIds;
    use crate::recurrence::expand_with;
    use crate::repeat::{Frequency, Repeat};

    /// Five daily occurrences in grp-1 (occ-1..occ-5) followed by a standalone
    /// lunch (occ-6) and three weekly occurrences in grp-2 (occ-7..occ-9).
    fn make_test_collection() -> Vec<Occurrence> {
        let mut ids = SequentialIds::new();
        let daily = EventDefinition::new(
            "Standup",
            parse_date("2025-01-01").unwrap(),
            parse_time("09:00").unwrap(),
            parse_time("09:15").unwrap(),
        )
        .with_repeat(Repeat::every(Frequency::Daily, parse_date("2025-01-05").ok()));
        let lunch = EventDefinition::new(
            "Lunch",
            parse_date("2025-01-02").unwrap(),
            parse_time("12:00").unwrap(),
            parse_time("13:00").unwrap(),
        );
        let weekly = EventDefinition::new(
            "Planning",
            parse_date("2025-01-06").unwrap(),
            parse_time("10:00").unwrap(),
            parse_time("11:00").unwrap(),
        )
        .with_repeat(Repeat::every(Frequency::Weekly, parse_date("2025-01-20").ok()));

        let mut occurrences = expand_with(&daily, &mut ids);
        occurrences.extend(expand_with(&lunch, &mut ids));
        occurrences.extend(expand_with(&weekly, &mut ids));
        occurrences
    }

    fn rename(title: &str) -> EventChanges {
        EventChanges {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn find<'a>(occurrences: &'a [Occurrence], id: &str) -> &'a Occurrence {
        occurrences
            .iter()
            .find(|o| o.id.0 == id)
            .unwrap_or_else(|| panic!("occurrence {id} missing"))
    }

    #[test]
    fn test_collection_fixture_shape() {
        let occurrences = make_test_collection();
        assert_eq!(occurrences.len(), 9);
        assert_eq!(group_members(&occurrences, &GroupId::from("grp-1")).count(), 5);
        assert_eq!(group_members(&occurrences, &GroupId::from("grp-2")).count(), 3);
        assert!(!find(&occurrences, "occ-6").is_recurring());
    }

    #[test]
    fn test_update_single_detaches_target() {
        let before = make_test_collection();
        let after = update(&before, &OccurrenceId::from("occ-3"), &rename("1:1"), Scope::Single);

        let target = find(&after, "occ-3");
        assert_eq!(target.details.title, "1:1");
        assert_eq!(target.repeat, Repeat::None);
        assert!(target.group_id().is_none());
        assert_eq!(target.date, find(&before, "occ-3").date);

        for (old, new) in before.iter().zip(&after) {
            if old.id.0 != "occ-3" {
                assert_eq!(old, new);
            }
        }
        assert_eq!(group_members(&after, &GroupId::from("grp-1")).count(), 4);
    }

    #[test]
    fn test_update_all_changes_whole_series() {
        let before = make_test_collection();
        let after = update(&before, &OccurrenceId::from("occ-2"), &rename("Sync"), Scope::All);

        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(&after) {
            if old.group_id() == Some(&GroupId::from("grp-1")) {
                assert_eq!(new.details.title, "Sync");
                assert_eq!(new.repeat, old.repeat);
                assert_eq!(new.id, old.id);
                assert_eq!(new.date, old.date);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_update_all_after_detach_skips_detached() {
        let occurrences = make_test_collection();
        let occurrences = update(
            &occurrences,
            &OccurrenceId::from("occ-1"),
            &rename("Moved"),
            Scope::Single,
        );
        let occurrences = update(
            &occurrences,
            &OccurrenceId::from("occ-2"),
            &rename("Daily"),
            Scope::All,
        );

        assert_eq!(find(&occurrences, "occ-1").details.title, "Moved");
        assert_eq!(find(&occurrences, "occ-5").details.title, "Daily");
    }

    #[test]
    fn test_update_standalone_ignores_scope() {
        let before = make_test_collection();
        let single = update(
            &before,
            &OccurrenceId::from("occ-6"),
            &rename("Brunch"),
            Scope::Single,
        );
        let all = update(&before, &OccurrenceId::from("occ-6"), &rename("Brunch"), Scope::All);

        assert_eq!(single, all);
        assert_eq!(find(&all, "occ-6").details.title, "Brunch");
        assert_eq!(find(&all, "occ-6").repeat, Repeat::None);
    }

    #[test]
    fn test_update_keeps_repeat_of_ungrouped_rule() {
        let mut occurrence = make_test_collection().remove(0);
        occurrence.repeat = Repeat::every(Frequency::Daily, parse_date("2025-01-05").ok());
        let before = vec![occurrence];

        for scope in [Scope::Single, Scope::All] {
            let after = update(&before, &OccurrenceId::from("occ-1"), &rename("x"), scope);
            assert_eq!(after[0].details.title, "x");
            assert_eq!(after[0].repeat, before[0].repeat);
        }
    }

    #[test]
    fn test_update_preserves_order_and_ids() {
        let before = make_test_collection();
        let after = update(&before, &OccurrenceId::from("occ-8"), &rename("x"), Scope::All);

        let ids_before: Vec<_> = before.iter().map(|o| o.id.clone()).collect();
        let ids_after: Vec<_> = after.iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids_before, ids_after);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let before = make_test_collection();
        let after = update(&before, &OccurrenceId::from("missing"), &rename("x"), Scope::All);
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_single_then_all() {
        let occurrences = make_test_collection();

        let occurrences = remove(&occurrences, &OccurrenceId::from("occ-2"), Scope::Single);
        assert_eq!(occurrences.len(), 8);
        assert_eq!(group_members(&occurrences, &GroupId::from("grp-1")).count(), 4);

        let occurrences = remove(&occurrences, &OccurrenceId::from("occ-4"), Scope::All);
        assert_eq!(group_members(&occurrences, &GroupId::from("grp-1")).count(), 0);
        assert_eq!(occurrences.len(), 4);
        assert!(occurrences.iter().any(|o| o.id.0 == "occ-6"));
    }

    #[test]
    fn test_remove_all_keeps_detached_member() {
        let occurrences = make_test_collection();
        let occurrences = update(
            &occurrences,
            &OccurrenceId::from("occ-7"),
            &rename("Special"),
            Scope::Single,
        );
        let occurrences = remove(&occurrences, &OccurrenceId::from("occ-8"), Scope::All);

        assert_eq!(occurrences.len(), 7);
        assert_eq!(find(&occurrences, "occ-7").details.title, "Special");
    }

    #[test]
    fn test_remove_all_on_standalone_removes_only_target() {
        let before = make_test_collection();
        let after = remove(&before, &OccurrenceId::from("occ-6"), Scope::All);

        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|o| o.id.0 != "occ-6"));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let before = make_test_collection();
        let after = remove(&before, &OccurrenceId::from("missing"), Scope::Single);
        assert_eq!(before, after);
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!("single".parse::<Scope>().unwrap(), Scope::Single);
        assert_eq!("ALL".parse::<Scope>().unwrap(), Scope::All);
        assert!("some".parse::<Scope>().is_err());
        assert_eq!(Scope::default(), Scope::Single);
    }
}
