// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Duplicate callback detection.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;

use forkscan_core::event::EventRecord;

use crate::error::CheckError;

/// Fails on the first record equal to an earlier one.
///
/// Records are compared by kind and all four slots. Only the first collision
/// is reported.
///
/// # Errors
///
/// Returns [`CheckError::DuplicateEvent`] naming the repeated record.
pub fn check_no_duplicates(records: &[EventRecord]) -> Result<(), CheckError> {
    let mut seen: BTreeMap<EventRecord, usize> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        match seen.entry(*record) {
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
            Entry::Occupied(first) => {
                return Err(CheckError::DuplicateEvent {
                    record: *record,
                    first_index: *first.get(),
                    index,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use forkscan_core::event::{EventKind, EventRecord};
    use forkscan_core::node::NodeRef;

    use super::*;

    fn atom(before: u32, current: u32, after: u32) -> EventRecord {
        EventRecord::atom_node(
            Some(NodeRef(before)),
            NodeRef(current),
            Some(NodeRef(after)),
        )
    }

    #[test]
    fn empty_and_distinct_logs_pass() {
        assert_eq!(check_no_duplicates(&[]), Ok(()));
        assert_eq!(
            check_no_duplicates(&[atom(1, 2, 3), atom(2, 3, 4), atom(1, 2, 4)]),
            Ok(())
        );
    }

    #[test]
    fn repeated_atom_fails_on_second() {
        let err = check_no_duplicates(&[atom(1, 2, 3), atom(1, 2, 3)]).unwrap_err();
        assert_eq!(
            err,
            CheckError::DuplicateEvent {
                record: atom(1, 2, 3),
                first_index: 0,
                index: 1,
            }
        );
    }

    #[test]
    fn kind_distinguishes_identical_slots() {
        let start = EventRecord::parallel_branch_start(NodeRef(5), NodeRef(6));
        let end = EventRecord::new(EventKind::ParallelBranchEnd, start.slots());
        assert_eq!(check_no_duplicates(&[start, end]), Ok(()));
    }

    #[test]
    fn reports_first_collision_only() {
        let a = atom(1, 2, 3);
        let b = EventRecord::chunk_start(NodeRef(2), None);
        let err = check_no_duplicates(&[a, b, b, a]).unwrap_err();
        assert!(
            matches!(
                err,
                CheckError::DuplicateEvent {
                    index: 2,
                    first_index: 1,
                    ..
                }
            ),
            "got {err:?}"
        );
    }
}
