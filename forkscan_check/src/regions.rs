// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallel region bracket balance.
//!
//! Region events are matched like parentheses. Under
//! [`ScanDirection::Backward`] a region's `ParallelEnd` is logged before its
//! `ParallelStart`, so the end opens the bracket and the start closes it;
//! [`ScanDirection::Forward`] swaps the roles.
//!
//! Matching is LIFO: regions nest by construction, so only the innermost open
//! region is ever compared. A closing event with nothing open is accepted; it
//! belongs to a region the pass had not finished when it stopped.

use alloc::vec::Vec;

use forkscan_core::event::EventRecord;
use forkscan_core::node::NodeRef;

use crate::ScanDirection;
use crate::error::CheckError;

/// Checks that region open/close events form a balanced bracket structure.
///
/// # Errors
///
/// - [`CheckError::MissingRegion`] at the first open or close event with no
///   region id.
/// - [`CheckError::RegionMismatch`] at the first closing event whose region
///   differs from the innermost open region.
/// - [`CheckError::UnmatchedRegionEnd`] listing every region still open once
///   the log is exhausted.
pub fn check_region_balance(
    records: &[EventRecord],
    direction: ScanDirection,
) -> Result<(), CheckError> {
    let open_kind = direction.open_kind();
    let close_kind = direction.close_kind();
    let mut open: Vec<NodeRef> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if record.kind() != open_kind && record.kind() != close_kind {
            continue;
        }
        let Some(region) = record.region() else {
            return Err(CheckError::MissingRegion {
                record: *record,
                index,
            });
        };
        if record.kind() == open_kind {
            open.push(region);
        } else if record.kind() == close_kind {
            match open.last() {
                Some(&top) if top != region => {
                    return Err(CheckError::RegionMismatch {
                        open: top,
                        closed: region,
                        index,
                    });
                }
                Some(_) => {
                    open.pop();
                }
                // In-progress region: its other end is past the scan boundary.
                None => {}
            }
        }
    }

    if open.is_empty() {
        Ok(())
    } else {
        open.reverse();
        Err(CheckError::UnmatchedRegionEnd {
            regions: open,
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use forkscan_core::event::EventKind;

    use super::*;

    fn end(region: u32, end: u32) -> EventRecord {
        EventRecord::parallel_end(NodeRef(region), NodeRef(end))
    }

    fn start(region: u32, branch: u32) -> EventRecord {
        EventRecord::parallel_start(NodeRef(region), NodeRef(branch))
    }

    fn without_region(kind: EventKind, node: u32) -> EventRecord {
        EventRecord::new(kind, [None, Some(NodeRef(node)), None, None])
    }

    #[test]
    fn single_region_closed_in_reverse_order() {
        let log = [
            end(5, 9),
            EventRecord::parallel_branch_end(NodeRef(5), NodeRef(8)),
            EventRecord::parallel_branch_start(NodeRef(5), NodeRef(6)),
            start(5, 6),
        ];
        assert_eq!(check_region_balance(&log, ScanDirection::Backward), Ok(()));
    }

    #[test]
    fn nested_regions_balance() {
        let log = [
            end(2, 20),
            end(4, 11),
            start(4, 5),
            end(12, 15),
            start(12, 13),
            start(2, 3),
        ];
        assert_eq!(check_region_balance(&log, ScanDirection::Backward), Ok(()));
    }

    #[test]
    fn start_with_nothing_open_is_in_progress() {
        let log = [start(4, 5), end(7, 9), start(7, 8), start(2, 3)];
        assert_eq!(check_region_balance(&log, ScanDirection::Backward), Ok(()));
    }

    #[test]
    fn lone_end_is_unmatched() {
        let err =
            check_region_balance(&[end(5, 9)], ScanDirection::Backward).unwrap_err();
        assert_eq!(
            err,
            CheckError::UnmatchedRegionEnd {
                regions: vec![NodeRef(5)],
                direction: ScanDirection::Backward,
            }
        );
    }

    #[test]
    fn unmatched_lists_every_open_region_innermost_first() {
        let log = [end(2, 20), end(4, 11), end(6, 10)];
        let err = check_region_balance(&log, ScanDirection::Backward).unwrap_err();
        let CheckError::UnmatchedRegionEnd { regions, .. } = err else {
            panic!("expected UnmatchedRegionEnd, got {err:?}");
        };
        assert_eq!(regions, [NodeRef(6), NodeRef(4), NodeRef(2)]);
    }

    #[test]
    fn crossed_regions_mismatch() {
        let log = [end(2, 20), end(4, 11), start(2, 3), start(4, 5)];
        let err = check_region_balance(&log, ScanDirection::Backward).unwrap_err();
        assert_eq!(
            err,
            CheckError::RegionMismatch {
                open: NodeRef(4),
                closed: NodeRef(2),
                index: 2,
            }
        );
    }

    #[test]
    fn forward_direction_swaps_roles() {
        let forward = [start(5, 6), end(5, 9)];
        assert_eq!(check_region_balance(&forward, ScanDirection::Forward), Ok(()));

        // The backward-order log reads as an unterminated start when scanned forward.
        let backward = [end(5, 9), start(5, 6)];
        assert!(matches!(
            check_region_balance(&backward, ScanDirection::Forward),
            Err(CheckError::UnmatchedRegionEnd { .. })
        ));
    }

    #[test]
    fn non_region_events_are_ignored() {
        let log = [
            EventRecord::chunk_end(NodeRef(13), None),
            EventRecord::atom_node(None, NodeRef(12), None),
            EventRecord::parallel_branch_end(NodeRef(9), NodeRef(8)),
        ];
        assert_eq!(check_region_balance(&log, ScanDirection::Backward), Ok(()));
    }

    #[test]
    fn region_less_bracket_is_reported() {
        let orphan = without_region(EventKind::ParallelEnd, 9);
        assert_eq!(
            check_region_balance(&[orphan], ScanDirection::Backward),
            Err(CheckError::MissingRegion {
                record: orphan,
                index: 0,
            })
        );

        // Caught as a closing event too, even with nothing open.
        let log = [start(4, 5), without_region(EventKind::ParallelStart, 6)];
        assert!(matches!(
            check_region_balance(&log, ScanDirection::Backward),
            Err(CheckError::MissingRegion { index: 1, .. })
        ));
    }

    #[test]
    fn region_less_branch_events_are_not_brackets() {
        let log = [without_region(EventKind::ParallelBranchStart, 6)];
        assert_eq!(check_region_balance(&log, ScanDirection::Backward), Ok(()));
    }
}
