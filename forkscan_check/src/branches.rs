// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branch start/end symmetry per parallel region.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use forkscan_core::event::{EventKind, EventRecord};
use forkscan_core::node::NodeRef;

use crate::error::{BranchSide, CheckError};

/// Branch nodes per region, in log order.
type BranchMap = BTreeMap<NodeRef, Vec<Option<NodeRef>>>;

/// Checks that every region's branch starts and branch ends pair up.
///
/// Regions are visited in ascending id order, regions with branch starts
/// first, so the reported region is deterministic for a given log.
///
/// # Errors
///
/// - [`CheckError::MissingRegion`] at the first branch event with no region
///   id.
/// - [`CheckError::BranchKeyMismatch`] if a region has branch starts but no
///   branch ends, or the reverse.
/// - [`CheckError::BranchCountMismatch`] if a region has both, in different
///   numbers.
pub fn check_branch_symmetry(records: &[EventRecord]) -> Result<(), CheckError> {
    let (starts, ends) = branch_maps(records)?;

    for (&region, branch_starts) in &starts {
        let Some(branch_ends) = ends.get(&region) else {
            return Err(CheckError::BranchKeyMismatch {
                region,
                missing: BranchSide::End,
            });
        };
        if branch_starts.len() != branch_ends.len() {
            return Err(CheckError::BranchCountMismatch {
                region,
                starts: branch_starts.len(),
                ends: branch_ends.len(),
            });
        }
    }

    // Counts were compared above; only end-only regions remain.
    if let Some(&region) = ends.keys().find(|region| !starts.contains_key(*region)) {
        return Err(CheckError::BranchKeyMismatch {
            region,
            missing: BranchSide::Start,
        });
    }

    Ok(())
}

fn branch_maps(records: &[EventRecord]) -> Result<(BranchMap, BranchMap), CheckError> {
    let mut starts = BranchMap::new();
    let mut ends = BranchMap::new();
    for (index, record) in records.iter().enumerate() {
        let map = match record.kind() {
            EventKind::ParallelBranchStart => &mut starts,
            EventKind::ParallelBranchEnd => &mut ends,
            _ => continue,
        };
        let Some(region) = record.region() else {
            return Err(CheckError::MissingRegion {
                record: *record,
                index,
            });
        };
        map.entry(region).or_default().push(record.slot(1));
    }
    Ok((starts, ends))
}
