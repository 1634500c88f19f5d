// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Check failures.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use forkscan_core::event::EventRecord;
use forkscan_core::node::NodeRef;

use crate::ScanDirection;

/// Which branch mapping a region id is missing from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchSide {
    /// No `ParallelBranchStart` names the region.
    Start,
    /// No `ParallelBranchEnd` names the region.
    End,
}

impl BranchSide {
    const fn present(self) -> &'static str {
        match self {
            Self::Start => "branch end",
            Self::End => "branch start",
        }
    }

    const fn missing(self) -> &'static str {
        match self {
            Self::Start => "branch start",
            Self::End => "branch end",
        }
    }
}

/// A structural violation found in an event log.
///
/// Every variant carries the node ids needed to find the offending nodes in
/// the scanned graph.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// The same record was logged twice.
    #[error("duplicate call at index {index} (first seen at {first_index}): {record}")]
    DuplicateEvent {
        /// The repeated record.
        record: EventRecord,
        /// Position of the earlier, equal record.
        first_index: usize,
        /// Position of the repeat.
        index: usize,
    },

    /// A parallel record has no region id in slot 0.
    #[error("parallel event at index {index} has no parallel region id: {record}")]
    MissingRegion {
        /// The record without a region.
        record: EventRecord,
        /// Position of the record.
        index: usize,
    },

    /// A closing region event names a different region than the innermost
    /// open one.
    #[error(
        "parallel start and end events point to different parallel region ids: \
         open region {open}, closed by event at index {index} for region {closed}"
    )]
    RegionMismatch {
        /// Region on top of the open stack.
        open: NodeRef,
        /// Region named by the closing event.
        closed: NodeRef,
        /// Position of the closing event.
        index: usize,
    },

    /// Regions were opened and never closed before the end of the log.
    #[error(
        "{} events with no matching {} for parallel region(s) with start node ids: {}",
        .direction.open_kind(),
        .direction.close_kind(),
        join_ids(.regions)
    )]
    UnmatchedRegionEnd {
        /// Still-open regions, innermost first.
        regions: Vec<NodeRef>,
        /// Scan direction the log was checked under.
        direction: ScanDirection,
    },

    /// A region has different numbers of branch starts and branch ends.
    #[error(
        "parallel region {region} has {starts} branch start event(s) but {ends} branch end event(s)"
    )]
    BranchCountMismatch {
        /// The region's start node.
        region: NodeRef,
        /// Number of `ParallelBranchStart` records.
        starts: usize,
        /// Number of `ParallelBranchEnd` records.
        ends: usize,
    },

    /// A region has branch events of one kind but none of the other.
    #[error(
        "parallel region {region} has {} event(s) but no {} event(s)",
        .missing.present(),
        .missing.missing()
    )]
    BranchKeyMismatch {
        /// The region's start node.
        region: NodeRef,
        /// The side with no events for `region`.
        missing: BranchSide,
    },
}

fn join_ids(ids: &[NodeRef]) -> String {
    let mut out = String::new();
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{id}");
    }
    out
}
