// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event records.
//!
//! An [`EventRecord`] captures one [`ChunkVisitor`](crate::visitor::ChunkVisitor)
//! callback: its [`EventKind`] and up to [`SLOT_COUNT`] node ids. Which slot
//! means what depends on the kind:
//!
//! | Kind | Slot 0 | Slot 1 | Slot 2 |
//! |---|---|---|---|
//! | `AtomNode` | before | current | after |
//! | `ChunkStart` | start node | before block | |
//! | `ChunkEnd` | end node | after chunk | |
//! | `ParallelStart` | parallel start | one branch start | |
//! | `ParallelEnd` | parallel start | parallel end | |
//! | `ParallelBranchStart` | parallel start | branch start | |
//! | `ParallelBranchEnd` | parallel start | branch end | |
//!
//! Slot 3 is never written by any callback; it exists so that every record
//! has the same shape.

use core::fmt;

use crate::node::NodeRef;

/// Number of node slots in every [`EventRecord`].
pub const SLOT_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// Which callback produced an [`EventRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    /// A plain node inside a chunk.
    AtomNode,
    /// The first node of a chunk.
    ChunkStart,
    /// The last node of a chunk.
    ChunkEnd,
    /// The start of a parallel region.
    ParallelStart,
    /// The end of a parallel region.
    ParallelEnd,
    /// The first node of one branch of a parallel region.
    ParallelBranchStart,
    /// The last node of one branch of a parallel region.
    ParallelBranchEnd,
}

impl EventKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::AtomNode,
        Self::ChunkStart,
        Self::ChunkEnd,
        Self::ParallelStart,
        Self::ParallelEnd,
        Self::ParallelBranchStart,
        Self::ParallelBranchEnd,
    ];

    /// Returns the kind's name as used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AtomNode => "AtomNode",
            Self::ChunkStart => "ChunkStart",
            Self::ChunkEnd => "ChunkEnd",
            Self::ParallelStart => "ParallelStart",
            Self::ParallelEnd => "ParallelEnd",
            Self::ParallelBranchStart => "ParallelBranchStart",
            Self::ParallelBranchEnd => "ParallelBranchEnd",
        }
    }

    /// Returns the human-readable label of each slot, `None` for unused slots.
    #[must_use]
    pub const fn slot_labels(self) -> [Option<&'static str>; SLOT_COUNT] {
        match self {
            Self::AtomNode => [Some("before"), Some("current"), Some("after"), None],
            Self::ChunkStart => [Some("startNode"), Some("beforeBlock"), None, None],
            Self::ChunkEnd => [Some("endNode"), Some("afterChunk"), None, None],
            Self::ParallelStart => [
                Some("parallelStartNode"),
                Some("oneBranchStartNode"),
                None,
                None,
            ],
            Self::ParallelEnd => [
                Some("parallelStartNode"),
                Some("parallelEndNode"),
                None,
                None,
            ],
            Self::ParallelBranchStart => [
                Some("parallelStartNode"),
                Some("branchStartNode"),
                None,
                None,
            ],
            Self::ParallelBranchEnd => [
                Some("parallelStartNode"),
                Some("branchEndNode"),
                None,
                None,
            ],
        }
    }

    /// Returns `true` for the four kinds whose slot 0 names a parallel region.
    #[must_use]
    pub const fn is_parallel(self) -> bool {
        matches!(
            self,
            Self::ParallelStart
                | Self::ParallelEnd
                | Self::ParallelBranchStart
                | Self::ParallelBranchEnd
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventRecord
// ---------------------------------------------------------------------------

/// One recorded callback.
///
/// Two records are equal iff their kinds and all four slots are equal.
/// Records are immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventRecord {
    kind: EventKind,
    slots: [Option<NodeRef>; SLOT_COUNT],
}

impl EventRecord {
    /// Creates a record with an explicit slot layout.
    #[must_use]
    pub const fn new(kind: EventKind, slots: [Option<NodeRef>; SLOT_COUNT]) -> Self {
        Self { kind, slots }
    }

    const fn pair(kind: EventKind, first: Option<NodeRef>, second: Option<NodeRef>) -> Self {
        Self::new(kind, [first, second, None, None])
    }

    /// `AtomNode`: `[before, current, after, -]`.
    #[must_use]
    pub const fn atom_node(
        before: Option<NodeRef>,
        current: NodeRef,
        after: Option<NodeRef>,
    ) -> Self {
        Self::new(EventKind::AtomNode, [before, Some(current), after, None])
    }

    /// `ChunkStart`: `[startNode, beforeBlock, -, -]`.
    #[must_use]
    pub const fn chunk_start(start_node: NodeRef, before_block: Option<NodeRef>) -> Self {
        Self::pair(EventKind::ChunkStart, Some(start_node), before_block)
    }

    /// `ChunkEnd`: `[endNode, afterChunk, -, -]`.
    #[must_use]
    pub const fn chunk_end(end_node: NodeRef, after_chunk: Option<NodeRef>) -> Self {
        Self::pair(EventKind::ChunkEnd, Some(end_node), after_chunk)
    }

    /// `ParallelStart`: `[parallelStartNode, oneBranchStartNode, -, -]`.
    #[must_use]
    pub const fn parallel_start(region: NodeRef, one_branch_start: NodeRef) -> Self {
        Self::pair(
            EventKind::ParallelStart,
            Some(region),
            Some(one_branch_start),
        )
    }

    /// `ParallelEnd`: `[parallelStartNode, parallelEndNode, -, -]`.
    #[must_use]
    pub const fn parallel_end(region: NodeRef, parallel_end: NodeRef) -> Self {
        Self::pair(EventKind::ParallelEnd, Some(region), Some(parallel_end))
    }

    /// `ParallelBranchStart`: `[parallelStartNode, branchStartNode, -, -]`.
    #[must_use]
    pub const fn parallel_branch_start(region: NodeRef, branch_start: NodeRef) -> Self {
        Self::pair(
            EventKind::ParallelBranchStart,
            Some(region),
            Some(branch_start),
        )
    }

    /// `ParallelBranchEnd`: `[parallelStartNode, branchEndNode, -, -]`.
    #[must_use]
    pub const fn parallel_branch_end(region: NodeRef, branch_end: NodeRef) -> Self {
        Self::pair(
            EventKind::ParallelBranchEnd,
            Some(region),
            Some(branch_end),
        )
    }

    /// Returns the callback kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Returns all four slots.
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> [Option<NodeRef>; SLOT_COUNT] {
        self.slots
    }

    /// Returns slot `index`, or `None` if it is absent or out of range.
    #[inline]
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<NodeRef> {
        self.slots.get(index).copied().flatten()
    }

    /// Returns the owning parallel region for the four parallel kinds.
    #[inline]
    #[must_use]
    pub fn region(&self) -> Option<NodeRef> {
        if self.kind.is_parallel() {
            self.slots[0]
        } else {
            None
        }
    }
}

impl fmt::Display for EventRecord {
    /// Renders e.g. `AtomNode(before=1, current=2, after=3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        let mut first = true;
        for (index, (label, slot)) in self
            .kind
            .slot_labels()
            .into_iter()
            .zip(self.slots)
            .enumerate()
        {
            if label.is_none() && slot.is_none() {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            match label {
                Some(label) => write!(f, "{label}=")?,
                None => write!(f, "slot{index}=")?,
            }
            match slot {
                Some(node) => write!(f, "{node}")?,
                None => f.write_str("-")?,
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn constructors_follow_slot_layout() {
        let atom = EventRecord::atom_node(Some(NodeRef(1)), NodeRef(2), None);
        assert_eq!(atom.kind(), EventKind::AtomNode);
        assert_eq!(
            atom.slots(),
            [Some(NodeRef(1)), Some(NodeRef(2)), None, None]
        );

        let end = EventRecord::parallel_end(NodeRef(5), NodeRef(9));
        assert_eq!(end.slot(0), Some(NodeRef(5)));
        assert_eq!(end.slot(1), Some(NodeRef(9)));
        assert_eq!(end.slot(2), None);
        assert_eq!(end.slot(17), None);
    }

    #[test]
    fn equality_covers_kind_and_all_slots() {
        let a = EventRecord::parallel_branch_start(NodeRef(5), NodeRef(6));
        let b = EventRecord::parallel_branch_end(NodeRef(5), NodeRef(6));
        assert_ne!(a, b, "same slots, different kind");

        let c = EventRecord::new(
            EventKind::ParallelBranchStart,
            [Some(NodeRef(5)), Some(NodeRef(6)), None, Some(NodeRef(0))],
        );
        assert_ne!(a, c, "slot 3 participates in equality");
        assert_eq!(a, EventRecord::parallel_branch_start(NodeRef(5), NodeRef(6)));
    }

    #[test]
    fn region_only_for_parallel_kinds() {
        assert_eq!(
            EventRecord::parallel_start(NodeRef(4), NodeRef(5)).region(),
            Some(NodeRef(4))
        );
        assert_eq!(EventRecord::chunk_start(NodeRef(4), None).region(), None);
    }

    #[test]
    fn display_uses_slot_labels() {
        let atom = EventRecord::atom_node(Some(NodeRef(1)), NodeRef(2), Some(NodeRef(3)));
        assert_eq!(atom.to_string(), "AtomNode(before=1, current=2, after=3)");

        let chunk = EventRecord::chunk_end(NodeRef(13), None);
        assert_eq!(chunk.to_string(), "ChunkEnd(endNode=13, afterChunk=-)");

        let odd = EventRecord::new(
            EventKind::ParallelEnd,
            [Some(NodeRef(5)), Some(NodeRef(9)), None, Some(NodeRef(1))],
        );
        assert_eq!(
            odd.to_string(),
            "ParallelEnd(parallelStartNode=5, parallelEndNode=9, slot3=1)"
        );
    }
}
