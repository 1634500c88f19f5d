// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording of scan passes.
//!
//! [`RecordingVisitor`] implements [`ChunkVisitor`] and appends one
//! [`EventRecord`] per callback to an [`EventLog`]. It does no validation of
//! its own; the checks live in `forkscan_check` and run over the finished log.

use alloc::vec::Vec;

use crate::error::MalformedNodeId;
use crate::event::{EventKind, EventRecord, SLOT_COUNT};
use crate::node::{FlowNode, NodeRef};
use crate::visitor::ChunkVisitor;

// ---------------------------------------------------------------------------
// EventLog
// ---------------------------------------------------------------------------

/// Append-only sequence of [`EventRecord`]s in callback order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: EventRecord) {
        self.records.push(record);
    }

    /// Returns the records in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[EventRecord] {
        &self.records
    }

    /// Returns an iterator over the records in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    /// Returns the record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&EventRecord> {
        self.records.get(index)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the log and returns the records.
    #[must_use]
    pub fn into_records(self) -> Vec<EventRecord> {
        self.records
    }
}

impl AsRef<[EventRecord]> for EventLog {
    fn as_ref(&self) -> &[EventRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a EventRecord;
    type IntoIter = core::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<EventRecord> for EventLog {
    fn from_iter<I: IntoIterator<Item = EventRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<EventRecord> for EventLog {
    fn extend<I: IntoIterator<Item = EventRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

// ---------------------------------------------------------------------------
// RecordingVisitor
// ---------------------------------------------------------------------------

/// A [`ChunkVisitor`] that records every callback into an [`EventLog`].
///
/// Ids are parsed before anything is appended, so a callback that fails with
/// [`MalformedNodeId`] leaves the log untouched. The failure is fatal for the
/// pass: every later callback returns the same error without recording, and
/// [`try_into_log`](Self::try_into_log) refuses to hand out the partial log.
#[derive(Clone, Debug, Default)]
pub struct RecordingVisitor {
    log: EventLog,
    failure: Option<MalformedNodeId>,
}

impl RecordingVisitor {
    /// Creates a visitor with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the log recorded so far.
    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Consumes the visitor and returns the recorded log.
    ///
    /// After a failed callback this is the log up to the failure; prefer
    /// [`try_into_log`](Self::try_into_log) when the log is to be checked.
    #[must_use]
    pub fn into_log(self) -> EventLog {
        self.log
    }

    /// Returns the first [`MalformedNodeId`] seen, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&MalformedNodeId> {
        self.failure.as_ref()
    }

    /// Consumes the visitor and returns the log of a pass that recorded
    /// cleanly.
    ///
    /// # Errors
    ///
    /// The first [`MalformedNodeId`] any callback failed with.
    pub fn try_into_log(self) -> Result<EventLog, MalformedNodeId> {
        match self.failure {
            None => Ok(self.log),
            Some(err) => Err(err),
        }
    }

    fn record<N: FlowNode + ?Sized>(
        &mut self,
        kind: EventKind,
        nodes: [Option<&N>; SLOT_COUNT],
    ) -> Result<(), MalformedNodeId> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let mut slots = [None; SLOT_COUNT];
        for (slot, node) in slots.iter_mut().zip(nodes) {
            match NodeRef::of_optional(node) {
                Ok(id) => *slot = id,
                Err(err) => {
                    tracing::debug!(%err, "scan pass recording aborted");
                    self.failure = Some(err.clone());
                    return Err(err);
                }
            }
        }
        let record = EventRecord::new(kind, slots);
        tracing::trace!(index = self.log.len(), %record, "recorded scan event");
        self.log.push(record);
        Ok(())
    }
}

impl<N: FlowNode + ?Sized, S: ?Sized> ChunkVisitor<N, S> for RecordingVisitor {
    type Error = MalformedNodeId;

    fn chunk_start(
        &mut self,
        start_node: &N,
        before_block: Option<&N>,
        _scanner: &S,
    ) -> Result<(), MalformedNodeId> {
        self.record(
            EventKind::ChunkStart,
            [Some(start_node), before_block, None, None],
        )
    }

    fn chunk_end(
        &mut self,
        end_node: &N,
        after_chunk: Option<&N>,
        _scanner: &S,
    ) -> Result<(), MalformedNodeId> {
        self.record(
            EventKind::ChunkEnd,
            [Some(end_node), after_chunk, None, None],
        )
    }

    fn parallel_start(
        &mut self,
        parallel_start_node: &N,
        one_branch_start_node: &N,
        _scanner: &S,
    ) -> Result<(), MalformedNodeId> {
        self.record(
            EventKind::ParallelStart,
            [
                Some(parallel_start_node),
                Some(one_branch_start_node),
                None,
                None,
            ],
        )
    }

    fn parallel_end(
        &mut self,
        parallel_start_node: &N,
        parallel_end_node: &N,
        _scanner: &S,
    ) -> Result<(), MalformedNodeId> {
        self.record(
            EventKind::ParallelEnd,
            [
                Some(parallel_start_node),
                Some(parallel_end_node),
                None,
                None,
            ],
        )
    }

    fn parallel_branch_start(
        &mut self,
        parallel_start_node: &N,
        branch_start_node: &N,
        _scanner: &S,
    ) -> Result<(), MalformedNodeId> {
        self.record(
            EventKind::ParallelBranchStart,
            [
                Some(parallel_start_node),
                Some(branch_start_node),
                None,
                None,
            ],
        )
    }

    fn parallel_branch_end(
        &mut self,
        parallel_start_node: &N,
        branch_end_node: &N,
        _scanner: &S,
    ) -> Result<(), MalformedNodeId> {
        self.record(
            EventKind::ParallelBranchEnd,
            [Some(parallel_start_node), Some(branch_end_node), None, None],
        )
    }

    fn atom_node(
        &mut self,
        before: Option<&N>,
        atom_node: &N,
        after: Option<&N>,
        _scanner: &S,
    ) -> Result<(), MalformedNodeId> {
        self.record(
            EventKind::AtomNode,
            [before, Some(atom_node), after, None],
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    /// Stand-in for the scanning engine handle.
    struct Scanner;

    #[test]
    fn every_callback_appends_one_record() {
        let mut rec = RecordingVisitor::new();
        let s = Scanner;
        rec.chunk_end("13", None, &s).unwrap();
        rec.atom_node(Some("12"), "13", None, &s).unwrap();
        rec.parallel_end("4", "11", &s).unwrap();
        rec.parallel_branch_end("4", "9", &s).unwrap();
        rec.parallel_branch_start("4", "5", &s).unwrap();
        rec.parallel_start("4", "5", &s).unwrap();
        rec.chunk_start("2", None, &s).unwrap();

        let log = rec.into_log();
        assert_eq!(
            log.into_records(),
            vec![
                EventRecord::chunk_end(NodeRef(13), None),
                EventRecord::atom_node(Some(NodeRef(12)), NodeRef(13), None),
                EventRecord::parallel_end(NodeRef(4), NodeRef(11)),
                EventRecord::parallel_branch_end(NodeRef(4), NodeRef(9)),
                EventRecord::parallel_branch_start(NodeRef(4), NodeRef(5)),
                EventRecord::parallel_start(NodeRef(4), NodeRef(5)),
                EventRecord::chunk_start(NodeRef(2), None),
            ]
        );
    }

    #[test]
    fn absent_neighbours_become_empty_slots() {
        let mut rec = RecordingVisitor::new();
        rec.atom_node(None, "2", Some("3"), &Scanner).unwrap();
        let record = rec.log().as_slice()[0];
        assert_eq!(record.slots(), [None, Some(NodeRef(2)), Some(NodeRef(3)), None]);
    }

    #[test]
    fn malformed_id_aborts_without_recording() {
        let mut rec = RecordingVisitor::new();
        rec.atom_node(None, "2", None, &Scanner).unwrap();
        let err = rec.atom_node(Some("2"), "3", Some("end"), &Scanner).unwrap_err();
        assert_eq!(err.id, "end");
        assert_eq!(rec.log().len(), 1, "failed callback must not append");
    }

    #[test]
    fn callbacks_after_a_malformed_id_keep_failing() {
        let mut rec = RecordingVisitor::new();
        rec.atom_node(None, "2", None, &Scanner).unwrap();
        let err = rec.parallel_end("5", "x", &Scanner).unwrap_err();
        assert_eq!(rec.failure(), Some(&err));

        // Well-formed ids are refused too; the pass is already broken.
        assert_eq!(rec.atom_node(None, "7", None, &Scanner), Err(err.clone()));
        assert_eq!(rec.chunk_start("8", None, &Scanner), Err(err.clone()));
        assert_eq!(rec.log().len(), 1);

        assert_eq!(rec.clone().try_into_log(), Err(err));
        assert_eq!(rec.into_log().len(), 1);
    }

    #[test]
    fn clean_pass_yields_its_log() {
        let mut rec = RecordingVisitor::new();
        rec.parallel_end("5", "9", &Scanner).unwrap();
        rec.parallel_start("5", "6", &Scanner).unwrap();
        assert_eq!(rec.failure(), None);
        let log = rec.try_into_log().unwrap();
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn log_collects_and_extends() {
        let mut log: EventLog = [EventRecord::parallel_end(NodeRef(5), NodeRef(9))]
            .into_iter()
            .collect();
        log.extend([EventRecord::parallel_start(NodeRef(5), NodeRef(6))]);
        assert_eq!(log.len(), 2);
        assert!(!log.is_empty());
        assert_eq!(log.get(1).map(EventRecord::kind), Some(EventKind::ParallelStart));
        assert_eq!((&log).into_iter().count(), 2);
        assert!(EventLog::new().is_empty());
    }
}
