// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded passes and check verdicts.
//!
//! [`export_log`] writes an [`EventLog`] as a JSON array with one object per
//! record; [`export_report`] writes a [`CheckReport`]. Both are meant for
//! post-mortem inspection of a failing pass, not as a stable format.

use std::io::{self, Write};

use serde_json::{Map, Value, json};

use forkscan_check::{CheckError, CheckReport};
use forkscan_core::event::EventRecord;
use forkscan_core::node::NodeRef;
use forkscan_core::record::EventLog;

/// Exports every record of `log` as pretty-printed JSON.
///
/// Each object carries the record's `index`, `kind`, the raw `slots` array
/// (absent slots are `null`) and a `nodes` object keyed by slot label.
pub fn export_log(log: &EventLog, writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = log
        .iter()
        .enumerate()
        .map(|(index, record)| record_json(index, record))
        .collect();
    serde_json::to_writer_pretty(writer, &events)?;
    tracing::debug!(events = log.len(), "exported event log");
    Ok(())
}

/// Exports a check verdict as pretty-printed JSON.
pub fn export_report(report: &CheckReport, writer: &mut dyn Write) -> io::Result<()> {
    let failures: Vec<Value> = report
        .failures
        .iter()
        .map(|failure| {
            json!({
                "check": check_name(failure),
                "message": failure.to_string(),
            })
        })
        .collect();
    let value = json!({
        "events": report.events,
        "passed": report.passed(),
        "failures": failures,
    });
    serde_json::to_writer_pretty(writer, &value)?;
    Ok(())
}

fn record_json(index: usize, record: &EventRecord) -> Value {
    let mut nodes = Map::new();
    for (label, slot) in record.kind().slot_labels().into_iter().zip(record.slots()) {
        if let Some(label) = label {
            nodes.insert(label.to_owned(), node_json(slot));
        }
    }
    json!({
        "index": index,
        "kind": record.kind().as_str(),
        "slots": record.slots().map(node_json),
        "nodes": nodes,
    })
}

fn node_json(slot: Option<NodeRef>) -> Value {
    slot.map_or(Value::Null, |node| Value::from(node.0))
}

fn check_name(failure: &CheckError) -> &'static str {
    match failure {
        CheckError::DuplicateEvent { .. } => "DuplicateEvent",
        CheckError::MissingRegion { .. } => "MissingRegion",
        CheckError::RegionMismatch { .. } => "RegionMismatch",
        CheckError::UnmatchedRegionEnd { .. } => "UnmatchedRegionEnd",
        CheckError::BranchCountMismatch { .. } => "BranchCountMismatch",
        CheckError::BranchKeyMismatch { .. } => "BranchKeyMismatch",
    }
}
