// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted scan pass that exercises the recording and checking pipeline.
//!
//! Replays the callbacks a backward scan of a small pipeline would produce,
//! printing them through a
//! [`PrettyPrintVisitor`](forkscan_debug::pretty::PrettyPrintVisitor) and
//! recording them with a
//! [`RecordingVisitor`](forkscan_core::record::RecordingVisitor), then runs
//! every check and exports the log to `events.json`.
//!
//! The pipeline, in execution order:
//!
//! ```text
//!   2 start ─ 3 checkout ─ 4 parallel ┬ 5 unit ─ 7 test ─────────────── 9 ┬ 11 join ─ 16 end
//!                                     └ 6 lint ─ 12 parallel ┬ 13 ┬ 15 ─ 10 ┘
//!                                                            └ 14 ┘
//! ```
//!
//! Pass `--in-progress` to replay a pass that started while region 4 was
//! still running (no end events yet), which the checks must also accept.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use tracing_subscriber::EnvFilter;

use forkscan_check::{CheckConfig, check_all};
use forkscan_core::node::FlowNode;
use forkscan_core::record::RecordingVisitor;
use forkscan_core::visitor::{ChunkVisitor, Tee};
use forkscan_debug::dump;
use forkscan_debug::pretty::{self, PrettyPrintVisitor};

/// A pipeline step as the demo's "engine" sees it.
#[derive(Debug)]
struct Step {
    id: &'static str,
}

impl FlowNode for Step {
    fn id(&self) -> &str {
        self.id
    }
}

const fn step(id: &'static str) -> Step {
    Step { id }
}

/// Opaque engine handle handed to every callback.
#[derive(Debug)]
struct ScriptedScanner {
    name: &'static str,
}

/// One scripted callback.
enum Call {
    ChunkStart(&'static str, Option<&'static str>),
    ChunkEnd(&'static str, Option<&'static str>),
    ParallelStart(&'static str, &'static str),
    ParallelEnd(&'static str, &'static str),
    BranchStart(&'static str, &'static str),
    BranchEnd(&'static str, &'static str),
    Atom(Option<&'static str>, &'static str, Option<&'static str>),
}

/// Backward scan of the full pipeline, newest node first.
const COMPLETE_PASS: &[Call] = &[
    Call::ChunkEnd("16", None),
    Call::Atom(Some("11"), "16", None),
    Call::ParallelEnd("4", "11"),
    Call::BranchEnd("4", "10"),
    Call::ParallelEnd("12", "15"),
    Call::BranchEnd("12", "14"),
    Call::BranchStart("12", "14"),
    Call::BranchEnd("12", "13"),
    Call::BranchStart("12", "13"),
    Call::ParallelStart("12", "13"),
    Call::BranchStart("4", "6"),
    Call::BranchEnd("4", "9"),
    Call::Atom(Some("5"), "7", Some("9")),
    Call::BranchStart("4", "5"),
    Call::ParallelStart("4", "5"),
    Call::Atom(Some("2"), "3", Some("4")),
    Call::ChunkStart("2", None),
];

/// Backward scan taken while both branches of region 4 were still running.
const IN_PROGRESS_PASS: &[Call] = &[
    Call::Atom(Some("5"), "7", None),
    Call::Atom(Some("4"), "6", None),
    Call::ParallelStart("4", "5"),
    Call::Atom(Some("2"), "3", Some("4")),
    Call::ChunkStart("2", None),
];

fn replay<V>(calls: &[Call], visitor: &mut V, scanner: &ScriptedScanner) -> Result<(), V::Error>
where
    V: ChunkVisitor<Step, ScriptedScanner>,
{
    for call in calls {
        match *call {
            Call::ChunkStart(start, before) => {
                visitor.chunk_start(&step(start), before.map(step).as_ref(), scanner)?;
            }
            Call::ChunkEnd(end, after) => {
                visitor.chunk_end(&step(end), after.map(step).as_ref(), scanner)?;
            }
            Call::ParallelStart(region, branch) => {
                visitor.parallel_start(&step(region), &step(branch), scanner)?;
            }
            Call::ParallelEnd(region, end) => {
                visitor.parallel_end(&step(region), &step(end), scanner)?;
            }
            Call::BranchStart(region, branch) => {
                visitor.parallel_branch_start(&step(region), &step(branch), scanner)?;
            }
            Call::BranchEnd(region, branch) => {
                visitor.parallel_branch_end(&step(region), &step(branch), scanner)?;
            }
            Call::Atom(before, current, after) => {
                visitor.atom_node(
                    before.map(step).as_ref(),
                    &step(current),
                    after.map(step).as_ref(),
                    scanner,
                )?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let in_progress = std::env::args().any(|arg| arg == "--in-progress");
    let (name, calls) = if in_progress {
        ("in-progress", IN_PROGRESS_PASS)
    } else {
        ("complete", COMPLETE_PASS)
    };
    let scanner = ScriptedScanner { name };
    tracing::info!(pass = scanner.name, callbacks = calls.len(), "replaying scan pass");

    // -- scan ---------------------------------------------------------------
    let mut visitor = Tee::new(
        PrettyPrintVisitor::new(Box::new(io::stdout())),
        RecordingVisitor::new(),
    );
    replay(calls, &mut visitor, &scanner)?;
    let (_, recorder) = visitor.into_inner();
    let log = recorder.try_into_log()?;

    // -- check --------------------------------------------------------------
    let report = check_all(log.as_slice(), &CheckConfig::backward());
    let mut stdout = io::stdout().lock();
    pretty::write_log(&log, &mut stdout)?;
    pretty::write_report(&report, &mut stdout)?;

    // -- export -------------------------------------------------------------
    let path = "events.json";
    let mut writer = BufWriter::new(File::create(path)?);
    dump::export_log(&log, &mut writer)?;
    writer.flush()?;
    tracing::info!(path, events = log.len(), "wrote event log");

    report.into_result()?;
    Ok(())
}
