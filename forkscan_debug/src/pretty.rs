// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable scan output.
//!
//! [`PrettyPrintVisitor`] implements [`ChunkVisitor`] and writes one line per
//! callback to a [`Write`](std::io::Write) destination (default: stderr),
//! using the raw node ids exactly as the engine reported them. Lines inside a
//! parallel region are indented by nesting depth; which region event opens
//! the indentation follows the visitor's [`ScanDirection`] (backward by
//! default). [`write_log`] prints an already recorded [`EventLog`] with
//! indices.

use std::io::{self, Write};

use forkscan_check::{CheckReport, ScanDirection};
use forkscan_core::event::EventKind;
use forkscan_core::node::FlowNode;
use forkscan_core::record::EventLog;
use forkscan_core::visitor::ChunkVisitor;

/// Writes human-readable callback lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintVisitor<W: Write = Box<dyn Write>> {
    writer: W,
    direction: ScanDirection,
    depth: usize,
}

impl<W: Write> std::fmt::Debug for PrettyPrintVisitor<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintVisitor")
            .field("direction", &self.direction)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintVisitor {
    /// Creates a visitor that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    /// Creates a visitor that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintVisitor<W> {
    /// Creates a visitor that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            direction: ScanDirection::Backward,
            depth: 0,
        }
    }

    /// Sets the scan direction the callbacks arrive in.
    #[must_use]
    pub fn with_direction(mut self, direction: ScanDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Consumes the visitor and returns the destination.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes one line indented by the current region nesting.
    fn line(&mut self, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        writeln!(self.writer, "{:indent$}{args}", "", indent = self.depth * 2)
    }

    /// Writes a region bracket line, closing or opening one indentation level.
    fn region_line(&mut self, kind: EventKind, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        if kind == self.direction.close_kind() {
            self.depth = self.depth.saturating_sub(1);
        }
        self.line(args)?;
        if kind == self.direction.open_kind() {
            self.depth += 1;
        }
        Ok(())
    }
}

fn opt<N: FlowNode + ?Sized>(node: Option<&N>) -> &str {
    node.map_or("-", FlowNode::id)
}

impl<W: Write, N: FlowNode + ?Sized, S: ?Sized> ChunkVisitor<N, S> for PrettyPrintVisitor<W> {
    type Error = io::Error;

    fn chunk_start(&mut self, start_node: &N, before_block: Option<&N>, _: &S) -> io::Result<()> {
        self.line(format_args!(
            "[chunk:start] node={} before={}",
            start_node.id(),
            opt(before_block),
        ))
    }

    fn chunk_end(&mut self, end_node: &N, after_chunk: Option<&N>, _: &S) -> io::Result<()> {
        self.line(format_args!(
            "[chunk:end] node={} after={}",
            end_node.id(),
            opt(after_chunk),
        ))
    }

    fn parallel_start(
        &mut self,
        parallel_start_node: &N,
        one_branch_start_node: &N,
        _: &S,
    ) -> io::Result<()> {
        self.region_line(
            EventKind::ParallelStart,
            format_args!(
                "[parallel:start] region={} branch={}",
                parallel_start_node.id(),
                one_branch_start_node.id(),
            ),
        )
    }

    fn parallel_end(
        &mut self,
        parallel_start_node: &N,
        parallel_end_node: &N,
        _: &S,
    ) -> io::Result<()> {
        self.region_line(
            EventKind::ParallelEnd,
            format_args!(
                "[parallel:end] region={} end={}",
                parallel_start_node.id(),
                parallel_end_node.id(),
            ),
        )
    }

    fn parallel_branch_start(
        &mut self,
        parallel_start_node: &N,
        branch_start_node: &N,
        _: &S,
    ) -> io::Result<()> {
        self.line(format_args!(
            "[branch:start] region={} node={}",
            parallel_start_node.id(),
            branch_start_node.id(),
        ))
    }

    fn parallel_branch_end(
        &mut self,
        parallel_start_node: &N,
        branch_end_node: &N,
        _: &S,
    ) -> io::Result<()> {
        self.line(format_args!(
            "[branch:end] region={} node={}",
            parallel_start_node.id(),
            branch_end_node.id(),
        ))
    }

    fn atom_node(
        &mut self,
        before: Option<&N>,
        atom_node: &N,
        after: Option<&N>,
        _: &S,
    ) -> io::Result<()> {
        self.line(format_args!(
            "[atom] node={} before={} after={}",
            atom_node.id(),
            opt(before),
            opt(after),
        ))
    }
}

/// Writes every record of `log` as `#index record`, one per line.
///
/// # Errors
///
/// Propagates write failures from `writer`.
pub fn write_log(log: &EventLog, writer: &mut dyn Write) -> io::Result<()> {
    for (index, record) in log.iter().enumerate() {
        writeln!(writer, "#{index:<4} {record}")?;
    }
    Ok(())
}

/// Writes a one-line verdict followed by one line per failure.
///
/// # Errors
///
/// Propagates write failures from `writer`.
pub fn write_report(report: &CheckReport, writer: &mut dyn Write) -> io::Result<()> {
    if report.passed() {
        return writeln!(writer, "[checks] {} events, all checks passed", report.events);
    }
    writeln!(
        writer,
        "[checks] {} events, {} check(s) failed",
        report.events,
        report.failures.len(),
    )?;
    for failure in &report.failures {
        writeln!(writer, "  - {failure}")?;
    }
    Ok(())
}
