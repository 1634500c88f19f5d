// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON export for forkscan diagnostics.
//!
//! - [`pretty::PrettyPrintVisitor`] — a
//!   [`ChunkVisitor`](forkscan_core::visitor::ChunkVisitor) that prints one
//!   human-readable line per callback, plus [`pretty::write_log`] and
//!   [`pretty::write_report`] for finished logs and verdicts.
//! - [`dump::export_log`] and [`dump::export_report`] — JSON for post-mortem
//!   inspection of a failing pass.

pub mod dump;
pub mod pretty;
