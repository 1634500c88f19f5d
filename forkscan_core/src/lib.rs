// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event model and callback contract for verifying flow-graph scan passes.
//!
//! A scanning engine walks a pipeline's flow graph (steps, chunks, and nested
//! parallel regions) and reports what it sees through a fixed set of
//! callbacks. `forkscan_core` defines that contract and the data a pass
//! leaves behind, so that `forkscan_check` can prove the callback stream was
//! well formed. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   scanning engine
//!       │  seven ChunkVisitor callbacks
//!       ▼
//!   RecordingVisitor ──► EventLog ──► forkscan_check (after the pass)
//! ```
//!
//! **[`node`]** — [`FlowNode`](node::FlowNode), the engine's node abstraction,
//! and [`NodeRef`](node::NodeRef), the parsed id records store.
//!
//! **[`event`]** — [`EventKind`](event::EventKind) and the four-slot
//! [`EventRecord`](event::EventRecord).
//!
//! **[`visitor`]** — the [`ChunkVisitor`](visitor::ChunkVisitor) callback
//! contract, plus [`NoopVisitor`](visitor::NoopVisitor) and the
//! [`Tee`](visitor::Tee) fan-out.
//!
//! **[`record`]** — [`RecordingVisitor`](record::RecordingVisitor) and the
//! append-only [`EventLog`](record::EventLog) it fills.
//!
//! **[`error`]** — errors raised while recording.
//!
//! # Scan direction
//!
//! The engine this crate was built against walks the graph backward from the
//! newest node, so a parallel region's end is reported before its start.
//! Nothing here depends on that, but the default check configuration does.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod error;
pub mod event;
pub mod node;
pub mod record;
pub mod visitor;
