// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while recording a scan pass.

use alloc::string::String;

/// A node id that is not a decimal node identifier.
///
/// The scanning engine guarantees numeric ids, so this aborts recording of
/// the whole pass rather than being skipped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("node id {id:?} is not a decimal node identifier")]
pub struct MalformedNodeId {
    /// The id exactly as the node reported it.
    pub id: String,
}

/// Failure of one side of a [`Tee`](crate::visitor::Tee).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeeError<A, B> {
    /// The first visitor failed; the second was not called.
    #[error("first visitor failed: {0}")]
    First(A),
    /// The second visitor failed after the first succeeded.
    #[error("second visitor failed: {0}")]
    Second(B),
}
