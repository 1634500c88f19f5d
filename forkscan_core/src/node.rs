// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identification.
//!
//! [`FlowNode`] is the scanning engine's view of an execution node: all this
//! crate ever asks of it is its externally assigned id. [`NodeRef`] is the
//! parsed, copyable form of that id that event records store.

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::MalformedNodeId;

/// An execution node as seen by a [`ChunkVisitor`](crate::visitor::ChunkVisitor).
///
/// The graph assigns every node a decimal id that is unique within one run.
pub trait FlowNode {
    /// Returns the node's externally assigned id.
    fn id(&self) -> &str;
}

impl FlowNode for str {
    fn id(&self) -> &str {
        self
    }
}

impl FlowNode for String {
    fn id(&self) -> &str {
        self
    }
}

impl<T: FlowNode + ?Sized> FlowNode for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// Identifies one execution node within a single scan pass.
///
/// Ids are assigned by the graph; this crate only compares and prints them.
/// "No node" is expressed as `Option<NodeRef>::None`, never as a magic value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeRef(pub u32);

impl NodeRef {
    /// Parses a decimal node id.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedNodeId`] if `id` is not a non-negative decimal
    /// integer that fits in a `u32`.
    pub fn parse(id: &str) -> Result<Self, MalformedNodeId> {
        id.parse::<u32>().map(Self).map_err(|_| MalformedNodeId {
            id: id.to_string(),
        })
    }

    /// Parses the id of `node`.
    ///
    /// # Errors
    ///
    /// See [`NodeRef::parse`].
    pub fn of<N: FlowNode + ?Sized>(node: &N) -> Result<Self, MalformedNodeId> {
        Self::parse(node.id())
    }

    /// Parses the id of an optional node, mapping `None` to `None`.
    ///
    /// # Errors
    ///
    /// See [`NodeRef::parse`].
    pub fn of_optional<N: FlowNode + ?Sized>(
        node: Option<&N>,
    ) -> Result<Option<Self>, MalformedNodeId> {
        node.map(Self::of).transpose()
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({})", self.0)
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
