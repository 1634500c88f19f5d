// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scan callback contract.
//!
//! A scanning engine walks a flow graph and reports structure through the
//! seven methods of [`ChunkVisitor`]. Every method defaults to a no-op, so
//! implementing only the callbacks you care about is fine.
//!
//! Each method also receives an opaque handle to the scanning engine. None of
//! the visitors in this crate look at it; it is part of the signature so that
//! visitors written against the engine's own contract fit unchanged.
//!
//! [`Tee`] fans one callback stream out to two visitors, which is how a pass
//! is both printed and recorded at the same time.

use crate::error::TeeError;
use crate::node::FlowNode;

// ---------------------------------------------------------------------------
// ChunkVisitor trait
// ---------------------------------------------------------------------------

/// Receives structural callbacks from one scan pass.
///
/// `N` is the engine's node type, `S` the engine handle passed as `scanner`.
/// Required nodes are `&N`, nullable ones `Option<&N>`.
pub trait ChunkVisitor<N: FlowNode + ?Sized, S: ?Sized> {
    /// Error that aborts the pass.
    type Error;

    /// Called for the first node of a chunk.
    fn chunk_start(
        &mut self,
        start_node: &N,
        before_block: Option<&N>,
        scanner: &S,
    ) -> Result<(), Self::Error> {
        _ = (start_node, before_block, scanner);
        Ok(())
    }

    /// Called for the last node of a chunk.
    fn chunk_end(
        &mut self,
        end_node: &N,
        after_chunk: Option<&N>,
        scanner: &S,
    ) -> Result<(), Self::Error> {
        _ = (end_node, after_chunk, scanner);
        Ok(())
    }

    /// Called when the start of a parallel region is reached.
    fn parallel_start(
        &mut self,
        parallel_start_node: &N,
        one_branch_start_node: &N,
        scanner: &S,
    ) -> Result<(), Self::Error> {
        _ = (parallel_start_node, one_branch_start_node, scanner);
        Ok(())
    }

    /// Called when the end of a parallel region is reached.
    fn parallel_end(
        &mut self,
        parallel_start_node: &N,
        parallel_end_node: &N,
        scanner: &S,
    ) -> Result<(), Self::Error> {
        _ = (parallel_start_node, parallel_end_node, scanner);
        Ok(())
    }

    /// Called for the first node of one branch.
    fn parallel_branch_start(
        &mut self,
        parallel_start_node: &N,
        branch_start_node: &N,
        scanner: &S,
    ) -> Result<(), Self::Error> {
        _ = (parallel_start_node, branch_start_node, scanner);
        Ok(())
    }

    /// Called for the last node of one branch.
    fn parallel_branch_end(
        &mut self,
        parallel_start_node: &N,
        branch_end_node: &N,
        scanner: &S,
    ) -> Result<(), Self::Error> {
        _ = (parallel_start_node, branch_end_node, scanner);
        Ok(())
    }

    /// Called for a plain node, with its neighbours in scan order.
    fn atom_node(
        &mut self,
        before: Option<&N>,
        atom_node: &N,
        after: Option<&N>,
        scanner: &S,
    ) -> Result<(), Self::Error> {
        _ = (before, atom_node, after, scanner);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// NoopVisitor
// ---------------------------------------------------------------------------

/// A [`ChunkVisitor`] that discards all callbacks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopVisitor;

impl<N: FlowNode + ?Sized, S: ?Sized> ChunkVisitor<N, S> for NoopVisitor {
    type Error = core::convert::Infallible;
}

// ---------------------------------------------------------------------------
// Tee
// ---------------------------------------------------------------------------

/// Forwards every callback to two visitors, first `A` then `B`.
///
/// If `A` fails, `B` does not see the callback.
#[derive(Clone, Debug, Default)]
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tee<A, B> {
    /// Creates a tee over the two visitors.
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the first visitor.
    #[must_use]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns the second visitor.
    #[must_use]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Consumes the tee and returns both visitors.
    #[must_use]
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

/// Expands to one forwarding method of `Tee`'s [`ChunkVisitor`] impl.
macro_rules! tee_forward {
    ($name:ident($($arg:ident: $ty:ty),*)) => {
        fn $name(&mut self, $($arg: $ty,)* scanner: &S) -> Result<(), Self::Error> {
            self.first
                .$name($($arg,)* scanner)
                .map_err(TeeError::First)?;
            self.second
                .$name($($arg,)* scanner)
                .map_err(TeeError::Second)
        }
    };
}

impl<N, S, A, B> ChunkVisitor<N, S> for Tee<A, B>
where
    N: FlowNode + ?Sized,
    S: ?Sized,
    A: ChunkVisitor<N, S>,
    B: ChunkVisitor<N, S>,
{
    type Error = TeeError<A::Error, B::Error>;

    tee_forward!(chunk_start(start_node: &N, before_block: Option<&N>));
    tee_forward!(chunk_end(end_node: &N, after_chunk: Option<&N>));
    tee_forward!(parallel_start(parallel_start_node: &N, one_branch_start_node: &N));
    tee_forward!(parallel_end(parallel_start_node: &N, parallel_end_node: &N));
    tee_forward!(parallel_branch_start(parallel_start_node: &N, branch_start_node: &N));
    tee_forward!(parallel_branch_end(parallel_start_node: &N, branch_end_node: &N));
    tee_forward!(atom_node(before: Option<&N>, atom_node: &N, after: Option<&N>));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::*;

    /// Collects the ids of `atom_node` callbacks and fails on `fail_on`.
    struct AtomIds {
        seen: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl AtomIds {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                seen: Vec::new(),
                fail_on,
            }
        }
    }

    impl ChunkVisitor<str, ()> for AtomIds {
        type Error = String;

        fn atom_node(
            &mut self,
            _before: Option<&str>,
            atom_node: &str,
            _after: Option<&str>,
            _scanner: &(),
        ) -> Result<(), String> {
            if self.fail_on == Some(atom_node) {
                return Err(atom_node.to_string());
            }
            self.seen.push(atom_node.to_string());
            Ok(())
        }
    }

    #[test]
    fn noop_visitor_accepts_everything() {
        let mut v = NoopVisitor;
        let r: Result<(), _> = ChunkVisitor::<str, ()>::parallel_end(&mut v, "5", "9", &());
        assert!(r.is_ok(), "noop visitor never fails");
        assert!(ChunkVisitor::<str, ()>::atom_node(&mut v, None, "2", None, &()).is_ok());
    }

    #[test]
    fn tee_dispatches_to_both_in_order() {
        let mut tee = Tee::new(AtomIds::new(None), AtomIds::new(None));
        tee.atom_node(None, "3", Some("4"), &()).unwrap();
        tee.atom_node(Some("3"), "4", None, &()).unwrap();
        // Callbacks the inner visitors do not override are still accepted.
        tee.chunk_start("2", None, &()).unwrap();

        let (first, second) = tee.into_inner();
        assert_eq!(first.seen, ["3", "4"]);
        assert_eq!(second.seen, ["3", "4"]);
    }

    #[test]
    fn tee_stops_at_first_failure() {
        let mut tee = Tee::new(AtomIds::new(Some("7")), AtomIds::new(None));
        let err = tee.atom_node(None, "7", None, &()).unwrap_err();
        assert_eq!(err, TeeError::First(String::from("7")));
        assert!(tee.second().seen.is_empty(), "second visitor must be skipped");

        let mut tee = Tee::new(AtomIds::new(None), AtomIds::new(Some("8")));
        let err = tee.atom_node(None, "8", None, &()).unwrap_err();
        assert_eq!(err, TeeError::Second(String::from("8")));
        assert_eq!(tee.first().seen, ["8"]);
    }
}
