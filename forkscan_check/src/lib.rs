// Copyright 2026 the Forkscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural checks over event logs recorded from flow-graph scan passes.
//!
//! Each check is a pure function of a finished log (`&[EventRecord]`) and
//! either passes or returns a [`CheckError`] naming the offending node ids:
//!
//! - [`check_no_duplicates`]: no callback was reported twice.
//! - [`check_region_balance`]: parallel region start/end events nest like
//!   brackets in scan order.
//! - [`check_branch_symmetry`]: every region's branch starts and ends pair up.
//!
//! [`check_all`] runs the three independently and collects their failures in
//! a [`CheckReport`]. Run the checks only after the pass that produced the
//! log has finished.

#![no_std]

extern crate alloc;

mod branches;
mod duplicates;
pub mod error;
mod regions;

use alloc::vec::Vec;

use forkscan_core::event::{EventKind, EventRecord};

pub use branches::check_branch_symmetry;
pub use duplicates::check_no_duplicates;
pub use error::{BranchSide, CheckError};
pub use regions::check_region_balance;

/// Order in which the scanning engine reported the graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    /// Newest node first: a region's end is reported before its start.
    #[default]
    Backward,
    /// Oldest node first: a region's start is reported before its end.
    Forward,
}

impl ScanDirection {
    /// The region event that opens a bracket in this direction.
    #[must_use]
    pub const fn open_kind(self) -> EventKind {
        match self {
            Self::Backward => EventKind::ParallelEnd,
            Self::Forward => EventKind::ParallelStart,
        }
    }

    /// The region event that closes a bracket in this direction.
    #[must_use]
    pub const fn close_kind(self) -> EventKind {
        match self {
            Self::Backward => EventKind::ParallelStart,
            Self::Forward => EventKind::ParallelEnd,
        }
    }
}

/// Configuration for [`check_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Scan direction the log was recorded in.
    pub direction: ScanDirection,
}

impl CheckConfig {
    /// Configuration for engines that scan from the newest node backward.
    #[must_use]
    pub const fn backward() -> Self {
        Self {
            direction: ScanDirection::Backward,
        }
    }

    /// Configuration for engines that scan from the oldest node forward.
    #[must_use]
    pub const fn forward() -> Self {
        Self {
            direction: ScanDirection::Forward,
        }
    }
}

/// Outcome of [`check_all`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of records checked.
    pub events: usize,
    /// Failures in check order: duplicates, region balance, branch symmetry.
    pub failures: Vec<CheckError>,
}

impl CheckReport {
    /// Returns `true` if every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns `Ok(())` if every check passed, otherwise the first failure.
    ///
    /// # Errors
    ///
    /// The first entry of [`failures`](Self::failures).
    pub fn into_result(self) -> Result<(), CheckError> {
        match self.failures.into_iter().next() {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

/// Runs every check against `records`.
///
/// The checks are independent: a failure in one does not stop the others.
#[must_use]
pub fn check_all(records: &[EventRecord], config: &CheckConfig) -> CheckReport {
    let outcomes = [
        ("duplicates", check_no_duplicates(records)),
        (
            "region balance",
            check_region_balance(records, config.direction),
        ),
        ("branch symmetry", check_branch_symmetry(records)),
    ];

    let mut failures = Vec::new();
    for (check, outcome) in outcomes {
        match outcome {
            Ok(()) => tracing::debug!(check, events = records.len(), "check passed"),
            Err(err) => {
                tracing::warn!(check, %err, "check failed");
                failures.push(err);
            }
        }
    }

    CheckReport {
        events: records.len(),
        failures,
    }
}
