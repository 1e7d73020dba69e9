// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Violation report for rejected rule checks.
//!
//! A rejection is an expected outcome, not a program error: the greedy
//! colorer probes colors and treats a violation as "try the next one". The
//! report still carries the offending pair so rejected probes can be
//! logged and counted by variant.

use crate::geometry::{Direction, Vertex};
use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Why a propagation wave was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
pub enum RuleViolation {
    /// A non-adjacent pair ended up with no neutral slot, no agreeing
    /// direction, and therefore no way to be satisfied.
    UnsatisfiedPair {
        v1: Vertex,
        v2: Vertex,
        /// Direction of the edge whose processing exposed the violation.
        edge_direction: Direction,
    },
}

impl RuleViolation {
    /// Position of this variant for per-variant statistics buckets.
    pub(crate) fn variant_index(&self) -> usize {
        match self {
            RuleViolation::UnsatisfiedPair { .. } => 0,
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleViolation::UnsatisfiedPair {
                v1,
                v2,
                edge_direction,
            } => {
                write!(
                    f,
                    "pair ({}, {}) cannot be satisfied (processing direction {})",
                    v1, v2, edge_direction
                )
            }
        }
    }
}
