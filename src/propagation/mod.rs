// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint propagation for the pairwise consistency rule.
//!
//! The rule operates on non-adjacent vertex pairs: for a pair (v1, v2)
//! differing in the direction set D, the pair is satisfied when some
//! direction d' in D has equal edge colors at both vertices, or when at
//! least two of the 2·|D| per-direction color lookups are still neutral
//! (the rule is deferred until more of the cube is colored). A pair with
//! exactly one neutral lookup and no agreeing direction forces that neutral
//! edge to its counterpart's color, which can cascade.
//!
//! [`rule_check`] is the single entry point: it tentatively applies one
//! color assignment, drives a worklist over the affected pairs, and either
//! commits the whole wave or rolls every mutation back. Callers never see a
//! partially propagated coloring.

mod check;
mod errors;

pub use check::rule_check;
pub use errors::RuleViolation;
