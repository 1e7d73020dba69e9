// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Run counters for the greedy colorer, stored as a flat array indexed by
//! counter. Rule rejections are additionally broken down by violation
//! variant, in the slots after the plain counters.

use crate::propagation::RuleViolation;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Rule checks attempted, accepted or not.
    ChecksAttempted,
    /// Edges colored by an accepted check (the picked edge only).
    EdgesColored,
    /// Edges colored as cascaded forced assignments.
    ForcedAssignments,
    /// Accepted checks that introduced a brand-new color.
    FreshColors,
}

const COUNT: usize = Counters::COUNT + RuleViolation::COUNT;

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Increment the specified counter by `amount`.
    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Record a rejected rule check, bucketed by violation variant.
    pub(crate) fn record_violation(&mut self, violation: &RuleViolation) {
        self.stats[Counters::COUNT + violation.variant_index()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Total rejected rule checks across all violation variants.
    pub fn rejections(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}
