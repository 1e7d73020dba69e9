// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The worklist rule checker.
//!
//! One call is one atomic propagation wave:
//!
//! 1. Snapshot the coloring.
//! 2. Tentatively set the proposed color and seed the work queue with that
//!    edge.
//! 3. For each queued edge, revisit every non-adjacent pair that touches
//!    one of its endpoints in the edge's direction. A pair with exactly one
//!    neutral slot and no agreeing direction forces the neutral edge, which
//!    is queued in turn.
//! 4. Any unsatisfiable pair rejects the wave: the snapshot is restored and
//!    the caller sees the coloring exactly as it was.
//!
//! The queue replaces recursive propagation so cascade depth never touches
//! the call stack.

use super::errors::RuleViolation;
use crate::geometry::{Direction, Vertex};
use crate::memo::{CubeMemo, EdgeId, NonAdjacentPair};
use crate::state::{ColorValue, Coloring, NEUTRAL};
use log::trace;
use std::collections::VecDeque;

/// Outcome of scanning a single pair.
enum PairOutcome {
    Satisfied,
    /// The pair's one neutral slot was forced; the edge needs propagation.
    Forced(EdgeId),
    Violated,
}

/// Attempt to color `edge` with `color` and propagate the consequences.
///
/// On success the coloring keeps the proposed assignment plus every forced
/// one, and the number of forced assignments is returned. On rejection the
/// coloring is restored to its state before the call; the proposed mutation
/// and all cascaded mutations are discarded together.
pub fn rule_check(
    memo: &CubeMemo,
    coloring: &mut Coloring,
    edge: EdgeId,
    color: ColorValue,
) -> Result<usize, RuleViolation> {
    let snapshot = coloring.snapshot();

    coloring.set(edge, color);
    let mut queue = VecDeque::new();
    queue.push_back(edge);
    let mut forced = 0usize;

    while let Some(current) = queue.pop_front() {
        let info = *memo.edge(current);
        for endpoint in info.edge.endpoints() {
            for &pair_id in memo.pairs_of(endpoint) {
                let pair = memo.pair(pair_id);
                if !pair.directions.contains(info.direction) {
                    continue;
                }
                match scan_pair(memo, coloring, pair) {
                    PairOutcome::Satisfied => {}
                    PairOutcome::Forced(forced_edge) => {
                        forced += 1;
                        queue.push_back(forced_edge);
                    }
                    PairOutcome::Violated => {
                        coloring.restore(snapshot);
                        return Err(RuleViolation::UnsatisfiedPair {
                            v1: pair.v1,
                            v2: pair.v2,
                            edge_direction: info.direction,
                        });
                    }
                }
            }
        }
    }

    Ok(forced)
}

/// Scan one pair's direction set and resolve it.
///
/// Counts neutral lookups over both vertices, remembering the last neutral
/// slot seen; when the scan ends with exactly one neutral and no satisfied
/// direction, that slot is forced to its counterpart's color. Two or more
/// neutrals defer the pair without forcing anything.
fn scan_pair(memo: &CubeMemo, coloring: &mut Coloring, pair: &NonAdjacentPair) -> PairOutcome {
    let mut satisfied = false;
    let mut neutral_seen = 0usize;
    // (owner of the neutral slot, its counterpart, the direction); the last
    // neutral observed wins, which is unambiguous in the only case that
    // matters, neutral_seen == 1.
    let mut neutral_slot: Option<(Vertex, Vertex, Direction)> = None;

    for direction in pair.directions.iter() {
        let c1 = coloring.get(memo.edge_at(pair.v1, direction));
        let c2 = coloring.get(memo.edge_at(pair.v2, direction));

        if c1 == NEUTRAL {
            neutral_seen += 1;
            neutral_slot = Some((pair.v1, pair.v2, direction));
        }
        if c2 == NEUTRAL {
            neutral_seen += 1;
            neutral_slot = Some((pair.v2, pair.v1, direction));
        }
        if c1 == c2 || neutral_seen > 1 {
            satisfied = true;
        }
    }

    if satisfied {
        return PairOutcome::Satisfied;
    }
    if neutral_seen == 1 {
        if let Some((owner, counterpart, direction)) = neutral_slot {
            let forced_edge = memo.edge_at(owner, direction);
            let forced_color = coloring.get(memo.edge_at(counterpart, direction));
            coloring.set(forced_edge, forced_color);
            trace!(
                "pair ({},{}) forces edge {} to color {}",
                pair.v1,
                pair.v2,
                memo.edge(forced_edge).edge,
                forced_color
            );
            return PairOutcome::Forced(forced_edge);
        }
    }
    PairOutcome::Violated
}
