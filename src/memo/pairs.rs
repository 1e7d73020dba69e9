// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-adjacent pair table construction.
//!
//! Every unordered vertex pair (v1 < v2) that is not an edge is recorded
//! together with the set of directions in which the two vertices differ.
//! That set always has size >= 2: a size-1 difference is an edge, and a
//! size-0 difference is the same vertex.
//!
//! The per-vertex index lets propagation visit only the pairs touching an
//! edge endpoint instead of scanning the whole table.

use super::{EdgeInfo, NonAdjacentPair, PairId};
use crate::geometry::{DirectionSet, Vertex};

/// Build the pair table and the per-vertex pair index.
pub(super) fn build_pair_tables(
    n: usize,
    edges: &[EdgeInfo],
) -> (Vec<NonAdjacentPair>, Vec<Vec<PairId>>) {
    let vertex_count = 1usize << n;
    let pair_count = vertex_count * (vertex_count - 1) / 2 - edges.len();

    let mut pairs = Vec::with_capacity(pair_count);
    let mut pairs_by_vertex = vec![Vec::new(); vertex_count];

    for i1 in 0..vertex_count as u32 {
        for i2 in (i1 + 1)..vertex_count as u32 {
            let v1 = Vertex::new(i1);
            let v2 = Vertex::new(i2);
            let directions = DirectionSet::differing(v1, v2);
            if directions.len() < 2 {
                // A single differing bit is an edge, not a pair.
                continue;
            }

            let id: PairId = pairs.len();
            pairs.push(NonAdjacentPair { v1, v2, directions });
            pairs_by_vertex[i1 as usize].push(id);
            pairs_by_vertex[i2 as usize].push(id);
        }
    }

    (pairs, pairs_by_vertex)
}
