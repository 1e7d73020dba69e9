// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable).
//!
//! Everything in this module is computed once at construction and never
//! changes afterwards:
//! - the vertex list, in increasing integer order
//! - the edge table, direction-major, with each edge's fixed direction
//! - the dense (vertex, direction) -> edge lookup
//! - the non-adjacent pair table, each pair annotated with the set of
//!   directions in which its vertices differ
//! - a per-vertex index of the pairs touching that vertex
//!
//! The mutable coloring lives in [`crate::state`]; propagation and search
//! only ever read from here.

mod edges;
mod pairs;

use crate::geometry::{Direction, DirectionSet, Edge, Vertex};
use std::collections::HashMap;

/// Index of an edge in the memo's edge table.
pub type EdgeId = usize;

/// Index of a non-adjacent pair in the memo's pair table.
pub type PairId = usize;

/// One row of the edge table: the endpoint pair and its fixed direction.
#[derive(Debug, Clone, Copy)]
pub struct EdgeInfo {
    /// The endpoints, smaller vertex first.
    pub edge: Edge,
    /// The bit position in which the endpoints differ.
    pub direction: Direction,
}

/// A non-adjacent vertex pair: two vertices differing in at least two bits.
#[derive(Debug, Clone, Copy)]
pub struct NonAdjacentPair {
    /// The lexicographically smaller vertex.
    pub v1: Vertex,
    /// The lexicographically larger vertex.
    pub v2: Vertex,
    /// The directions in which `v1` and `v2` differ; always of size >= 2.
    pub directions: DirectionSet,
}

/// Immutable precomputed hypercube structure.
///
/// At the dimensions this crate targets (n <= 12) every table fits easily in
/// memory; the dominant cost is the pair table with C(2^n, 2) entries.
#[derive(Debug, Clone)]
pub struct CubeMemo {
    dimension: usize,
    vertices: Vec<Vertex>,
    edges: Vec<EdgeInfo>,
    /// Resolves a public `Edge` value to its table index.
    edge_ids: HashMap<Edge, EdgeId>,
    /// Dense lookup: index `vertex * n + direction`. Total on a hypercube,
    /// since every vertex has exactly one edge in every direction; each edge
    /// appears under exactly two keys.
    by_vertex_direction: Vec<EdgeId>,
    pairs: Vec<NonAdjacentPair>,
    pairs_by_vertex: Vec<Vec<PairId>>,
}

impl CubeMemo {
    /// Build all MEMO tables for dimension `n`.
    ///
    /// The caller validates the dimension; see [`crate::cube::Hypercube::new`].
    pub fn build(n: usize) -> Self {
        let vertex_count = 1usize << n;
        let vertices: Vec<Vertex> = (0..vertex_count as u32).map(Vertex::new).collect();

        let (edges, edge_ids, by_vertex_direction) = edges::build_edge_tables(n);
        let (pairs, pairs_by_vertex) = pairs::build_pair_tables(n, &edges);

        log::debug!(
            "built {}-cube memo: {} vertices, {} edges, {} non-adjacent pairs",
            n,
            vertices.len(),
            edges.len(),
            pairs.len()
        );

        Self {
            dimension: n,
            vertices,
            edges,
            edge_ids,
            by_vertex_direction,
            pairs,
            pairs_by_vertex,
        }
    }

    /// The dimension n this memo was built for.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All vertices, in increasing integer order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The edge table, direction-major.
    pub fn edges(&self) -> &[EdgeInfo] {
        &self.edges
    }

    /// Number of edges, n * 2^(n-1).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up one edge-table row.
    pub fn edge(&self, id: EdgeId) -> &EdgeInfo {
        &self.edges[id]
    }

    /// Resolve a public edge value to its table index, if the edge exists.
    pub fn edge_id(&self, edge: Edge) -> Option<EdgeId> {
        self.edge_ids.get(&edge).copied()
    }

    /// The edge leaving `vertex` along `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` or `direction` is out of range for this cube; the
    /// checked variant lives on the model facade.
    pub fn edge_at(&self, vertex: Vertex, direction: Direction) -> EdgeId {
        self.by_vertex_direction[vertex.index() as usize * self.dimension + direction.as_usize()]
    }

    /// All non-adjacent pairs.
    pub fn pairs(&self) -> &[NonAdjacentPair] {
        &self.pairs
    }

    /// Look up one pair-table row.
    pub fn pair(&self, id: PairId) -> &NonAdjacentPair {
        &self.pairs[id]
    }

    /// The pairs touching `vertex`.
    pub fn pairs_of(&self, vertex: Vertex) -> &[PairId] {
        &self.pairs_by_vertex[vertex.index() as usize]
    }
}
