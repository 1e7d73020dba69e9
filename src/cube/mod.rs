// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The hypercube model: MEMO structure plus DYNAMIC coloring.
//!
//! [`Hypercube`] combines the immutable [`CubeMemo`] tables with the mutable
//! [`Coloring`] and the distinct-color counter, and is the single funnel for
//! every coloring mutation. External callers speak [`Edge`] values; the
//! facade resolves them against the memo and rejects unknown keys instead of
//! silently defaulting.

use crate::geometry::{Direction, Edge, Vertex};
use crate::memo::{CubeMemo, EdgeId, EdgeInfo, NonAdjacentPair};
use crate::propagation::{self, RuleViolation};
use crate::state::{ColorValue, Coloring, NEUTRAL};
use log::debug;
use std::fmt;

/// Largest supported dimension.
///
/// A negative dimension is unrepresentable at the type level; the
/// representable invalid inputs are dimensions whose pair table (C(2^n, 2)
/// entries) would not fit, so construction rejects anything above this.
pub const MAX_DIMENSION: usize = 12;

/// Errors from model construction and lookups.
///
/// A rejected rule check is NOT an error; see [`Hypercube::rule_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError {
    /// The requested dimension has no supported model.
    InvalidDimension { dimension: usize, max: usize },

    /// An edge value that is not part of this cube's edge set.
    UnknownEdge { source: Vertex, target: Vertex },

    /// A (vertex, direction) key outside this cube.
    UnknownVertexDirection { vertex: Vertex, direction: Direction },
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeError::InvalidDimension { dimension, max } => write!(
                f,
                "dimension {dimension} exceeds the supported maximum {max}"
            ),
            CubeError::UnknownEdge { source, target } => {
                write!(f, "({source},{target}) is not an edge of this cube")
            }
            CubeError::UnknownVertexDirection { vertex, direction } => write!(
                f,
                "no edge leaves vertex {vertex} along direction {direction}"
            ),
        }
    }
}

impl std::error::Error for CubeError {}

/// The n-dimensional hypercube with its edge coloring.
#[derive(Debug, Clone)]
pub struct Hypercube {
    memo: CubeMemo,
    coloring: Coloring,
    /// Running count of distinct non-neutral colors in use; the greedy
    /// colorer derives fresh colors from it, so seeding a partial coloring
    /// by hand should be followed by [`Hypercube::set_num_colors`].
    num_colors: u32,
}

impl Hypercube {
    /// Construct the model for dimension `n`.
    ///
    /// Builds the vertex list, the direction-major edge table, the
    /// (vertex, direction) lookup and the non-adjacent pair table, and
    /// initializes the coloring to all-neutral.
    pub fn new(n: usize) -> Result<Self, CubeError> {
        if n > MAX_DIMENSION {
            return Err(CubeError::InvalidDimension {
                dimension: n,
                max: MAX_DIMENSION,
            });
        }
        let memo = CubeMemo::build(n);
        let coloring = Coloring::new(memo.edge_count());
        Ok(Self {
            memo,
            coloring,
            num_colors: 0,
        })
    }

    /// The dimension n.
    pub fn dimension(&self) -> usize {
        self.memo.dimension()
    }

    /// All vertices, in increasing integer order.
    pub fn vertices(&self) -> &[Vertex] {
        self.memo.vertices()
    }

    /// The edge table: every edge with its fixed direction, direction-major.
    pub fn edges(&self) -> &[EdgeInfo] {
        self.memo.edges()
    }

    /// All non-adjacent pairs with their difference-direction sets.
    pub fn non_adjacent_pairs(&self) -> &[NonAdjacentPair] {
        self.memo.pairs()
    }

    /// The edge leaving `vertex` along `direction`.
    pub fn edge_at(&self, vertex: Vertex, direction: Direction) -> Result<Edge, CubeError> {
        let n = self.memo.dimension();
        if (vertex.index() as usize) < self.memo.vertices().len() && direction.as_usize() < n {
            Ok(self.memo.edge(self.memo.edge_at(vertex, direction)).edge)
        } else {
            Err(CubeError::UnknownVertexDirection { vertex, direction })
        }
    }

    /// The current coloring, in edge-table order.
    pub fn coloring(&self) -> impl Iterator<Item = (Edge, ColorValue)> + '_ {
        self.coloring
            .iter()
            .map(|(id, color)| (self.memo.edge(id).edge, color))
    }

    /// The color of one edge.
    pub fn edge_color(&self, edge: Edge) -> Result<ColorValue, CubeError> {
        Ok(self.coloring.get(self.resolve(edge)?))
    }

    /// Set one edge's color directly, without any rule checking.
    ///
    /// This is the raw mutation used to seed partial colorings; colorings
    /// built this way are not necessarily consistent with the pairwise rule.
    pub fn set_edge_color(&mut self, edge: Edge, color: ColorValue) -> Result<(), CubeError> {
        let id = self.resolve(edge)?;
        self.coloring.set(id, color);
        Ok(())
    }

    /// Reset every edge back to neutral.
    pub fn reset_coloring(&mut self) {
        self.coloring.reset();
    }

    /// Attempt to color `edge` with `color` under the pairwise rule.
    ///
    /// Returns `Ok(true)` and commits the whole propagation wave when it is
    /// consistent; returns `Ok(false)` and leaves the coloring exactly as it
    /// was when it is not. `Err` is reserved for unknown edges.
    pub fn rule_check(&mut self, edge: Edge, color: ColorValue) -> Result<bool, CubeError> {
        let id = self.resolve(edge)?;
        match propagation::rule_check(&self.memo, &mut self.coloring, id, color) {
            Ok(_) => Ok(true),
            Err(violation) => {
                debug!("rule check rejected {} <- {}: {}", edge, color, violation);
                Ok(false)
            }
        }
    }

    /// The running distinct-color counter.
    pub fn num_colors(&self) -> u32 {
        self.num_colors
    }

    /// Set the distinct-color counter, e.g. after seeding a coloring by hand.
    pub fn set_num_colors(&mut self, num_colors: u32) {
        self.num_colors = num_colors;
    }

    /// The distinct non-neutral colors per direction, in the order they are
    /// first observed scanning that direction's edges in table order.
    pub fn colors_by_direction(&self) -> Vec<Vec<ColorValue>> {
        let mut per_direction = vec![Vec::new(); self.memo.dimension()];
        for (id, color) in self.coloring.iter() {
            if color == NEUTRAL {
                continue;
            }
            let used = &mut per_direction[self.memo.edge(id).direction.as_usize()];
            if !used.contains(&color) {
                used.push(color);
            }
        }
        per_direction
    }

    /// Resolve a public edge value to its table index.
    fn resolve(&self, edge: Edge) -> Result<EdgeId, CubeError> {
        self.memo.edge_id(edge).ok_or(CubeError::UnknownEdge {
            source: edge.source,
            target: edge.target,
        })
    }

    /// MEMO access for in-crate collaborators (search, diagnostics).
    pub(crate) fn memo(&self) -> &CubeMemo {
        &self.memo
    }

    /// Coloring access for in-crate read-only collaborators.
    pub(crate) fn raw_coloring(&self) -> &Coloring {
        &self.coloring
    }

    /// Rule check by table index, reporting the violation; the greedy
    /// colorer needs the distinction between outcomes without re-resolving
    /// edge values.
    pub(crate) fn rule_check_id(
        &mut self,
        edge: EdgeId,
        color: ColorValue,
    ) -> Result<usize, RuleViolation> {
        propagation::rule_check(&self.memo, &mut self.coloring, edge, color)
    }
}
