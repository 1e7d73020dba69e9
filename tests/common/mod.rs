// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use hypercube_coloring::{ColorValue, Edge, Hypercube, Vertex};

/// Build an edge from two n-bit vertex labels, e.g. `edge("000", "001")`.
pub fn edge(a: &str, b: &str) -> Edge {
    Edge::new(
        Vertex::from_label(a).expect("valid vertex label"),
        Vertex::from_label(b).expect("valid vertex label"),
    )
}

/// The whole coloring as a plain vector, for before/after comparisons.
pub fn coloring_vec(cube: &Hypercube) -> Vec<(Edge, ColorValue)> {
    cube.coloring().collect()
}
