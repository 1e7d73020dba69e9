// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural properties of the hypercube model, over a range of
//! dimensions: counts, orderings, lookup consistency, coloring lifecycle.

mod common;

use common::{coloring_vec, edge};
use hypercube_coloring::{
    CubeError, Direction, DirectionSet, Hypercube, Vertex, MAX_DIMENSION, NEUTRAL,
};

#[test]
fn test_counts_for_small_dimensions() {
    for n in 0..=6usize {
        let cube = Hypercube::new(n).unwrap();
        let vertex_count = 1 << n;
        let edge_count = if n == 0 { 0 } else { n << (n - 1) };
        assert_eq!(cube.vertices().len(), vertex_count, "n = {}", n);
        assert_eq!(cube.edges().len(), edge_count, "n = {}", n);
        assert_eq!(
            cube.non_adjacent_pairs().len(),
            vertex_count * (vertex_count - 1) / 2 - edge_count,
            "n = {}",
            n
        );
    }
}

#[test]
fn test_vertices_in_increasing_order_with_msb_first_labels() {
    let cube = Hypercube::new(3).unwrap();
    let labels: Vec<String> = cube.vertices().iter().map(|v| v.label(3)).collect();
    assert_eq!(
        labels,
        vec!["000", "001", "010", "011", "100", "101", "110", "111"]
    );
}

#[test]
fn test_every_edge_differs_in_exactly_its_direction() {
    let cube = Hypercube::new(5).unwrap();
    for info in cube.edges() {
        let diff = DirectionSet::differing(info.edge.source, info.edge.target);
        assert_eq!(diff.len(), 1);
        assert!(diff.contains(info.direction));
        // Lower endpoint first, and its direction bit is clear.
        assert!(info.edge.source < info.edge.target);
        assert!(!info.edge.source.bit(info.direction));
    }
}

#[test]
fn test_edge_at_agrees_with_edge_table() {
    let cube = Hypercube::new(4).unwrap();
    for info in cube.edges() {
        for v in info.edge.endpoints() {
            assert_eq!(cube.edge_at(v, info.direction).unwrap(), info.edge);
        }
    }
}

#[test]
fn test_pair_direction_sets_are_exact() {
    let cube = Hypercube::new(4).unwrap();
    for pair in cube.non_adjacent_pairs() {
        assert_eq!(pair.directions, DirectionSet::differing(pair.v1, pair.v2));
        assert!(pair.directions.len() >= 2);
        assert!(pair.v1 < pair.v2);
    }
}

#[test]
fn test_dimension_too_large_is_rejected() {
    match Hypercube::new(MAX_DIMENSION + 1) {
        Err(CubeError::InvalidDimension { dimension, max }) => {
            assert_eq!(dimension, MAX_DIMENSION + 1);
            assert_eq!(max, MAX_DIMENSION);
        }
        other => panic!("expected InvalidDimension, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_zero_cube_is_a_single_vertex() {
    let cube = Hypercube::new(0).unwrap();
    assert_eq!(cube.vertices(), &[Vertex::new(0)]);
    assert!(cube.edges().is_empty());
    assert!(cube.non_adjacent_pairs().is_empty());
    assert_eq!(coloring_vec(&cube), vec![]);
}

#[test]
fn test_reset_coloring_zeroes_everything() {
    let mut cube = Hypercube::new(3).unwrap();
    cube.set_edge_color(edge("000", "001"), 4).unwrap();
    cube.set_edge_color(edge("010", "110"), 9).unwrap();
    assert!(coloring_vec(&cube).iter().any(|&(_, c)| c != NEUTRAL));

    cube.reset_coloring();
    assert!(coloring_vec(&cube).iter().all(|&(_, c)| c == NEUTRAL));
    assert_eq!(coloring_vec(&cube).len(), 12);
}

#[test]
fn test_set_and_get_edge_color() {
    let mut cube = Hypercube::new(3).unwrap();
    let e = edge("100", "110");
    assert_eq!(cube.edge_color(e).unwrap(), NEUTRAL);
    cube.set_edge_color(e, 7).unwrap();
    assert_eq!(cube.edge_color(e).unwrap(), 7);
}

#[test]
fn test_unknown_lookups_are_contract_violations() {
    let mut cube = Hypercube::new(3).unwrap();
    let diagonal = edge("000", "011");
    assert!(matches!(
        cube.edge_color(diagonal),
        Err(CubeError::UnknownEdge { .. })
    ));
    assert!(matches!(
        cube.set_edge_color(diagonal, 1),
        Err(CubeError::UnknownEdge { .. })
    ));
    assert!(matches!(
        cube.edge_at(Vertex::new(0), Direction::new(3)),
        Err(CubeError::UnknownVertexDirection { .. })
    ));
}
